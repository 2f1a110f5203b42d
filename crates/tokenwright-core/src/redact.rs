//! Redaction of URL-encoded form bodies for diagnostics.

const MASK: &str = "***";

/// Replaces every value in an `application/x-www-form-urlencoded` body with a mask.
///
/// Keys are kept as encoded so the shape of the request stays visible in
/// errors and logs, while client secrets and passwords do not.
///
/// ```
/// use tokenwright_core::redact_form;
///
/// assert_eq!(
///     redact_form("grant_type=client_credentials&client_secret=s3cr3t"),
///     "grant_type=***&client_secret=***"
/// );
/// ```
pub fn redact_form(encoded: &str) -> String {
    encoded
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) => format!("{key}={MASK}"),
            None => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}
