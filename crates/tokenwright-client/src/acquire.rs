//! Form-encoded token acquisition over HTTP.
//!
//! Each call makes exactly one `POST` with an
//! `application/x-www-form-urlencoded` body and an exact `Content-Length`.
//! There is no retry or backoff. Callers that want either wrap the call.
//!
//! # Outcomes
//!
//! | Response                          | Result                                   |
//! |-----------------------------------|------------------------------------------|
//! | no response (refused, DNS, timeout) | [`AcquireError::Transport`]            |
//! | 2xx, body read as UTF-8           | `Ok(body)` verbatim                      |
//! | 2xx, body unreadable or not UTF-8 | [`AcquireError::AccessTokenInvalid`]     |
//! | any other status                  | [`AcquireError::UnexpectedStatus`]       |
//!
//! Form values are redacted before they reach an error or a log line.

use std::io::Read;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, warn};

use tokenwright_config::AcquireConfig;
use tokenwright_core::{AcquireError, redact_form};

/// Content type of every acquisition request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Blocking client for remote token endpoints.
///
/// Cloning is cheap and shares the underlying connection pool. Must not be
/// used from inside an async runtime.
#[derive(Debug, Clone)]
pub struct TokenClient {
    http: Client,
}

impl TokenClient {
    /// Builds a client with the timeout and user agent from `config`.
    pub fn new(config: &AcquireConfig) -> Result<Self, AcquireError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AcquireError::Client(e.to_string()))?;

        Ok(Self { http })
    }

    /// Wraps an already configured `reqwest` client.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Posts `form` to `endpoint_url` and returns the response body.
    ///
    /// `form` is anything `serde_urlencoded` accepts: a slice of pairs, a map
    /// or a flat struct.
    pub fn acquire_token<P>(&self, endpoint_url: &str, form: &P) -> Result<String, AcquireError>
    where
        P: Serialize + ?Sized,
    {
        let encoded =
            serde_urlencoded::to_string(form).map_err(|e| AcquireError::Encoding(e.to_string()))?;
        let parameters = redact_form(&encoded);

        debug!(
            url = %endpoint_url,
            parameters = %parameters,
            "Requesting access token"
        );

        let mut response = self
            .http
            .post(endpoint_url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CONTENT_LENGTH, encoded.len())
            .body(encoded)
            .send()
            .map_err(|source| {
                warn!(url = %endpoint_url, error = %source, "Token request failed");
                AcquireError::Transport {
                    url: endpoint_url.to_string(),
                    parameters,
                    source,
                }
            })?;

        let status = response.status();
        let code = status.as_u16();

        let mut raw = Vec::new();
        let read = response.read_to_end(&mut raw);

        if !status.is_success() {
            warn!(url = %endpoint_url, status = code, "Token endpoint returned an error status");
            return Err(AcquireError::UnexpectedStatus {
                url: endpoint_url.to_string(),
                code,
                body: String::from_utf8_lossy(&raw).into_owned(),
            });
        }

        let body = match read {
            Ok(_) => String::from_utf8(raw).map_err(|e| {
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }),
            Err(e) => {
                warn!(url = %endpoint_url, status = code, error = %e, "Failed to read token response");
                Err(String::from_utf8_lossy(&raw).into_owned())
            }
        };

        match body {
            Ok(body) => {
                debug!(url = %endpoint_url, status = code, "Access token received");
                Ok(body)
            }
            Err(message) => Err(AcquireError::AccessTokenInvalid {
                url: endpoint_url.to_string(),
                code,
                message,
            }),
        }
    }
}

/// Posts `form` to `endpoint_url` with a client built from [`AcquireConfig::default`].
pub fn acquire_token<P>(endpoint_url: &str, form: &P) -> Result<String, AcquireError>
where
    P: Serialize + ?Sized,
{
    TokenClient::new(&AcquireConfig::default())?.acquire_token(endpoint_url, form)
}
