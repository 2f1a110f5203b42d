use anyhow::{Context, anyhow};
use chrono::Duration;
use tokenwright_auth::{JwtMaker, Maker, inspect_token};
use tokenwright_client::TokenClient;
use tokenwright_core::TokenError;

/// Exit code for a token that failed signature or structure checks.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for an authentic but expired token.
pub const EXIT_EXPIRED: u8 = 2;

/// Parses a `key=value` form parameter.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

/// Issues a token for `username` valid for `ttl_seconds`.
pub fn issue(maker: &JwtMaker, username: &str, ttl_seconds: i64) -> anyhow::Result<String> {
    let ttl = Duration::try_seconds(ttl_seconds)
        .ok_or_else(|| anyhow!("token lifetime of {ttl_seconds} seconds is out of range"))?;
    Ok(maker.create_token(username, ttl)?)
}

/// Verifies `token` and renders its payload as pretty JSON.
pub fn verify(maker: &JwtMaker, token: &str) -> anyhow::Result<String> {
    let payload = maker.verify_token(token)?;
    serde_json::to_string_pretty(&payload).context("failed to render payload")
}

/// Decodes `token` without verification and renders it as pretty JSON.
pub fn inspect(token: &str) -> anyhow::Result<String> {
    let inspection = inspect_token(token)?;
    serde_json::to_string_pretty(&inspection).context("failed to render token")
}

pub fn acquire(client: &TokenClient, url: &str, params: &[(String, String)]) -> anyhow::Result<String> {
    Ok(client.acquire_token(url, params)?)
}

/// Maps a command failure to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<TokenError>() {
        Some(TokenError::ExpiredToken) => EXIT_EXPIRED,
        _ => EXIT_INVALID,
    }
}
