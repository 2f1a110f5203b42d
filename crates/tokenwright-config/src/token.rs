//! Credential signing configuration.

use std::env;
use std::fmt;

const DEFAULT_SECRET: &str = "development-secret-change-me-in-production";
const DEFAULT_LIFETIME_SECONDS: i64 = 900;

/// Settings for the credential maker.
///
/// # Environment Variables
///
/// - `TOKEN_SECRET`: HMAC signing secret (default: a development-only value)
/// - `TOKEN_LIFETIME_SECONDS`: Default credential lifetime (default: `900`)
#[derive(Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret. Never printed.
    pub secret: String,
    /// Lifetime applied when the caller does not pick one.
    pub token_lifetime: i64,
}

impl TokenConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("TOKEN_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            token_lifetime: env::var("TOKEN_LIFETIME_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_LIFETIME_SECONDS),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            token_lifetime: DEFAULT_LIFETIME_SECONDS,
        }
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}
