//! HTTP settings for remote token acquisition.

use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Transport settings for the acquisition client.
///
/// # Environment Variables
///
/// - `ACQUIRE_TIMEOUT_SECONDS`: Whole-request deadline in seconds (default: `30`)
/// - `ACQUIRE_USER_AGENT`: `User-Agent` header value (default: `tokenwright/<version>`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcquireConfig {
    /// Deadline for connect, send and body read combined.
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl AcquireConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_seconds: env::var("ACQUIRE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
            user_agent: env::var("ACQUIRE_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Request deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: concat!("tokenwright/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
