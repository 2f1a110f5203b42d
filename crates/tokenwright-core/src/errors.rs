//! Error taxonomy for token issuance, verification and acquisition.
//!
//! Two enums cover the two halves of the crate family:
//!
//! - [`TokenError`]: creating and verifying signed credentials
//! - [`AcquireError`]: fetching bearer tokens from a remote endpoint
//!
//! Verification only ever produces [`TokenError::InvalidToken`] or
//! [`TokenError::ExpiredToken`], so callers can tell a forged credential
//! apart from one that merely ran out of time.

use thiserror::Error;

/// Errors raised while creating or verifying a credential.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The random source could not produce a token identifier.
    #[error("failed to generate token id: {0}")]
    IdentifierGeneration(String),

    /// The signing primitive rejected the payload or key.
    #[error("failed to sign token: {0}")]
    Signing(String),

    /// The secret is too short to be used as an HMAC key.
    #[error("invalid key size: must be at least {min} bytes")]
    InvalidKeySize { min: usize },

    /// Malformed structure, unexpected algorithm, bad signature or bad claims.
    #[error("token is invalid")]
    InvalidToken,

    /// Authentic token whose validity window has elapsed.
    #[error("token has expired")]
    ExpiredToken,
}

impl TokenError {
    /// Returns `true` for tokens rejected as forged or malformed.
    pub fn is_invalid(&self) -> bool {
        matches!(self, TokenError::InvalidToken)
    }

    /// Returns `true` for authentic tokens past their expiry.
    pub fn is_expired(&self) -> bool {
        matches!(self, TokenError::ExpiredToken)
    }
}

/// Errors raised while acquiring a bearer token over HTTP.
///
/// Variants carry structured fields so callers can branch on the status code
/// or URL without parsing the message. Form values are never stored in the
/// clear; `parameters` holds the redacted encoding (see [`crate::redact_form`]).
#[derive(Debug, Error)]
pub enum AcquireError {
    /// The form parameters could not be URL-encoded.
    #[error("failed to encode form parameters: {0}")]
    Encoding(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(String),

    /// The request never produced a response (refused, timed out, DNS).
    #[error("request to '{url}' failed with parameters '{parameters}': {source}")]
    Transport {
        url: String,
        parameters: String,
        source: reqwest::Error,
    },

    /// A success response whose body could not be read in full.
    #[error("invalid access token - url: '{url}', response code {code}, response '{message}'")]
    AccessTokenInvalid {
        url: String,
        code: u16,
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("unexpected response - url: '{url}', response code {code}, response '{body}'")]
    UnexpectedStatus { url: String, code: u16, body: String },
}

impl AcquireError {
    /// HTTP status code, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AcquireError::AccessTokenInvalid { code, .. }
            | AcquireError::UnexpectedStatus { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` for failures a caller may reasonably retry.
    pub fn is_transport(&self) -> bool {
        matches!(self, AcquireError::Transport { .. })
    }
}
