//! Credential creation and verification.
//!
//! Credentials are compact JWS tokens (`header.claims.signature`) signed
//! with HS256. The header always declares the algorithm, and verification
//! accepts HS256 only, so a token re-signed under another algorithm is
//! rejected before its signature is considered.
//!
//! # Verification order
//!
//! 1. Structure, header and algorithm
//! 2. Signature, compared in constant time
//! 3. Claims shape
//! 4. Expiry
//!
//! Failures in steps 1-3 are [`TokenError::InvalidToken`]. Only a token that
//! passes all of them can be reported as [`TokenError::ExpiredToken`], so a
//! forged token is never mistaken for a stale one.
//!
//! # Example
//!
//! ```ignore
//! use chrono::Duration;
//! use tokenwright_auth::{JwtMaker, Maker};
//! use tokenwright_config::TokenConfig;
//!
//! let maker = JwtMaker::from_config(&TokenConfig::from_env())?;
//! let token = maker.create_token("alice", Duration::hours(1))?;
//!
//! match maker.verify_token(&token) {
//!     Ok(payload) => println!("welcome back {}", payload.username),
//!     Err(e) if e.is_expired() => println!("please sign in again"),
//!     Err(_) => println!("access denied"),
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use tokenwright_config::TokenConfig;
use tokenwright_core::TokenError;

use crate::payload::Payload;

/// Minimum secret length in bytes accepted by [`JwtMaker::new`].
pub const MIN_SECRET_SIZE: usize = 32;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues and checks credentials.
pub trait Maker: Send + Sync {
    /// Creates a signed credential for `username` valid for `duration`.
    fn create_token(&self, username: &str, duration: Duration) -> Result<String, TokenError>;

    /// Verifies a credential and returns its payload.
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError>;
}

/// [`Maker`] backed by HMAC-SHA256 signed JSON Web Tokens.
///
/// The secret is fixed at construction. The maker holds no mutable state and
/// can be shared across threads freely.
#[derive(Clone)]
pub struct JwtMaker {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtMaker {
    /// Creates a maker for `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidKeySize`] when the secret is shorter than
    /// [`MIN_SECRET_SIZE`] bytes.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_SIZE {
            return Err(TokenError::InvalidKeySize {
                min: MIN_SECRET_SIZE,
            });
        }

        // Expiry is judged by the payload against the caller's clock, not by
        // the registered `exp` claim.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn from_config(config: &TokenConfig) -> Result<Self, TokenError> {
        Self::new(&config.secret)
    }

    /// Creates a credential and also returns the payload it carries.
    pub fn create_token_with_payload(
        &self,
        username: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(username, duration)?;
        let token = self.sign(&payload)?;

        debug!(
            token_id = %payload.id,
            expires_at = %payload.expired_at,
            "Issued token"
        );

        Ok((token, payload))
    }

    /// Verifies a credential as of `now`.
    ///
    /// # Errors
    ///
    /// - [`TokenError::InvalidToken`] for malformed tokens, a declared
    ///   algorithm other than HS256, a signature mismatch, or claims that do
    ///   not form a [`Payload`]
    /// - [`TokenError::ExpiredToken`] for authentic tokens with `now` at or
    ///   past their expiry
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Payload, TokenError> {
        let payload = decode::<Payload>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Rejected invalid token");
                TokenError::InvalidToken
            })?;

        if let Err(e) = payload.valid_at(now) {
            debug!(token_id = %payload.id, "Rejected expired token");
            return Err(e);
        }

        Ok(payload)
    }

    fn sign(&self, payload: &Payload) -> Result<String, TokenError> {
        encode(&Header::new(ALGORITHM), payload, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

impl Maker for JwtMaker {
    fn create_token(&self, username: &str, duration: Duration) -> Result<String, TokenError> {
        self.create_token_with_payload(username, duration)
            .map(|(token, _)| token)
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        self.verify_token_at(token, Utc::now())
    }
}

impl fmt::Debug for JwtMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtMaker")
            .field("algorithm", &ALGORITHM)
            .finish_non_exhaustive()
    }
}
