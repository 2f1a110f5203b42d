//! Claims carried inside a credential.
//!
//! A [`Payload`] is created once when a credential is issued and rebuilt by
//! parsing when it is verified. It is never stored.

use chrono::serde::ts_seconds;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokenwright_core::TokenError;

/// Claims embedded in a signed credential.
///
/// Timestamps travel as Unix seconds, so `issued_at` is truncated to whole
/// seconds at creation and the issued payload equals the verified one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Random identifier, unique per credential
    pub id: Uuid,
    /// Subject the credential asserts
    pub username: String,
    /// Creation time (Unix timestamp on the wire)
    #[serde(with = "ts_seconds")]
    pub issued_at: DateTime<Utc>,
    /// Instant from which the credential is no longer accepted (Unix timestamp on the wire)
    #[serde(with = "ts_seconds")]
    pub expired_at: DateTime<Utc>,
}

impl Payload {
    /// Creates a payload for `username` valid for `duration` from now.
    ///
    /// A zero or negative `duration` is accepted and produces a payload that
    /// is already expired.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::IdentifierGeneration`] if the OS random source
    /// is unavailable.
    pub fn new(username: &str, duration: Duration) -> Result<Self, TokenError> {
        Self::new_at(username, duration, Utc::now())
    }

    /// Creates a payload as if issued at `now`.
    pub fn new_at(username: &str, duration: Duration, now: DateTime<Utc>) -> Result<Self, TokenError> {
        let id = random_id()?;
        let issued_at = now.trunc_subsecs(0);
        // Lifetimes past the representable range saturate.
        let expired_at = issued_at.checked_add_signed(duration).unwrap_or(
            if duration > Duration::zero() {
                DateTime::<Utc>::MAX_UTC
            } else {
                DateTime::<Utc>::MIN_UTC
            },
        );

        Ok(Self {
            id,
            username: username.to_string(),
            issued_at,
            expired_at,
        })
    }

    /// Checks the payload against the current time.
    pub fn valid(&self) -> Result<(), TokenError> {
        self.valid_at(Utc::now())
    }

    /// Checks the payload against `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::ExpiredToken`] once `now` reaches `expired_at`.
    pub fn valid_at(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        if self.is_expired_at(now) {
            return Err(TokenError::ExpiredToken);
        }
        Ok(())
    }

    /// Returns `true` once `now` has reached `expired_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expired_at
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expired_at - now).max(Duration::zero())
    }
}

fn random_id() -> Result<Uuid, TokenError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::IdentifierGeneration(e.to_string()))?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}
