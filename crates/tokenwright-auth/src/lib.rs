//! # Tokenwright Auth
//!
//! Signed, time-bounded credentials.
//!
//! This crate provides:
//!
//! - [`payload`]: The claims carried inside a credential
//! - [`maker`]: Credential creation and verification with an HMAC secret
//! - [`inspect`]: Unverified decoding for debugging
//!
//! # Example
//!
//! ```ignore
//! use chrono::Duration;
//! use tokenwright_auth::{JwtMaker, Maker};
//!
//! let maker = JwtMaker::new("a-secret-of-at-least-thirty-two-bytes")?;
//!
//! let token = maker.create_token("alice", Duration::hours(1))?;
//! let payload = maker.verify_token(&token)?;
//! assert_eq!(payload.username, "alice");
//! ```

pub mod inspect;
pub mod maker;
pub mod payload;

// Re-export commonly used types at crate root
pub use inspect::{Inspection, inspect_token};
pub use maker::{JwtMaker, MIN_SECRET_SIZE, Maker};
pub use payload::Payload;
