//! # Tokenwright
//!
//! Signed, time-bounded access tokens and remote bearer token acquisition.
//!
//! This crate re-exports the workspace libraries:
//!
//! - [`auth`]: Credential payloads, the [`JwtMaker`] and unverified inspection
//! - [`client`]: Form-encoded token acquisition over HTTP
//! - [`config`]: Environment-driven configuration
//! - [`errors`]: Error types and redaction helpers
//!
//! # Example
//!
//! ```ignore
//! use chrono::Duration;
//! use tokenwright::{JwtMaker, Maker, TokenConfig, TokenError};
//!
//! let maker = JwtMaker::from_config(&TokenConfig::from_env())?;
//! let token = maker.create_token("alice", Duration::hours(1))?;
//!
//! match maker.verify_token(&token) {
//!     Ok(payload) => println!("hello {}", payload.username),
//!     Err(TokenError::ExpiredToken) => println!("please sign in again"),
//!     Err(_) => println!("access denied"),
//! }
//! ```

pub use tokenwright_auth as auth;
pub use tokenwright_client as client;
pub use tokenwright_config as config;
pub use tokenwright_core as errors;

pub use tokenwright_auth::{Inspection, JwtMaker, MIN_SECRET_SIZE, Maker, Payload, inspect_token};
pub use tokenwright_client::{TokenClient, acquire_token};
pub use tokenwright_config::{AcquireConfig, TokenConfig};
pub use tokenwright_core::{AcquireError, TokenError};
