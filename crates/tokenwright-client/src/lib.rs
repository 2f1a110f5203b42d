//! # Tokenwright Client
//!
//! Fetches bearer tokens from a remote token endpoint with a single
//! form-encoded POST. The response body is returned as-is; this crate does
//! not parse or validate the token it receives.
//!
//! - [`acquire`]: The [`TokenClient`] and the [`acquire_token`] shortcut
//!
//! # Example
//!
//! ```ignore
//! use tokenwright_client::acquire_token;
//!
//! let body = acquire_token(
//!     "https://login.example.com/oauth2/token",
//!     &[
//!         ("grant_type", "client_credentials"),
//!         ("client_id", client_id.as_str()),
//!         ("client_secret", client_secret.as_str()),
//!     ],
//! )?;
//! ```

pub mod acquire;

// Re-export commonly used types at crate root
pub use acquire::{FORM_CONTENT_TYPE, TokenClient, acquire_token};
