//! # Tokenwright Core
//!
//! Error types and shared utilities for tokenwright.
//!
//! This crate provides the foundational types used by the other crates:
//!
//! - [`errors`]: Failure conditions for token issuance, verification and acquisition
//! - [`redact`]: Helpers for rendering form data without exposing values
//!
//! # Example
//!
//! ```ignore
//! use tokenwright_core::TokenError;
//!
//! match maker.verify_token(&token) {
//!     Ok(payload) => println!("hello {}", payload.username),
//!     Err(TokenError::ExpiredToken) => println!("please sign in again"),
//!     Err(_) => println!("access denied"),
//! }
//! ```

pub mod errors;
pub mod redact;

// Re-export commonly used types at crate root
pub use errors::{AcquireError, TokenError};
pub use redact::redact_form;
