//! # Tokenwright Config
//!
//! Configuration types for tokenwright.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`token`]: Signing secret and default credential lifetime
//! - [`acquire`]: HTTP settings for remote token acquisition
//!
//! Binaries call `dotenvy::dotenv()` before loading, so a `.env` file works too.
//!
//! # Example
//!
//! ```ignore
//! use tokenwright_config::{AcquireConfig, TokenConfig};
//!
//! let token_config = TokenConfig::from_env();
//! let acquire_config = AcquireConfig::from_env();
//! ```

pub mod acquire;
pub mod token;

// Re-export commonly used types at crate root
pub use acquire::AcquireConfig;
pub use token::TokenConfig;
