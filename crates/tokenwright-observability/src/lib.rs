//! # Tokenwright Observability
//!
//! Console logging for tokenwright binaries. Library crates only emit
//! `tracing` events; installing a subscriber is left to the binary.
//!
//! # Examples
//!
//! ```no_run
//! use tokenwright_observability::init_basic_console_logging;
//!
//! fn main() {
//!     init_basic_console_logging();
//!     tracing::info!("ready");
//! }
//! ```

pub mod basic_logging;

pub use basic_logging::{default_filter, init_basic_console_logging};
