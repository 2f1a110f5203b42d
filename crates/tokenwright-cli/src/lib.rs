//! Command implementations behind the `tokenwright` binary.
//!
//! Each command returns its output as a `String` so `main` only decides
//! where to print it and which exit code to use.

pub mod commands;
