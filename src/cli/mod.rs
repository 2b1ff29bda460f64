//! Command-line interface
//!
//! Argument parsing for the `chain-bytes` binary.

pub mod commands;

pub use commands::{parse_input, Command, Opt};
