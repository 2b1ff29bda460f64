//! Configuration management
//!
//! Settings for the command-line tool: log level and how byte
//! arguments are read. Seeded from the environment, overridable at runtime.

pub mod settings;

pub use settings::{Config, InputFormat, GLOBAL_CONFIG, MIN_LOG_LEVEL};
