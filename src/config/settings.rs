use crate::error::{ByteError, Result};
use log::LevelFilter;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_LOG_LEVEL: &str = "warn";
static DEFAULT_INPUT_FORMAT: &str = "hex";

/// The binary always reports its own failures, so logging never goes
/// quieter than this.
pub const MIN_LOG_LEVEL: LevelFilter = LevelFilter::Error;

const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
const INPUT_FORMAT_KEY: &str = "INPUT_FORMAT";

const LOG_LEVEL_ENV: &str = "CHAIN_BYTES_LOG";
const INPUT_FORMAT_ENV: &str = "CHAIN_BYTES_INPUT";

/// How byte arguments given on the command line are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Hex digits, decoded with `from_hex`
    Hex,
    /// Raw UTF-8 text, taken byte for byte
    Text,
}

impl FromStr for InputFormat {
    type Err = ByteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(InputFormat::Hex),
            "text" => Ok(InputFormat::Text),
            _ => Err(ByteError::Config(format!(
                "Invalid input format: {s}. Valid options: hex, text"
            ))),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Hex => write!(f, "hex"),
            InputFormat::Text => write!(f, "text"),
        }
    }
}

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut log_level = String::from(DEFAULT_LOG_LEVEL);
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            log_level = level;
        }

        let mut input_format = String::from(DEFAULT_INPUT_FORMAT);
        if let Ok(format) = env::var(INPUT_FORMAT_ENV) {
            input_format = format;
        }

        let mut map = HashMap::new();
        map.insert(String::from(LOG_LEVEL_KEY), log_level);
        map.insert(String::from(INPUT_FORMAT_KEY), input_format);

        Config {
            inner: RwLock::new(map),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(key), value);
    }

    pub fn get_log_level(&self) -> Result<LevelFilter> {
        let level = self
            .get(LOG_LEVEL_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_LOG_LEVEL));
        LevelFilter::from_str(&level).map_err(|_| {
            ByteError::Config(format!(
                "Invalid log level: {level}. Valid options: off, error, warn, info, debug, trace"
            ))
        })
    }

    /// Level to start the logger with: the configured level, raised to
    /// `MIN_LOG_LEVEL` when it is lower (`off`).
    pub fn get_logger_level(&self) -> Result<LevelFilter> {
        let level = self.get_log_level()?;
        Ok(level.max(MIN_LOG_LEVEL))
    }

    pub fn set_log_level(&self, level: LevelFilter) {
        self.set(LOG_LEVEL_KEY, level.to_string());
    }

    pub fn get_input_format(&self) -> Result<InputFormat> {
        let format = self
            .get(INPUT_FORMAT_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_INPUT_FORMAT));
        format.parse()
    }

    pub fn set_input_format(&self, format: InputFormat) {
        self.set(INPUT_FORMAT_KEY, format.to_string());
    }
}
