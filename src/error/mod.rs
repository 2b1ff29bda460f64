//! Error handling for the byte helpers
//!
//! Failures are returned as values, never raised: malformed hex and
//! out-of-range slices each get their own variant so callers can tell
//! them apart from a legitimately empty result.

use std::fmt;

/// Result type alias for byte helper operations
pub type Result<T> = std::result::Result<T, ByteError>;

/// Error types for byte helper operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Input was not valid hexadecimal (odd length or non-hex character)
    InvalidHex(String),
    /// Requested sub-array does not fit inside the buffer
    OutOfBounds { start: usize, size: usize, len: usize },
    /// Configuration errors
    Config(String),
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteError::InvalidHex(msg) => write!(f, "Invalid hex: {msg}"),
            ByteError::OutOfBounds { start, size, len } => {
                write!(
                    f,
                    "Out of bounds: start {start} + size {size} exceeds length {len}"
                )
            }
            ByteError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ByteError {}

impl From<hex::FromHexError> for ByteError {
    fn from(err: hex::FromHexError) -> Self {
        ByteError::InvalidHex(err.to_string())
    }
}
