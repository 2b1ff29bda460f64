use crate::error::{ByteError, Result};
use log::debug;

/// Lowercase hex, two characters per byte, no separators.
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex string. Either case is accepted.
///
/// An empty string decodes to an empty buffer. Odd length or a non-hex
/// character yields `ByteError::InvalidHex`, which is how a caller tells a
/// bad input apart from an empty one.
pub fn from_hex(hex_str: &str) -> Result<Vec<u8>> {
    if hex_str.is_empty() {
        return Ok(Vec::new());
    }
    hex::decode(hex_str).map_err(|e| {
        debug!("Rejected hex input of {} chars: {e}", hex_str.len());
        ByteError::from(e)
    })
}
