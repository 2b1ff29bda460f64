//! Text encodings for byte arrays
//!
//! Base58 (plain and with checksum) for human-facing identifiers and
//! hexadecimal for everything else.

pub mod base58;
pub mod hex;

pub use self::base58::{
    base58_digit, encode_base58, encode_base58_with_checksum, is_base58, BASE58_ALPHABET,
};
pub use self::hex::{from_hex, to_hex};
