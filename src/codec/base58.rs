use crate::utils::crypto::checksum;
use log::trace;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Bitcoin Base58 alphabet. `0`, `O`, `I` and `l` are left out because they
/// are easy to misread.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const RADIX: u32 = 58;

/// Reverse lookup from ASCII byte to digit value, built on first use.
static BASE58_INDEX: Lazy<[Option<u8>; 256]> = Lazy::new(|| {
    let mut index = [None; 256];
    for (value, &symbol) in BASE58_ALPHABET.as_bytes().iter().enumerate() {
        index[symbol as usize] = Some(value as u8);
    }
    index
});

/// Encode bytes as a Base58 string.
///
/// The input is read as one big-endian unsigned integer and written out in
/// radix 58. Every leading zero byte becomes a leading `'1'`, so
/// `[0, 0, 1]` encodes to `"112"`. Empty input gives an empty string.
pub fn encode_base58(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let symbols = BASE58_ALPHABET.as_bytes();

    // digit values, least significant first; an all-zero input has none
    let digits: Vec<u8> = if leading_zeros == bytes.len() {
        Vec::new()
    } else {
        BigUint::from_bytes_be(&bytes[leading_zeros..]).to_radix_le(RADIX)
    };

    let mut encoded = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        encoded.push(symbols[0] as char);
    }
    encoded.extend(digits.iter().rev().map(|&d| symbols[d as usize] as char));

    trace!(
        "base58 encoded {} bytes into {} symbols",
        bytes.len(),
        encoded.len()
    );
    encoded
}

/// Encode bytes as Base58 with a four byte double SHA-256 checksum appended
/// to the payload before encoding.
///
/// Nothing here verifies the checksum on the way back in; that is left to
/// whoever consumes the string.
pub fn encode_base58_with_checksum(bytes: &[u8]) -> String {
    let checksum = checksum(bytes);
    let mut extended = Vec::with_capacity(bytes.len() + checksum.len());
    extended.extend_from_slice(bytes);
    extended.extend_from_slice(&checksum);
    encode_base58(&extended)
}

/// Digit value of a Base58 symbol, or `None` if `c` is not in the alphabet.
pub fn base58_digit(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    BASE58_INDEX[c as usize]
}

/// Whether every character of `s` belongs to the Base58 alphabet.
pub fn is_base58(s: &str) -> bool {
    s.chars().all(|c| base58_digit(c).is_some())
}
