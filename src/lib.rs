//! # Chain Bytes - Byte Array Helpers for Blockchain Clients
//!
//! Small, stateless helpers I keep reaching for when handling keys,
//! addresses and raw payloads. Every function takes a borrowed input and
//! hands back a new buffer or string; nothing is mutated in place.
//!
//! ## What's Here
//! - **Base58**: Bitcoin-compatible encoding, plain or with a 4-byte
//!   double SHA-256 checksum
//! - **Hex**: lowercase encoding and decoding that reports bad input as an
//!   error instead of an empty buffer
//! - **Buffers**: reversal, bounds-checked sub-arrays and the `#END`
//!   sentinel marker
//!
//! ## How the Code Is Organized
//! - `codec/`: Base58 and hex text encodings
//! - `buffer/`: reversal, slicing and sentinel helpers
//! - `utils/`: hashing used by the checksum variant
//! - `error/`: the crate error type
//! - `config/`: settings for the command-line tool
//! - `cli/`: argument parsing for the command-line tool
//!
//! Encoding only: there is no Base58 decoder and no checksum verification.

pub mod buffer;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used items for convenience
pub use buffer::{add_end, has_end, reverse, sub_buf, trim_buf, END_MARKER};
pub use cli::{Command, Opt};
pub use codec::{
    base58_digit, encode_base58, encode_base58_with_checksum, from_hex, is_base58, to_hex,
    BASE58_ALPHABET,
};
pub use config::{Config, InputFormat, GLOBAL_CONFIG};
pub use error::{ByteError, Result};
pub use utils::{checksum, double_sha256_digest, sha256_digest, CHECKSUM_LEN};
