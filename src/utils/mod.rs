//! Utility functions and helpers
//!
//! Hashing collaborators used by the encoders.

pub mod crypto;

pub use crypto::{checksum, double_sha256_digest, sha256_digest, CHECKSUM_LEN};
