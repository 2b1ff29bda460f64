use ring::digest::{Context, SHA256};

/// Number of hash bytes appended by the checksum variant of Base58
pub const CHECKSUM_LEN: usize = 4;

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// SHA-256 applied twice, as Bitcoin does for Base58Check payloads
pub fn double_sha256_digest(data: &[u8]) -> Vec<u8> {
    let first_sha = sha256_digest(data);
    sha256_digest(first_sha.as_slice())
}

/// First four bytes of the double SHA-256 of `payload`
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = double_sha256_digest(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_input() {
        let digest = sha256_digest(&[]);
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_sha256_differs_from_single() {
        let single = sha256_digest(b"hello");
        let double = double_sha256_digest(b"hello");
        assert_eq!(double.len(), 32);
        assert_ne!(single, double);
        assert_eq!(double, sha256_digest(&single));
    }

    #[test]
    fn test_checksum_is_digest_prefix() {
        let payload = b"chain-bytes";
        let digest = double_sha256_digest(payload);
        assert_eq!(checksum(payload).as_slice(), &digest[..CHECKSUM_LEN]);
    }
}
