//! Keyed content hashing for `Secret` values
//!
//! Every secret carries a 64-bit hash of its content, computed once at
//! construction with a BLAKE3 key that is generated on first use and then
//! fixed for the lifetime of the process. Equal content therefore always
//! hashes equally within a single run, while the hash values themselves are
//! not stable (or guessable) across runs.

use std::sync::OnceLock;

use rand::Rng;

static HASH_KEY: OnceLock<[u8; blake3::KEY_LEN]> = OnceLock::new();

fn hash_key() -> &'static [u8; blake3::KEY_LEN] {
    HASH_KEY.get_or_init(|| rand::thread_rng().gen())
}

/// Hashes the given payload with the process-wide key, truncating the BLAKE3
/// digest to its first 8 bytes.
pub fn content_hash(payload: &[u8]) -> u64 {
    let digest = blake3::keyed_hash(hash_key(), payload);
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_content_hashes_equally() {
        for payload in [&b""[..], &b"foo"[..], &[0, 2, 4][..]] {
            assert_eq!(content_hash(payload), content_hash(payload));
        }
    }

    #[test]
    fn differing_content_hashes_differently() {
        // Not guaranteed in theory, but a collision here means the hash is
        // broken in practice.
        assert_ne!(content_hash(b"foo"), content_hash(b"bar"));
        assert_ne!(content_hash(b""), content_hash(&[0]));
    }
}
