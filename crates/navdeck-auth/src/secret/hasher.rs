//! SHA-256 secret hashing and constant-time comparison.

use sha2::{Digest, Sha256};

/// Hashes secrets into the hex digests stored in `secret_keys`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretHasher;

impl SecretHasher {
    /// Creates a new secret hasher.
    pub fn new() -> Self {
        Self
    }

    /// Returns the lowercase hex SHA-256 digest of `secret`.
    pub fn hash(&self, secret: &str) -> String {
        format!("{:x}", Sha256::digest(secret.as_bytes()))
    }

    /// Checks `secret` against a stored digest.
    ///
    /// The comparison touches every byte regardless of where the first
    /// mismatch is.
    pub fn matches(&self, secret: &str, stored_hash: &str) -> bool {
        constant_time_eq(self.hash(secret).as_bytes(), stored_hash.as_bytes())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
