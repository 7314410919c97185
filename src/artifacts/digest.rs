//! Content digests for published artifacts.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 digest of artifact file content.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}
