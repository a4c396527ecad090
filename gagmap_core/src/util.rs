//! Utility functions for content hashing and change detection.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 content hash.
///
/// Concatenates kind and content, then returns the hex-encoded digest.
#[must_use]
pub fn content_hash(kind: &str, content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_bytes());
    hasher.update(b":");
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
