//! Canonical hashing: SHA-256 over a domain prefix and payload bytes.

use sha2::{Digest, Sha256};

pub use super::hash_domain::HashDomain;

/// A SHA-256 digest, displayed as `"sha256:<64 lowercase hex digits>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub const ALGORITHM: &'static str = "sha256";

    #[must_use]
    pub fn bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex of the digest, without the algorithm prefix.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.0)
    }

    fn from_hasher(hasher: Sha256) -> Self {
        Self(hasher.finalize().into())
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", Self::ALGORITHM, self.hex_digest())
    }
}

/// `sha256(domain || data)`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    ContentHash::from_hasher(hasher)
}

/// Incremental form of [`canonical_hash`] for payloads assembled in pieces.
///
/// Each part is length-prefixed (`u64` little-endian) so that different
/// splits of the same bytes never collide.
pub struct FramedHasher {
    inner: Sha256,
}

impl FramedHasher {
    #[must_use]
    pub fn new(domain: HashDomain) -> Self {
        let mut inner = Sha256::new();
        inner.update(domain.as_bytes());
        Self { inner }
    }

    /// Append one length-prefixed frame.
    pub fn frame(&mut self, bytes: &[u8]) {
        self.inner.update((bytes.len() as u64).to_le_bytes());
        self.inner.update(bytes);
    }

    #[must_use]
    pub fn finish(self) -> ContentHash {
        ContentHash::from_hasher(self.inner)
    }
}
