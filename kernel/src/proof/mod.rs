//! Proof module: canonical serialization and content hashing.
//!
//! Search history digests and run summaries route through here so that two
//! runs over the same input can be compared byte-for-byte.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod fingerprint;
