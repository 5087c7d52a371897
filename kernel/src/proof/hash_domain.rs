//! Typed domain separators for canonical hashing.
//!
//! Every digest in the workspace is computed under one [`HashDomain`], so two
//! artifacts of different kinds can never share a hash even when their
//! canonical bytes coincide.

/// Domain separator for [`super::hash::canonical_hash`] and
/// [`super::hash::FramedHasher`].
///
/// Each variant maps to a unique, null-terminated byte string that prefixes
/// the SHA-256 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Static graph structure (nodes, positions, edges, heuristics).
    GraphStructure,
    /// A single recorded snapshot.
    Snapshot,
    /// The full ordered snapshot history of one run.
    SnapshotHistory,
    /// Terminal run summary.
    RunSummary,
}

impl HashDomain {
    /// Every domain, in declaration order.
    pub const ALL: &[HashDomain] = &[
        Self::GraphStructure,
        Self::Snapshot,
        Self::SnapshotHistory,
        Self::RunSummary,
    ];

    /// The raw separator bytes, null-terminated.
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::GraphStructure => b"TRAILSCOPE::GRAPH_STRUCTURE::V1\0",
            Self::Snapshot => b"TRAILSCOPE::SNAPSHOT::V1\0",
            Self::SnapshotHistory => b"TRAILSCOPE::SNAPSHOT_HISTORY::V1\0",
            Self::RunSummary => b"TRAILSCOPE::RUN_SUMMARY::V1\0",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GraphStructure => "GraphStructure",
            Self::Snapshot => "Snapshot",
            Self::SnapshotHistory => "SnapshotHistory",
            Self::RunSummary => "RunSummary",
        }
    }
}

impl std::fmt::Display for HashDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
