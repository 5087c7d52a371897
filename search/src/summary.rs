//! End-of-run summary.

use trailscope_kernel::graph::{Cost, NodeId};
use trailscope_kernel::proof::canon::{canonical_json_bytes, CanonError};
use trailscope_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::snapshot::SearchStatus;
use crate::strategy::StrategyKind;

/// What a completed run produced, with digests that pin it down.
///
/// `history_digest` covers every recorded snapshot, so two summaries with
/// equal digests describe byte-identical replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub strategy: StrategyKind,
    pub status: SearchStatus,
    pub path: Vec<NodeId>,
    pub path_cost: Option<Cost>,
    /// Expansions, summed across iterative-deepening rounds.
    pub nodes_explored: usize,
    /// Recorded snapshots, the initial one included.
    pub total_snapshots: usize,
    pub peak_frontier: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub graph_digest: ContentHash,
    pub history_digest: ContentHash,
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Succeeded
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost_scale": Cost::SCALE,
            "edge_count": self.edge_count,
            "graph_digest": self.graph_digest.to_string(),
            "history_digest": self.history_digest.to_string(),
            "node_count": self.node_count,
            "nodes_explored": self.nodes_explored,
            "path": self.path.iter().map(|n| n.0).collect::<Vec<_>>(),
            "path_cost": self.path_cost.map(Cost::milli),
            "peak_frontier": self.peak_frontier,
            "status": <&'static str>::from(self.status),
            "strategy": <&'static str>::from(self.strategy),
            "total_snapshots": self.total_snapshots,
        })
    }

    /// Canonical JSON bytes of this summary.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `sha256(RunSummary || canonical_json(self))`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::RunSummary,
            &self.to_canonical_json_bytes()?,
        ))
    }
}
