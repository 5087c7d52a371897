//! Immutable per-step snapshots.
//!
//! A [`Snapshot`] is a value: once recorded it is never mutated, and replaying
//! a step re-reads it rather than recomputing it. Everything a renderer needs
//! (frontier order, visit order, tags, the path once found) is carried here,
//! so no view ever consults live run state.

use strum::{Display, IntoStaticStr};
use trailscope_kernel::graph::{Cost, NodeId};
use trailscope_kernel::proof::canon::{canonical_json_bytes, CanonError};
use trailscope_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::run_state::NodeTag;

/// Run status at the moment a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SearchStatus {
    Running,
    Succeeded,
    Failed,
}

impl SearchStatus {
    /// Whether no further step can change the run.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::Running
    }
}

/// Cost readout of the node currently selected by a cost-aware strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostReadout {
    pub node: NodeId,
    pub g: Cost,
    pub h: Cost,
    /// Ordering value of the strategy: `g`, `h` or `g + h`.
    pub f: Cost,
}

/// Iterative-deepening progress marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationMark {
    /// Depth limit of the iteration this snapshot belongs to.
    pub depth_limit: u32,
    /// True for the first snapshot of an iteration.
    pub boundary: bool,
}

/// One frame of a run's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Frontier in expansion order, without stale entries.
    pub frontier: Vec<NodeId>,
    /// Expanded nodes in expansion order.
    pub visited: Vec<NodeId>,
    /// Expansion order as drawn by the traversal overlay. Equal to `visited`
    /// except for bidirectional search, which lists the forward side first.
    pub traversal: Vec<NodeId>,
    /// Source-to-goal path; empty until the run succeeds.
    pub path: Vec<NodeId>,
    pub path_cost: Option<Cost>,
    pub status: SearchStatus,
    pub current: Option<CostReadout>,
    /// Node where the two bidirectional sides met.
    pub meeting_node: Option<NodeId>,
    pub iteration: Option<IterationMark>,
    /// Visit tag of every node, indexed by arena position.
    pub node_tags: Vec<NodeTag>,
}

impl Snapshot {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether this is the first snapshot of an iterative-deepening round.
    #[must_use]
    pub fn is_iteration_boundary(&self) -> bool {
        self.iteration.is_some_and(|mark| mark.boundary)
    }

    /// Tag at arena `index`; out-of-range reads as unvisited.
    #[must_use]
    pub fn tag_at(&self, index: usize) -> NodeTag {
        self.node_tags.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_on_path(&self, id: NodeId) -> bool {
        self.path.contains(&id)
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    ///
    /// Costs are written as integer thousandths (see [`Cost::milli`]).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "current": self.current.map(|c| serde_json::json!({
                "f": c.f.milli(),
                "g": c.g.milli(),
                "h": c.h.milli(),
                "node": c.node.0,
            })),
            "frontier": ids(&self.frontier),
            "iteration": self.iteration.map(|m| serde_json::json!({
                "boundary": m.boundary,
                "depth_limit": m.depth_limit,
            })),
            "meeting_node": self.meeting_node.map(|n| n.0),
            "node_tags": self
                .node_tags
                .iter()
                .map(|t| <&'static str>::from(*t))
                .collect::<Vec<_>>(),
            "path": ids(&self.path),
            "path_cost": self.path_cost.map(Cost::milli),
            "status": <&'static str>::from(self.status),
            "traversal": ids(&self.traversal),
            "visited": ids(&self.visited),
        })
    }

    /// Canonical JSON bytes of this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `sha256(Snapshot || canonical_json(self))`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::Snapshot,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

fn ids(nodes: &[NodeId]) -> Vec<u32> {
    nodes.iter().map(|n| n.0).collect()
}
