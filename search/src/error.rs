//! Typed search errors.
//!
//! `ConfigurationError` represents pre-flight failures only. Running out of
//! frontier is not an error: it is recorded as a
//! [`crate::snapshot::SearchStatus::Failed`] snapshot and always leaves a
//! replayable history.

use strum::{Display, IntoStaticStr};
use thiserror::Error;
use trailscope_kernel::graph::NodeId;

/// Which depth parameter failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum DepthParameter {
    #[strum(serialize = "depth_limit")]
    DepthLimit,
    #[strum(serialize = "max_depth")]
    MaxDepth,
}

/// Structural misconfiguration of a search task.
///
/// Returned by [`crate::task::SearchTask::new`] before any run state is
/// allocated. No snapshot is recorded because no step was taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The graph has no nodes to search.
    #[error("graph has no nodes")]
    EmptyGraph,
    /// No source node was selected.
    #[error("no source node selected")]
    MissingSource,
    /// The source id does not name a node of the graph.
    #[error("source node {0} is not in the graph")]
    UnknownSource(NodeId),
    /// The goal set is empty.
    #[error("goal set is empty")]
    EmptyGoalSet,
    /// A goal id does not name a node of the graph.
    #[error("goal node {0} is not in the graph")]
    UnknownGoal(NodeId),
    /// A depth parameter used by the chosen strategy is negative.
    #[error("{parameter} must be non-negative, got {value}")]
    NegativeDepth {
        parameter: DepthParameter,
        value: i64,
    },
}
