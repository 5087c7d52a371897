//! Sample world contract: the minimal trait a sample graph must implement.
//!
//! Worlds provide graph data only (nodes, positions, heuristics, edges and
//! the default source/goal selection). Worlds may NOT run searches, record
//! snapshots or compute digests: those are search-layer and runner concerns.

use std::sync::Arc;

use trailscope_kernel::graph::{Graph, GraphError, NodeId};
use trailscope_search::params::SearchParams;
use trailscope_search::strategy::StrategyKind;
use trailscope_search::task::TaskSpec;

/// A built sample: the graph plus its default source and goals.
#[derive(Debug, Clone)]
pub struct SampleGraph {
    pub graph: Arc<Graph>,
    pub source: NodeId,
    pub goals: Vec<NodeId>,
}

impl SampleGraph {
    /// Task for `strategy` from the sample's source to its goals.
    #[must_use]
    pub fn task_spec(&self, strategy: StrategyKind, params: SearchParams) -> TaskSpec {
        TaskSpec::new(self.source, self.goals.iter().copied(), strategy).with_params(params)
    }
}

/// The contract a sample graph must implement to be run by the harness.
///
/// A world provides:
/// - A unique identifier
/// - A one-line description for a picker
/// - The built graph with its default source and goal set
///
/// Building is deterministic: two calls produce equal graphs.
pub trait SampleWorld {
    /// Unique world identifier (e.g., `"weighted_detour"`).
    fn world_id(&self) -> &str;

    fn description(&self) -> &str;

    /// Build the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the world's own data is malformed.
    fn build(&self) -> Result<SampleGraph, GraphError>;
}
