//! `WeightedDetour`: six nodes where the cheapest route is not the shortest.

use std::sync::Arc;

use trailscope_kernel::graph::{Cost, GraphBuilder, GraphError, NodeId, Position};

use crate::contract::{SampleGraph, SampleWorld};

const POSITIONS: [(i64, i64); 6] = [
    (150, 200),
    (350, 150),
    (550, 150),
    (350, 300),
    (550, 300),
    (700, 225),
];

/// `(from, to, weight)`, weights in whole units.
const EDGES: [(u32, u32, u64); 8] = [
    (0, 1, 2),
    (0, 3, 5),
    (1, 2, 3),
    (1, 3, 2),
    (2, 4, 1),
    (2, 5, 7),
    (3, 4, 1),
    (4, 5, 2),
];

const GOAL: u32 = 5;

/// Source 0, goal 5, heuristic `|5 - id|`.
///
/// Fewest edges: `0 → 1 → 2 → 5` (cost 12). Cheapest: `0 → 1 → 3 → 4 → 5`
/// (cost 7).
pub struct WeightedDetour;

impl SampleWorld for WeightedDetour {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "weighted_detour"
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn description(&self) -> &str {
        "Weighted graph where the cheapest path takes a detour"
    }

    fn build(&self) -> Result<SampleGraph, GraphError> {
        let mut b = GraphBuilder::new();
        for (i, &(x, y)) in (0u32..).zip(POSITIONS.iter()) {
            b.add_node(NodeId(i), Position::new(x, y))?;
            b.set_heuristic(NodeId(i), Cost::from(GOAL.abs_diff(i)))?;
        }
        for (from, to, weight) in EDGES {
            b.add_edge(NodeId(from), NodeId(to), Cost::from_units(weight))?;
        }
        Ok(SampleGraph {
            graph: Arc::new(b.build()),
            source: NodeId(0),
            goals: vec![NodeId(GOAL)],
        })
    }
}
