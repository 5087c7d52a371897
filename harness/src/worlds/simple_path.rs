//! `SimplePath`: five nodes in a line, unit weights.

use std::sync::Arc;

use trailscope_kernel::graph::{Cost, GraphBuilder, GraphError, NodeId, Position};

use crate::contract::{SampleGraph, SampleWorld};

const POSITIONS: [(i64, i64); 5] = [(100, 200), (250, 150), (400, 200), (550, 150), (700, 200)];

const GOAL: u32 = 4;

/// `0 → 1 → 2 → 3 → 4`, source 0, goal 4, heuristic = hops remaining.
pub struct SimplePath;

impl SampleWorld for SimplePath {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "simple_path"
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn description(&self) -> &str {
        "Five nodes in a line"
    }

    fn build(&self) -> Result<SampleGraph, GraphError> {
        let mut b = GraphBuilder::new();
        for (i, &(x, y)) in (0u32..).zip(POSITIONS.iter()) {
            b.add_node(NodeId(i), Position::new(x, y))?;
            b.set_heuristic(NodeId(i), Cost::from(GOAL - i))?;
        }
        for i in 1..=GOAL {
            b.add_edge(NodeId(i - 1), NodeId(i), Cost::ONE)?;
        }
        Ok(SampleGraph {
            graph: Arc::new(b.build()),
            source: NodeId(0),
            goals: vec![NodeId(GOAL)],
        })
    }
}
