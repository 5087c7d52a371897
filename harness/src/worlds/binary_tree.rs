//! `BinaryTree`: a complete binary tree of depth two.

use std::sync::Arc;

use trailscope_kernel::graph::{Cost, GraphBuilder, GraphError, NodeId, Position};

use crate::contract::{SampleGraph, SampleWorld};

const POSITIONS: [(i64, i64); 7] = [
    (400, 100),
    (250, 200),
    (550, 200),
    (150, 300),
    (350, 300),
    (450, 300),
    (650, 300),
];

const EDGES: [(u32, u32); 6] = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)];

const GOAL: u32 = 6;

/// Root 0, goal at the right-most leaf 6, heuristic `|6 - id|`.
pub struct BinaryTree;

impl SampleWorld for BinaryTree {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "binary_tree"
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn description(&self) -> &str {
        "Seven-node binary tree, goal at the right-most leaf"
    }

    fn build(&self) -> Result<SampleGraph, GraphError> {
        let mut b = GraphBuilder::new();
        for (i, &(x, y)) in (0u32..).zip(POSITIONS.iter()) {
            b.add_node(NodeId(i), Position::new(x, y))?;
            b.set_heuristic(NodeId(i), Cost::from(GOAL.abs_diff(i)))?;
        }
        for (from, to) in EDGES {
            b.add_edge(NodeId(from), NodeId(to), Cost::ONE)?;
        }
        Ok(SampleGraph {
            graph: Arc::new(b.build()),
            source: NodeId(0),
            goals: vec![NodeId(GOAL)],
        })
    }
}
