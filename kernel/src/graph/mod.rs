//! Static graph model.
//!
//! A [`Graph`] is built once through [`GraphBuilder`] and is read-only from
//! then on. Nodes live in a dense arena in declaration order; every per-run
//! table in the search layer is indexed by that arena position, never by
//! pointers into the graph.
//!
//! Edges are directed (`from → to`) and carry a non-negative [`Cost`].
//! Neighbor lists keep declaration order, which depth-first strategies rely on.

mod builder;
pub mod cost;
pub mod heuristic;

use std::collections::BTreeMap;

use thiserror::Error;

pub use builder::GraphBuilder;
pub use cost::{Cost, CostError};

/// User-facing node identifier, unique within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Integer world coordinates. Used for heuristics and display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A directed, weighted adjacency entry.
///
/// In a forward list `node` is the edge target; in a reverse
/// ([`Graph::predecessors`]) list it is the edge source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub node: NodeId,
    pub weight: Cost,
}

/// One node of the static graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticNode {
    id: NodeId,
    position: Position,
    neighbors: Vec<Edge>,
    heuristic: Option<Cost>,
}

impl StaticNode {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Outgoing edges in declaration order.
    #[must_use]
    pub fn neighbors(&self) -> &[Edge] {
        &self.neighbors
    }

    /// Heuristic estimate to the goal; an absent value reads as 0.
    #[must_use]
    pub fn heuristic(&self) -> Cost {
        self.heuristic.unwrap_or(Cost::ZERO)
    }

    /// The heuristic exactly as declared (`None` when never set).
    #[must_use]
    pub fn declared_heuristic(&self) -> Option<Cost> {
        self.heuristic
    }

    /// Weight of the edge to `to`, if declared.
    #[must_use]
    pub fn weight_to(&self, to: NodeId) -> Option<Cost> {
        self.neighbors.iter().find(|e| e.node == to).map(|e| e.weight)
    }
}

/// Graph construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this id was already declared.
    #[error("node {0} is declared twice")]
    DuplicateNode(NodeId),
    /// An edge or heuristic refers to a node that was never declared.
    #[error("node {0} is not declared")]
    UnknownNode(NodeId),
}

/// Immutable graph: node arena plus forward and reverse adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<StaticNode>,
    index: BTreeMap<NodeId, usize>,
    predecessors: Vec<Vec<Edge>>,
}

impl Graph {
    fn from_parts(nodes: Vec<StaticNode>, index: BTreeMap<NodeId, usize>) -> Self {
        let mut predecessors = vec![Vec::new(); nodes.len()];
        for node in &nodes {
            for edge in &node.neighbors {
                if let Some(&target) = index.get(&edge.node) {
                    predecessors[target].push(Edge {
                        node: node.id,
                        weight: edge.weight,
                    });
                }
            }
        }
        Self {
            nodes,
            index,
            predecessors,
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena position of `id`.
    #[must_use]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&StaticNode> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Node at an arena position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn node_at(&self, index: usize) -> &StaticNode {
        &self.nodes[index]
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &StaticNode> {
        self.nodes.iter()
    }

    /// Incoming edges of the node at `index`, ordered by the source node's
    /// declaration and then by edge declaration.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn predecessors_at(&self, index: usize) -> &[Edge] {
        &self.predecessors[index]
    }

    /// Incoming edges of `id` (empty for an unknown id).
    #[must_use]
    pub fn predecessors(&self, id: NodeId) -> &[Edge] {
        match self.index_of(id) {
            Some(i) => &self.predecessors[i],
            None => &[],
        }
    }

    /// Total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum()
    }

    /// Mean out-degree; 0 for an empty graph.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        self.edge_count() as f64 / self.nodes.len() as f64
    }

    /// Sum of declared edge weights along `path`.
    ///
    /// Returns zero for paths with fewer than two nodes and `None` if any
    /// consecutive pair is not joined by a declared edge.
    #[must_use]
    pub fn path_weight(&self, path: &[NodeId]) -> Option<Cost> {
        path.windows(2).try_fold(Cost::ZERO, |acc, pair| {
            let w = self.node(pair[0])?.weight_to(pair[1])?;
            Some(acc.saturating_add(w))
        })
    }
}
