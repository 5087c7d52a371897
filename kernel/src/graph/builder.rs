//! Incremental graph construction.

use std::collections::BTreeMap;

use super::heuristic::{distance, DistanceMetric};
use super::{Cost, Edge, Graph, GraphError, NodeId, Position, StaticNode};

/// Mutable staging area for a [`Graph`].
///
/// Re-declaring an edge replaces its weight but keeps its original position
/// in the neighbor list.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    nodes: Vec<StaticNode>,
    index: BTreeMap<NodeId, usize>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node with no heuristic and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if `id` is already declared.
    pub fn add_node(&mut self, id: NodeId, position: Position) -> Result<(), GraphError> {
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(StaticNode {
            id,
            position,
            neighbors: Vec::new(),
            heuristic: None,
        });
        Ok(())
    }

    /// Set the heuristic estimate of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `id` is not declared.
    pub fn set_heuristic(&mut self, id: NodeId, value: Cost) -> Result<(), GraphError> {
        let slot = self.slot(id)?;
        self.nodes[slot].heuristic = Some(value);
        Ok(())
    }

    /// Declare (or re-weight) the directed edge `from → to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is not declared.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Cost) -> Result<(), GraphError> {
        let slot = self.slot(from)?;
        self.slot(to)?;
        let neighbors = &mut self.nodes[slot].neighbors;
        match neighbors.iter_mut().find(|e| e.node == to) {
            Some(existing) => existing.weight = weight,
            None => neighbors.push(Edge { node: to, weight }),
        }
        Ok(())
    }

    /// Declare both `a → b` and `b → a` with the same weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is not declared.
    pub fn add_undirected_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: Cost,
    ) -> Result<(), GraphError> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Set every node's heuristic to its `metric` distance to the nearest goal.
    ///
    /// Overwrites previously declared heuristics.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if a goal is not declared.
    pub fn fill_heuristics(
        &mut self,
        goals: &[NodeId],
        metric: DistanceMetric,
    ) -> Result<(), GraphError> {
        let targets = goals
            .iter()
            .map(|&g| self.slot(g).map(|i| self.nodes[i].position))
            .collect::<Result<Vec<Position>, GraphError>>()?;
        for node in &mut self.nodes {
            node.heuristic = targets
                .iter()
                .map(|&t| distance(metric, node.position, t))
                .min();
        }
        Ok(())
    }

    /// Freeze into an immutable [`Graph`].
    #[must_use]
    pub fn build(self) -> Graph {
        Graph::from_parts(self.nodes, self.index)
    }

    fn slot(&self, id: NodeId) -> Result<usize, GraphError> {
        self.index.get(&id).copied().ok_or(GraphError::UnknownNode(id))
    }
}
