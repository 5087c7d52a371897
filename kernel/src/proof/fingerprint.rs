//! Graph structure fingerprints.
//!
//! Two graphs with the same nodes (in the same declaration order), positions,
//! heuristics and edges produce the same digest. Declaration order is part of
//! the fingerprint because it changes depth-first expansion order.

use crate::graph::{Cost, Graph};

use super::canon::{canonical_json_bytes, CanonError};
use super::hash::{canonical_hash, ContentHash, HashDomain};

/// JSON view of the graph structure.
#[must_use]
pub fn graph_to_json(graph: &Graph) -> serde_json::Value {
    let nodes: Vec<serde_json::Value> = graph
        .nodes()
        .map(|n| {
            serde_json::json!({
                "heuristic": n.declared_heuristic().map(Cost::milli),
                "id": n.id().0,
                "neighbors": n
                    .neighbors()
                    .iter()
                    .map(|e| serde_json::json!([e.node.0, e.weight.milli()]))
                    .collect::<Vec<_>>(),
                "x": n.position().x,
                "y": n.position().y,
            })
        })
        .collect();
    serde_json::json!({ "cost_scale": Cost::SCALE, "nodes": nodes })
}

/// `sha256(GraphStructure || canonical_json(graph))`.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn graph_digest(graph: &Graph) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&graph_to_json(graph))?;
    Ok(canonical_hash(HashDomain::GraphStructure, &bytes))
}
