//! Path reconstruction from parent links.

use trailscope_kernel::graph::{Graph, NodeId};

use crate::run_state::RunStateTable;

/// Source-to-`terminal` path recorded in `table`.
#[must_use]
pub fn reconstruct_path(graph: &Graph, table: &RunStateTable, terminal: usize) -> Vec<NodeId> {
    let mut chain = table.parent_chain(terminal);
    chain.reverse();
    chain.into_iter().map(|i| graph.node_at(i).id()).collect()
}

/// Join the two halves of a bidirectional search at `meeting`.
///
/// The forward table links back to the source and the backward table links
/// on to a goal; the meeting node appears once.
#[must_use]
pub fn splice_meeting_paths(
    graph: &Graph,
    forward: &RunStateTable,
    backward: &RunStateTable,
    meeting: usize,
) -> Vec<NodeId> {
    let mut path = reconstruct_path(graph, forward, meeting);
    path.extend(
        backward
            .parent_chain(meeting)
            .into_iter()
            .skip(1)
            .map(|i| graph.node_at(i).id()),
    );
    path
}
