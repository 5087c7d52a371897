//! Bidirectional search: meeting point, path splicing and traversal order.

use lock_tests::graph_helpers::{chain, graph_from_edges, ids, run, undirected_chain};
use trailscope_kernel::graph::{Cost, NodeId};
use trailscope_search::snapshot::SearchStatus;
use trailscope_search::strategy::StrategyKind;
use trailscope_search::task::TaskSpec;

fn bidi(source: u32, goals: &[u32]) -> TaskSpec {
    TaskSpec::new(
        NodeId(source),
        goals.iter().copied().map(NodeId),
        StrategyKind::Bidirectional,
    )
}

#[test]
fn five_node_path_meets_in_the_middle() {
    for graph in [undirected_chain(5), chain(5)] {
        let (history, summary) = run(graph, bidi(0, &[4]));
        let last = history.last().unwrap();
        assert_eq!(last.status, SearchStatus::Succeeded);
        assert_eq!(last.meeting_node, Some(NodeId(2)));
        assert_eq!(ids(&summary.path), vec![0, 1, 2, 3, 4]);
        assert_eq!(summary.path_cost, Some(Cost::from_units(4)));

        // Two expansions per side, interleaved in visit order and grouped by
        // side in the traversal.
        assert_eq!(ids(&last.visited), vec![0, 4, 1, 3]);
        assert_eq!(ids(&last.traversal), vec![0, 1, 4, 3]);
        assert_eq!(summary.nodes_explored, 4);
    }
}

#[test]
fn meeting_node_is_absent_until_the_end() {
    let (history, _) = run(chain(5), bidi(0, &[4]));
    let (last, rest) = history.split_last().unwrap();
    assert!(rest.iter().all(|s| s.meeting_node.is_none()));
    assert!(last.meeting_node.is_some());
}

#[test]
fn backward_side_follows_incoming_edges() {
    // 0 → 1 → 3 and 0 → 2 → 3: backward from 3 reaches 1 before 2.
    let graph = graph_from_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
    let (history, summary) = run(graph, bidi(0, &[3]));
    assert_eq!(ids(&summary.path), vec![0, 1, 3]);
    assert_eq!(history.last().unwrap().meeting_node, Some(NodeId(1)));
}

#[test]
fn source_adjacent_to_goal() {
    let (_, summary) = run(chain(2), bidi(0, &[1]));
    assert_eq!(ids(&summary.path), vec![0, 1]);
    assert_eq!(summary.path_cost, Some(Cost::from_units(1)));
}

#[test]
fn any_of_several_goals() {
    let (_, summary) = run(chain(6), bidi(0, &[5, 2]));
    assert_eq!(ids(&summary.path), vec![0, 1, 2]);
    assert_eq!(summary.path_cost, Some(Cost::from_units(2)));
}

#[test]
fn one_way_edge_blocks_the_backward_side() {
    // 1 → 0 only: nothing leads from 0 to 1.
    let graph = graph_from_edges(2, &[(1, 0, 1)]);
    let (history, summary) = run(graph, bidi(0, &[1]));
    assert_eq!(history.last().unwrap().status, SearchStatus::Failed);
    assert!(summary.path.is_empty());
}
