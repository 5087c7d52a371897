//! Disconnected goals end in an ordinary failed snapshot.

use std::collections::BTreeSet;
use std::sync::Arc;

use lock_tests::graph_helpers::{graph_from_edges, reachable_from, run};
use proptest::prelude::*;
use strum::IntoEnumIterator;
use trailscope_kernel::graph::NodeId;
use trailscope_search::params::SearchParams;
use trailscope_search::snapshot::SearchStatus;
use trailscope_search::strategy::StrategyKind;
use trailscope_search::task::TaskSpec;

type Edges = Vec<(u32, u32, u64)>;

/// Random edges among `0..n`; node `n` is the isolated goal.
fn arb_split_graph() -> impl Strategy<Value = (u32, Edges, u32)> {
    (1u32..10).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 1u64..5), 0..(n as usize * 2)),
            0..n,
        )
    })
}

fn sorted(nodes: &[NodeId]) -> Vec<NodeId> {
    let mut v = nodes.to_vec();
    v.sort();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn single_frontier_strategies_visit_the_whole_component((n, edges, source) in arb_split_graph()) {
        let graph = graph_from_edges(n + 1, &edges);
        let goal = NodeId(n);
        let component = reachable_from(&graph, NodeId(source));
        // Depth parameters large enough to cover any simple path.
        let params = SearchParams { depth_limit: i64::from(n), max_depth: i64::from(n) };

        for strategy in StrategyKind::iter().filter(|k| *k != StrategyKind::Bidirectional) {
            let spec = TaskSpec::new(NodeId(source), [goal], strategy).with_params(params);
            let (history, summary) = run(Arc::clone(&graph), spec);
            let last = history.last().unwrap();
            prop_assert_eq!(last.status, SearchStatus::Failed, "{}", strategy);
            prop_assert!(last.path.is_empty());
            prop_assert_eq!(summary.path_cost, None);
            prop_assert_eq!(sorted(&last.visited), component.clone(), "{}", strategy);
        }
    }

    #[test]
    fn bidirectional_fails_without_leaving_either_component((n, edges, source) in arb_split_graph()) {
        let graph = graph_from_edges(n + 1, &edges);
        let goal = NodeId(n);
        let component: BTreeSet<NodeId> =
            reachable_from(&graph, NodeId(source)).into_iter().collect();

        let spec = TaskSpec::new(NodeId(source), [goal], StrategyKind::Bidirectional);
        let (history, _) = run(Arc::clone(&graph), spec);
        let last = history.last().unwrap();
        prop_assert_eq!(last.status, SearchStatus::Failed);
        prop_assert!(last.path.is_empty());
        prop_assert!(last.meeting_node.is_none());
        for node in &last.visited {
            prop_assert!(component.contains(node) || *node == goal);
        }
    }
}

#[test]
fn two_islands() {
    // {0, 1, 2} and {3, 4}; goal 4 from source 0.
    let graph = graph_from_edges(
        5,
        &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 1), (4, 3, 1)],
    );
    for strategy in [
        StrategyKind::BreadthFirst,
        StrategyKind::DepthFirst,
        StrategyKind::UniformCost,
        StrategyKind::GreedyBestFirst,
        StrategyKind::AStar,
    ] {
        let (history, summary) = run(
            Arc::clone(&graph),
            TaskSpec::new(NodeId(0), [NodeId(4)], strategy),
        );
        let last = history.last().unwrap();
        assert_eq!(last.status, SearchStatus::Failed, "{strategy}");
        assert!(last.frontier.is_empty());
        assert_eq!(sorted(&last.visited), vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(summary.nodes_explored, 3);
        // Three selections, three expansions, one failed selection.
        assert_eq!(summary.total_snapshots, 8);
    }
}
