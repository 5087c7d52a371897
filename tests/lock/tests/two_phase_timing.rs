//! Two-phase reveal: a node is tagged visited one snapshot before it is
//! appended to the visited list.

use std::sync::Arc;

use lock_tests::graph_helpers::{graph_with_heuristics, ids, run};
use strum::IntoEnumIterator;
use trailscope_harness::contract::SampleWorld;
use trailscope_harness::worlds;
use trailscope_harness::worlds::weighted_detour::WeightedDetour;
use trailscope_kernel::graph::{Cost, Graph, NodeId};
use trailscope_search::params::SearchParams;
use trailscope_search::run_state::NodeTag;
use trailscope_search::snapshot::{SearchStatus, Snapshot};
use trailscope_search::strategy::StrategyKind;
use trailscope_search::task::TaskSpec;

fn units(n: u64) -> Cost {
    Cost::from_units(n)
}

fn tag(graph: &Graph, snapshot: &Snapshot, id: NodeId) -> NodeTag {
    snapshot.tag_at(graph.index_of(id).unwrap())
}

/// 0 → 1 (2), 1 → 2 (3); h = 4, 2, 0.
fn example_a() -> Arc<Graph> {
    graph_with_heuristics(3, &[(0, 1, 2), (1, 2, 3)], &[4, 2, 0])
}

#[test]
fn astar_three_node_chain() {
    let graph = example_a();
    let (history, summary) = run(
        Arc::clone(&graph),
        TaskSpec::new(NodeId(0), [NodeId(2)], StrategyKind::AStar),
    );

    assert_eq!(ids(&summary.path), vec![0, 1, 2]);
    assert_eq!(summary.path_cost, Some(Cost::from_units(5)));
    assert_eq!(history.len(), 7);
    assert_eq!(summary.total_snapshots, 7);

    let initial = &history[0];
    assert_eq!(ids(&initial.frontier), vec![0]);
    assert!(initial.visited.is_empty());

    // Select 0: tagged visited, not yet listed.
    let select = &history[1];
    assert_eq!(tag(&graph, select, NodeId(0)), NodeTag::Visited);
    assert!(select.visited.is_empty());
    assert!(select.frontier.is_empty());
    let readout = select.current.unwrap();
    assert_eq!((readout.g, readout.h, readout.f), (Cost::ZERO, units(4), units(4)));

    // Expand 0: now listed, child queued.
    let expand = &history[2];
    assert_eq!(ids(&expand.visited), vec![0]);
    assert_eq!(ids(&expand.frontier), vec![1]);

    let readout = history[3].current.unwrap();
    assert_eq!(
        (readout.node, readout.g, readout.h, readout.f),
        (NodeId(1), units(2), units(2), units(4))
    );
    let readout = history[5].current.unwrap();
    assert_eq!(
        (readout.node, readout.g, readout.h, readout.f),
        (NodeId(2), units(5), Cost::ZERO, units(5))
    );

    let last = history.last().unwrap();
    assert_eq!(last.status, SearchStatus::Succeeded);
    assert_eq!(ids(&last.visited), vec![0, 1, 2]);
    assert!(history[..6].iter().all(|s| s.status == SearchStatus::Running));
}

/// For every sample world and strategy, each newly listed node was already
/// tagged visited (and off the frontier) in the previous snapshot.
#[test]
fn every_strategy_reveals_in_two_phases() {
    for world in worlds::all() {
        let sample = world.build().unwrap();
        for strategy in StrategyKind::iter() {
            let (history, _) = run(
                Arc::clone(&sample.graph),
                sample.task_spec(strategy, SearchParams::default()),
            );
            for pair in history.windows(2) {
                let (before, after) = (&pair[0], &pair[1]);
                if after.is_iteration_boundary() {
                    continue;
                }
                if after.visited.len() == before.visited.len() + 1 {
                    let newest = *after.visited.last().unwrap();
                    let context = format!("{} / {strategy} / node {newest}", world.world_id());
                    assert_eq!(
                        tag(&sample.graph, before, newest),
                        NodeTag::Visited,
                        "{context}"
                    );
                    assert!(!before.visited.contains(&newest), "{context}");
                    assert!(!before.frontier.contains(&newest), "{context}");
                } else {
                    assert_eq!(
                        after.visited, before.visited,
                        "{} / {strategy}: visited list changed by more than one",
                        world.world_id()
                    );
                }
            }
        }
    }
}

/// Tags flip to visited only on selection steps, never on expansion steps.
#[test]
fn tags_flip_on_selection_only() {
    let sample = WeightedDetour.build().unwrap();
    let (history, _) = run(
        Arc::clone(&sample.graph),
        sample.task_spec(StrategyKind::UniformCost, SearchParams::default()),
    );
    for (step, pair) in history.windows(2).enumerate() {
        let newly_visited: Vec<usize> = (0..sample.graph.len())
            .filter(|&i| {
                pair[0].tag_at(i) != NodeTag::Visited && pair[1].tag_at(i) == NodeTag::Visited
            })
            .collect();
        if step % 2 == 0 {
            assert_eq!(newly_visited.len(), 1, "selection step {}", step + 1);
        } else {
            assert!(newly_visited.is_empty(), "expansion step {}", step + 1);
        }
    }
}
