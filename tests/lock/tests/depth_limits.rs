//! Depth-limited and iterative-deepening behavior at the limit.

use lock_tests::graph_helpers::{chain, graph_from_edges, ids, run, start, undirected_chain};
use trailscope_search::error::{ConfigurationError, DepthParameter};
use trailscope_search::params::SearchParams;
use trailscope_search::snapshot::SearchStatus;
use trailscope_search::stepper::Stepper;
use trailscope_search::strategy::StrategyKind;
use trailscope_search::task::TaskSpec;
use trailscope_kernel::graph::NodeId;

fn dls(limit: i64) -> TaskSpec {
    TaskSpec::new(NodeId(0), [NodeId(2)], StrategyKind::DepthLimited).with_params(SearchParams {
        depth_limit: limit,
        ..SearchParams::default()
    })
}

fn ids_spec(goal: u32, max_depth: i64) -> TaskSpec {
    TaskSpec::new(NodeId(0), [NodeId(goal)], StrategyKind::IterativeDeepening).with_params(
        SearchParams {
            max_depth,
            ..SearchParams::default()
        },
    )
}

#[test]
fn goal_beyond_the_limit_fails() {
    let (history, summary) = run(undirected_chain(3), dls(1));
    let last = history.last().unwrap();
    assert_eq!(last.status, SearchStatus::Failed);
    assert!(last.path.is_empty());
    // 1 sits at the limit and is tested but not expanded, so 2 is never seen.
    assert_eq!(ids(&last.visited), vec![0, 1]);
    assert_eq!(summary.nodes_explored, 2);
}

#[test]
fn goal_at_the_limit_is_found() {
    let (_, summary) = run(undirected_chain(3), dls(2));
    assert!(summary.is_success());
    assert_eq!(ids(&summary.path), vec![0, 1, 2]);
}

#[test]
fn limit_zero_tests_only_the_source() {
    let (history, _) = run(chain(3), dls(0));
    assert_eq!(history.len(), 4);
    assert_eq!(ids(&history.last().unwrap().visited), vec![0]);
}

#[test]
fn iterative_deepening_marks_each_restart() {
    let (history, summary) = run(chain(4), ids_spec(3, 10));
    let boundaries: Vec<u32> = history
        .iter()
        .filter(|s| s.is_iteration_boundary())
        .map(|s| s.iteration.unwrap().depth_limit)
        .collect();
    assert_eq!(boundaries, vec![0, 1, 2, 3]);
    assert!(summary.is_success());
    assert_eq!(ids(&summary.path), vec![0, 1, 2, 3]);
    // Rounds expand 1 + 2 + 3 + 4 nodes.
    assert_eq!(summary.nodes_explored, 10);

    // Every restart begins from a clean slate.
    for snapshot in history.iter().filter(|s| s.is_iteration_boundary()) {
        assert!(snapshot.visited.is_empty());
        assert_eq!(ids(&snapshot.frontier), vec![0]);
    }
}

#[test]
fn iterative_deepening_exhausts_max_depth() {
    let (history, summary) = run(chain(4), ids_spec(3, 2));
    let last = history.last().unwrap();
    assert_eq!(last.status, SearchStatus::Failed);
    assert_eq!(last.iteration.unwrap().depth_limit, 2);
    assert_eq!(summary.nodes_explored, 1 + 2 + 3);
    assert_eq!(
        history.iter().filter(|s| s.status == SearchStatus::Failed).count(),
        1,
        "only the final round reports failure"
    );
}

#[test]
fn iterative_deepening_stops_once_nothing_is_cut_off() {
    // 0 → 1 → 2, with 3 isolated. The round at limit 2 expands every node
    // reachable from 0 without leaving one behind at the limit.
    let graph = graph_from_edges(4, &[(0, 1, 1), (1, 2, 1)]);
    let (history, summary) = run(graph, ids_spec(3, 1_000_000));
    let last = history.last().unwrap();
    assert_eq!(last.status, SearchStatus::Failed);
    assert_eq!(last.iteration.unwrap().depth_limit, 2);
    assert_eq!(ids(&last.visited), vec![0, 1, 2]);
    assert_eq!(summary.nodes_explored, 1 + 2 + 3);
    let boundaries: Vec<u32> = history
        .iter()
        .filter(|s| s.is_iteration_boundary())
        .map(|s| s.iteration.unwrap().depth_limit)
        .collect();
    assert_eq!(boundaries, vec![0, 1, 2]);
}

#[test]
fn negative_parameters_fail_before_any_step() {
    let mut stepper = Stepper::default();
    let err = stepper.start_new(chain(3), dls(-1)).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::NegativeDepth {
            parameter: DepthParameter::DepthLimit,
            value: -1,
        }
    );
    assert!(stepper.history().is_none());

    let err = stepper.start_new(chain(3), ids_spec(2, -3)).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::NegativeDepth {
            parameter: DepthParameter::MaxDepth,
            value: -3,
        }
    ));
}

#[test]
fn history_restarts_with_a_new_task() {
    let mut stepper = start(chain(3), ids_spec(2, 5));
    stepper.run_to_completion();
    let old_len = stepper.history().unwrap().len();
    assert!(old_len > 1);
    stepper.start_new(chain(3), dls(2)).unwrap();
    assert_eq!(stepper.history().unwrap().len(), 1);
    assert_eq!(stepper.current_index(), Some(0));
}
