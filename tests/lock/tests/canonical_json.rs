//! Field-level checks on the canonical JSON written for snapshots and
//! summaries, read back with `serde_json`.

use std::sync::Arc;

use lock_tests::graph_helpers::{graph_with_costs, run};
use serde_json::Value;
use trailscope_harness::contract::SampleWorld;
use trailscope_harness::worlds::weighted_detour::WeightedDetour;
use trailscope_kernel::graph::{Cost, NodeId};
use trailscope_kernel::proof::canon::canonical_json_bytes;
use trailscope_search::params::SearchParams;
use trailscope_search::snapshot::Snapshot;
use trailscope_search::strategy::StrategyKind;
use trailscope_search::task::TaskSpec;

fn parse(snapshot: &Snapshot) -> Value {
    serde_json::from_slice(&snapshot.to_canonical_json_bytes().unwrap())
        .unwrap_or_else(|e| panic!("snapshot JSON must parse: {e}"))
}

fn node_ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect()
}

#[test]
fn snapshot_fields_match_the_recorded_values() {
    let sample = WeightedDetour.build().unwrap();
    let spec = sample.task_spec(StrategyKind::AStar, SearchParams::default());
    let (history, _) = run(Arc::clone(&sample.graph), spec);

    for snapshot in &history {
        let json = parse(snapshot);
        let frontier: Vec<u64> = snapshot.frontier.iter().map(|n| u64::from(n.0)).collect();
        let visited: Vec<u64> = snapshot.visited.iter().map(|n| u64::from(n.0)).collect();
        assert_eq!(node_ids(&json["frontier"]), frontier);
        assert_eq!(node_ids(&json["visited"]), visited);
        assert_eq!(json["status"], snapshot.status.to_string());
        assert_eq!(
            json["node_tags"].as_array().unwrap().len(),
            sample.graph.len()
        );

        match snapshot.current {
            Some(readout) => {
                assert_eq!(json["current"]["node"], readout.node.0);
                assert_eq!(json["current"]["g"], readout.g.milli());
                assert_eq!(json["current"]["h"], readout.h.milli());
                assert_eq!(json["current"]["f"], readout.f.milli());
            }
            None => assert!(json["current"].is_null()),
        }
        assert!(json["iteration"].is_null());
        assert!(json["meeting_node"].is_null());
    }

    let last = parse(history.last().unwrap());
    assert_eq!(last["status"], "succeeded");
    assert_eq!(node_ids(&last["path"]), vec![0, 1, 3, 4, 5]);
    assert_eq!(last["path_cost"], 7000);
}

#[test]
fn canonical_bytes_are_stable_under_reparse() {
    let sample = WeightedDetour.build().unwrap();
    let spec = sample.task_spec(StrategyKind::Bidirectional, SearchParams::default());
    let (history, _) = run(Arc::clone(&sample.graph), spec);
    let last = history.last().unwrap();
    let bytes = last.to_canonical_json_bytes().unwrap();
    let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(canonical_json_bytes(&reparsed).unwrap(), bytes);
    assert_eq!(reparsed["meeting_node"], last.meeting_node.unwrap().0);
}

#[test]
fn summary_records_fractional_cost_in_thousandths() {
    let graph = graph_with_costs(
        3,
        &[
            (0, 1, Cost::from_milli(1250)),
            (1, 2, Cost::from_milli(500)),
        ],
        &[],
    );
    let (history, summary) = run(
        graph,
        TaskSpec::new(NodeId(0), [NodeId(2)], StrategyKind::UniformCost),
    );
    assert_eq!(summary.path_cost, Some(Cost::from_milli(1750)));

    let json: Value = serde_json::from_slice(&summary.to_canonical_json_bytes().unwrap()).unwrap();
    assert_eq!(json["cost_scale"], 1000);
    assert_eq!(json["path_cost"], 1750);
    assert_eq!(json["strategy"], "ucs");
    assert_eq!(json["total_snapshots"], history.len());
    assert_eq!(json["history_digest"], summary.history_digest.to_string());

    let last = parse(history.last().unwrap());
    assert_eq!(last["current"]["g"], 1750);
}
