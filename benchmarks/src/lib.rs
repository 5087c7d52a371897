//! Shared helpers for trailscope benchmark suites.

use std::sync::Arc;

use trailscope_harness::contract::{SampleGraph, SampleWorld};
use trailscope_harness::worlds::grid::Grid;
use trailscope_search::params::SearchParams;
use trailscope_search::stepper::{Stepper, StepperConfig};
use trailscope_search::strategy::StrategyKind;
use trailscope_search::task::SearchTask;

/// Side lengths used by the grid regimes.
pub const GRID_SIDES: [u32; 3] = [8, 16, 32];

/// A `side × side` grid sample.
///
/// # Panics
///
/// Panics if the grid fails to build. Benchmark setup failures are fatal.
#[must_use]
pub fn grid_sample(side: u32) -> SampleGraph {
    Grid {
        rows: side,
        cols: side,
    }
    .build()
    .expect("grid builds")
}

/// Validated task for `strategy` on `sample`, with both depth parameters
/// large enough to reach any node of the sample.
///
/// # Panics
///
/// Panics if the task is rejected.
#[must_use]
pub fn prepare_task(sample: &SampleGraph, strategy: StrategyKind) -> SearchTask {
    let depth = i64::try_from(sample.graph.len()).unwrap_or(i64::MAX);
    let params = SearchParams {
        depth_limit: depth,
        max_depth: depth,
    };
    SearchTask::new(Arc::clone(&sample.graph), sample.task_spec(strategy, params))
        .expect("benchmark task is valid")
}

/// Run `task` to its terminal snapshot and return the number of snapshots
/// recorded.
#[must_use]
pub fn run_to_end(task: SearchTask) -> usize {
    let mut stepper = Stepper::new(StepperConfig::default());
    stepper.start(task);
    stepper.run_to_completion();
    stepper.history().map_or(0, |h| h.len())
}

/// Run `task` by driving the process directly, skipping the recorder.
#[must_use]
pub fn drive_process(task: &SearchTask) -> usize {
    let mut process = task.spawn();
    let mut steps = 0;
    while !process.advance_one_step().outcome.is_terminal() {
        steps += 1;
    }
    steps + 1
}
