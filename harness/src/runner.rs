//! Harness runner: drives a sample world through a complete search run.
//!
//! The runner uses ONLY search-layer APIs: `SearchTask::new`, `Stepper` and
//! `RunSummary`. It does not implement any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! world.build() → SearchTask::new() → Stepper::start()
//!   → run_to_completion() → summary() → RunReport
//! ```

use tracing::info;
use trailscope_kernel::graph::GraphError;
use trailscope_kernel::proof::canon::CanonError;
use trailscope_search::error::ConfigurationError;
use trailscope_search::params::SearchParams;
use trailscope_search::recorder::SnapshotRecorder;
use trailscope_search::stepper::{Stepper, StepperConfig};
use trailscope_search::strategy::StrategyKind;
use trailscope_search::summary::RunSummary;
use trailscope_search::task::SearchTask;

use strum::IntoEnumIterator;

use crate::contract::SampleWorld;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// The world's graph data is malformed.
    #[error("world {world_id} failed to build: {source}")]
    World {
        world_id: String,
        source: GraphError,
    },
    /// The task was rejected before the first step.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// A digest could not be computed.
    #[error("canonical JSON failed: {0}")]
    Canon(#[from] CanonError),
    /// The stepper stopped without a terminal snapshot.
    #[error("run ended without a terminal snapshot")]
    Unfinished,
}

/// A finished run: its summary plus the full snapshot history.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub world_id: String,
    pub summary: RunSummary,
    pub history: SnapshotRecorder,
}

impl RunReport {
    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "summary": self.summary.to_json_value(),
            "world_id": self.world_id,
        })
    }
}

/// Run `task` to completion.
///
/// # Errors
///
/// Returns [`RunError::Canon`] if a digest fails.
pub fn run_task(world_id: &str, task: SearchTask) -> Result<RunReport, RunError> {
    let mut stepper = Stepper::new(StepperConfig::default());
    stepper.start(task);
    stepper.run_to_completion();
    let summary = stepper.summary()?.ok_or(RunError::Unfinished)?;
    let history = stepper.history().cloned().ok_or(RunError::Unfinished)?;
    info!(
        world = world_id,
        strategy = %summary.strategy,
        status = %summary.status,
        snapshots = summary.total_snapshots,
        "harness run complete"
    );
    Ok(RunReport {
        world_id: world_id.to_string(),
        summary,
        history,
    })
}

/// Build `world` and run `strategy` from its default source to its goals.
///
/// # Errors
///
/// Returns [`RunError`] if the world fails to build, the task is rejected,
/// or a digest fails.
pub fn run_world(
    world: &dyn SampleWorld,
    strategy: StrategyKind,
    params: SearchParams,
) -> Result<RunReport, RunError> {
    let world_id = world.world_id();
    let sample = world.build().map_err(|source| RunError::World {
        world_id: world_id.to_string(),
        source,
    })?;
    let spec = sample.task_spec(strategy, params);
    let task = SearchTask::new(sample.graph, spec)?;
    run_task(world_id, task)
}

/// Run every strategy on `world`, in selector order.
///
/// # Errors
///
/// Returns the first [`RunError`].
pub fn run_all_strategies(
    world: &dyn SampleWorld,
    params: SearchParams,
) -> Result<Vec<RunReport>, RunError> {
    StrategyKind::iter()
        .map(|strategy| run_world(world, strategy, params))
        .collect()
}
