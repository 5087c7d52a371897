//! Step controller: forward, backward, jump, replay.
//!
//! The stepper owns at most one active run. Stepping forward within the
//! recorded history replays a stored snapshot; stepping past its end asks
//! the process for one more step. Stepping backward never recomputes
//! anything, and recorded snapshots are never modified.

use std::sync::Arc;

use tracing::{debug, info, trace};
use trailscope_kernel::graph::Graph;
use trailscope_kernel::proof::canon::CanonError;
use trailscope_kernel::proof::fingerprint::graph_digest;

use crate::contract::{SearchProcess, StepOutcome};
use crate::error::ConfigurationError;
use crate::recorder::SnapshotRecorder;
use crate::snapshot::Snapshot;
use crate::summary::RunSummary;
use crate::task::{SearchTask, TaskSpec};

/// When the stepper computes steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Run to completion at start; every later step is a replay.
    Eager,
    /// Compute each step the first time it is requested.
    #[default]
    Lazy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperConfig {
    pub cache: CachePolicy,
}

/// How a navigation request was satisfied. Each variant carries the new
/// cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to an already recorded snapshot.
    Replayed(usize),
    /// Computed and recorded a new snapshot.
    Computed(usize),
    /// Already at a boundary (start when stepping back, terminal when
    /// stepping forward); the cursor did not move.
    Stalled(usize),
}

impl Advance {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Replayed(i) | Self::Computed(i) | Self::Stalled(i) => i,
        }
    }
}

struct ActiveRun {
    task: SearchTask,
    process: Box<dyn SearchProcess>,
    recorder: SnapshotRecorder,
    cursor: usize,
    outcome: Option<StepOutcome>,
}

impl ActiveRun {
    /// Record one more step. `None` once the run is terminal.
    fn compute_next(&mut self) -> Option<usize> {
        if self.outcome.is_some() {
            return None;
        }
        let record = self.process.advance_one_step();
        let index = self.recorder.record(record.snapshot);
        debug!(
            step = index,
            frontier = self.recorder.last().map_or(0, |s| s.frontier.len()),
            "step computed"
        );
        if record.outcome.is_terminal() {
            info!(
                strategy = %self.task.strategy(),
                steps = index,
                nodes_explored = self.process.nodes_explored(),
                succeeded = matches!(record.outcome, StepOutcome::Succeeded { .. }),
                "search run finished"
            );
            self.outcome = Some(record.outcome);
        }
        Some(index)
    }
}

/// Drives one search run at a time and keeps its snapshot history.
#[derive(Default)]
pub struct Stepper {
    config: StepperConfig,
    active: Option<ActiveRun>,
}

impl Stepper {
    #[must_use]
    pub fn new(config: StepperConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> StepperConfig {
        self.config
    }

    /// Start a run of `task`, discarding any previous run and its history.
    ///
    /// Returns the initial snapshot (index 0).
    pub fn start(&mut self, task: SearchTask) -> Arc<Snapshot> {
        info!(
            strategy = %task.strategy(),
            source = %task.source(),
            goals = task.goals().len(),
            nodes = task.graph().len(),
            "search run started"
        );
        let process = task.spawn();
        let initial = Arc::new(process.initial_snapshot());
        let mut recorder = SnapshotRecorder::new();
        recorder.record(Arc::clone(&initial));
        let run = self.active.insert(ActiveRun {
            task,
            process,
            recorder,
            cursor: 0,
            outcome: None,
        });
        if self.config.cache == CachePolicy::Eager {
            while run.compute_next().is_some() {}
        }
        initial
    }

    /// Validate `spec` against `graph` and start it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] from validation; the previous run,
    /// if any, is left untouched.
    pub fn start_new(
        &mut self,
        graph: Arc<Graph>,
        spec: TaskSpec,
    ) -> Result<Arc<Snapshot>, ConfigurationError> {
        let task = SearchTask::new(graph, spec)?;
        Ok(self.start(task))
    }

    /// Discard the active run.
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            debug!("search run discarded");
        }
    }

    #[must_use]
    pub fn task(&self) -> Option<&SearchTask> {
        self.active.as_ref().map(|run| &run.task)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active.as_ref().map(|run| run.cursor)
    }

    /// Snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        let run = self.active.as_ref()?;
        run.recorder.get(run.cursor).cloned()
    }

    /// Recorded snapshot at `index`, without moving the cursor.
    #[must_use]
    pub fn snapshot(&self, index: usize) -> Option<Arc<Snapshot>> {
        self.active.as_ref()?.recorder.get(index).cloned()
    }

    #[must_use]
    pub fn history(&self) -> Option<&SnapshotRecorder> {
        self.active.as_ref().map(|run| &run.recorder)
    }

    /// Whether the active run has reached a terminal snapshot.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome().is_some()
    }

    /// Terminal outcome of the active run, once reached.
    #[must_use]
    pub fn outcome(&self) -> Option<&StepOutcome> {
        self.active.as_ref()?.outcome.as_ref()
    }

    /// Move one snapshot forward, computing it if it was never recorded.
    pub fn step_forward(&mut self) -> Option<Advance> {
        let run = self.active.as_mut()?;
        if run.cursor + 1 < run.recorder.len() {
            run.cursor += 1;
            trace!(step = run.cursor, "step replayed");
            return Some(Advance::Replayed(run.cursor));
        }
        Some(match run.compute_next() {
            Some(index) => {
                run.cursor = index;
                Advance::Computed(index)
            }
            None => Advance::Stalled(run.cursor),
        })
    }

    /// Move one snapshot back. Never recomputes.
    pub fn step_backward(&mut self) -> Option<Advance> {
        let run = self.active.as_mut()?;
        if run.cursor == 0 {
            return Some(Advance::Stalled(0));
        }
        run.cursor -= 1;
        trace!(step = run.cursor, "step replayed");
        Some(Advance::Replayed(run.cursor))
    }

    /// Move the cursor to `index`, computing forward as needed. Requests
    /// beyond the terminal snapshot land on it.
    ///
    /// Returns the new cursor position.
    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        let run = self.active.as_mut()?;
        while run.recorder.len() <= index && run.compute_next().is_some() {}
        run.cursor = index.min(run.recorder.len() - 1);
        Some(run.cursor)
    }

    /// Move the cursor back to the initial snapshot.
    pub fn rewind(&mut self) -> Option<usize> {
        let run = self.active.as_mut()?;
        run.cursor = 0;
        Some(0)
    }

    /// Compute every remaining step without moving the cursor.
    pub fn run_to_completion(&mut self) -> Option<&StepOutcome> {
        let run = self.active.as_mut()?;
        while run.compute_next().is_some() {}
        run.outcome.as_ref()
    }

    /// Summary of the active run once it is complete.
    ///
    /// Returns `Ok(None)` while no run is active or the run is unfinished.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a digest cannot be computed.
    pub fn summary(&self) -> Result<Option<RunSummary>, CanonError> {
        let Some(run) = self.active.as_ref() else {
            return Ok(None);
        };
        let (Some(outcome), Some(last)) = (run.outcome.as_ref(), run.recorder.last()) else {
            return Ok(None);
        };
        let graph = run.task.graph();
        let (path, path_cost) = match outcome {
            StepOutcome::Succeeded { path, cost } => (path.clone(), Some(*cost)),
            StepOutcome::Failed | StepOutcome::Continue => (Vec::new(), None),
        };
        Ok(Some(RunSummary {
            strategy: run.task.strategy(),
            status: last.status,
            path,
            path_cost,
            nodes_explored: run.process.nodes_explored(),
            total_snapshots: run.recorder.len(),
            peak_frontier: run.recorder.peak_frontier(),
            node_count: graph.len(),
            edge_count: graph.edge_count(),
            graph_digest: graph_digest(graph)?,
            history_digest: run.recorder.history_digest()?,
        }))
    }
}
