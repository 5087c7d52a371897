//! Iterative deepening: depth-limited rounds with limits `0..=max_depth`.

use std::sync::Arc;

use tracing::debug;
use trailscope_kernel::graph::Graph;

use crate::contract::{SearchProcess, StepOutcome, StepRecord};
use crate::search::FrontierSearch;
use crate::snapshot::Snapshot;
use crate::strategy::StrategyKind;

/// Drives one [`FrontierSearch`] round per depth limit.
///
/// When a round fails below `max_depth`, the step that would have reported
/// the failure instead starts the next round and yields that round's initial
/// snapshot, marked as an iteration boundary. A round that failed without
/// any node being cut off at its limit has exhausted the reachable graph, so
/// its failure is final even below `max_depth`.
#[derive(Debug, Clone)]
pub struct DeepeningSearch {
    graph: Arc<Graph>,
    source: usize,
    goals: Vec<usize>,
    max_depth: u32,
    round: FrontierSearch,
    explored_before: usize,
}

impl DeepeningSearch {
    pub(crate) fn new(graph: Arc<Graph>, source: usize, goals: &[usize], max_depth: u32) -> Self {
        let round = FrontierSearch::for_iteration(
            Arc::clone(&graph),
            StrategyKind::IterativeDeepening,
            source,
            goals,
            0,
        );
        Self {
            graph,
            source,
            goals: goals.to_vec(),
            max_depth,
            round,
            explored_before: 0,
        }
    }

    /// Depth limit of the round in progress.
    #[must_use]
    pub fn depth_limit(&self) -> u32 {
        self.round.iteration().unwrap_or(0)
    }
}

impl SearchProcess for DeepeningSearch {
    fn strategy(&self) -> StrategyKind {
        StrategyKind::IterativeDeepening
    }

    fn initial_snapshot(&self) -> Snapshot {
        self.round.initial_snapshot()
    }

    fn advance_one_step(&mut self) -> StepRecord {
        let record = self.round.advance_one_step();
        let limit = self.depth_limit();
        if record.outcome != StepOutcome::Failed || limit >= self.max_depth {
            return record;
        }
        if !self.round.hit_depth_limit() {
            debug!(depth_limit = limit, "reachable graph exhausted below depth limit");
            return record;
        }

        self.explored_before += self.round.nodes_explored();
        let next = limit + 1;
        debug!(depth_limit = next, "iterative deepening round started");
        self.round = FrontierSearch::for_iteration(
            Arc::clone(&self.graph),
            StrategyKind::IterativeDeepening,
            self.source,
            &self.goals,
            next,
        );
        StepRecord {
            outcome: StepOutcome::Continue,
            snapshot: self.round.initial_snapshot(),
        }
    }

    fn nodes_explored(&self) -> usize {
        self.explored_before + self.round.nodes_explored()
    }
}
