//! The step-at-a-time process contract shared by every strategy.

use trailscope_kernel::graph::{Cost, NodeId};

use crate::snapshot::Snapshot;
use crate::strategy::StrategyKind;

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The run can advance further.
    Continue,
    /// A goal was reached.
    Succeeded { path: Vec<NodeId>, cost: Cost },
    /// The frontier emptied without reaching a goal.
    Failed,
}

impl StepOutcome {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// A step outcome together with the snapshot describing the state after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub outcome: StepOutcome,
    pub snapshot: Snapshot,
}

/// A search run that advances one observable step at a time.
///
/// # Contract
///
/// - `initial_snapshot` describes the state before any step and does not
///   change the process.
/// - Each `advance_one_step` call is exactly one step and yields exactly one
///   snapshot. Selecting a node and expanding it are separate steps.
/// - Once a terminal outcome is returned, further calls return the same
///   outcome and an equal snapshot without changing state.
/// - Processes are deterministic: same graph and task, same sequence.
pub trait SearchProcess {
    fn strategy(&self) -> StrategyKind;

    fn initial_snapshot(&self) -> Snapshot;

    fn advance_one_step(&mut self) -> StepRecord;

    /// Nodes expanded so far, summed across iterative-deepening rounds.
    fn nodes_explored(&self) -> usize;
}
