//! Bidirectional breadth-first search.
//!
//! Two breadth-first sides share one step counter: the forward side follows
//! outgoing edges from the source, the backward side follows incoming edges
//! from every goal. Sides take turns a whole layer at a time, and every step
//! still selects or expands exactly one node.
//!
//! The sides meet when an expanded node, or a child it discovers, has already
//! been reached by the other side. Alternating by complete layers keeps the
//! spliced path shortest in edge count.

use std::collections::VecDeque;
use std::sync::Arc;

use trailscope_kernel::graph::{Cost, Edge, Graph, NodeId};

use crate::contract::{SearchProcess, StepOutcome, StepRecord};
use crate::path::splice_meeting_paths;
use crate::run_state::{NodeTag, RunStateTable};
use crate::snapshot::{SearchStatus, Snapshot};
use crate::strategy::StrategyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn other(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    fn edges(self, graph: &Graph, index: usize) -> &[Edge] {
        match self {
            Self::Forward => graph.node_at(index).neighbors(),
            Self::Backward => graph.predecessors_at(index),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Select,
    Expand(usize),
}

/// One breadth-first half of the search.
#[derive(Debug, Clone)]
struct Side {
    queue: VecDeque<usize>,
    table: RunStateTable,
    expanded: Vec<NodeId>,
    layer_remaining: usize,
}

impl Side {
    fn seeded(len: usize, roots: &[usize]) -> Self {
        let mut table = RunStateTable::new(len);
        let mut queue = VecDeque::new();
        for &root in roots {
            if !table.is_reached(root) {
                table.discover(root, None, Cost::ZERO, None);
                queue.push_back(root);
            }
        }
        Self {
            queue,
            table,
            expanded: Vec::new(),
            layer_remaining: 0,
        }
    }

    fn frontier(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue
            .iter()
            .copied()
            .filter(|&i| self.table.tag(i) == NodeTag::Frontier)
    }
}

/// Bidirectional breadth-first search process.
#[derive(Debug, Clone)]
pub struct BidirectionalSearch {
    graph: Arc<Graph>,
    forward: Side,
    backward: Side,
    turn: Direction,
    phase: Phase,
    visited: Vec<NodeId>,
    meeting: Option<usize>,
    finished: Option<StepOutcome>,
}

impl BidirectionalSearch {
    pub(crate) fn new(graph: Arc<Graph>, source: usize, goals: &[usize]) -> Self {
        let len = graph.len();
        Self {
            forward: Side::seeded(len, &[source]),
            backward: Side::seeded(len, goals),
            graph,
            turn: Direction::Forward,
            phase: Phase::Select,
            visited: Vec::new(),
            meeting: None,
            finished: None,
        }
    }

    fn sides_mut(&mut self, direction: Direction) -> (&mut Side, &Side) {
        match direction {
            Direction::Forward => (&mut self.forward, &self.backward),
            Direction::Backward => (&mut self.backward, &self.forward),
        }
    }

    fn select(&mut self) -> StepRecord {
        let turn = self.turn;
        let (side, _) = self.sides_mut(turn);
        if side.layer_remaining == 0 {
            side.layer_remaining = side.queue.len();
        }
        let Some(index) = side.queue.pop_front() else {
            return self.finish(StepOutcome::Failed);
        };
        side.table.mark_visited(index);
        self.phase = Phase::Expand(index);
        StepRecord {
            outcome: StepOutcome::Continue,
            snapshot: self.snapshot(SearchStatus::Running),
        }
    }

    fn expand(&mut self, index: usize) -> StepRecord {
        let turn = self.turn;
        let id = self.graph.node_at(index).id();
        self.visited.push(id);
        self.phase = Phase::Select;

        let graph = Arc::clone(&self.graph);
        let (side, other) = self.sides_mut(turn);
        side.expanded.push(id);
        let mut meeting = other.table.is_reached(index).then_some(index);
        if meeting.is_none() {
            let g = side.table.entry(index).g.saturating_add(Cost::ONE);
            for edge in turn.edges(&graph, index) {
                let Some(child) = graph.index_of(edge.node) else {
                    continue;
                };
                if side.table.is_reached(child) {
                    continue;
                }
                side.table.discover(child, Some(index), g, None);
                if other.table.is_reached(child) {
                    meeting = Some(child);
                    break;
                }
                side.queue.push_back(child);
            }
        }

        if let Some(meet) = meeting {
            self.meeting = Some(meet);
            let path = splice_meeting_paths(&graph, &self.forward.table, &self.backward.table, meet);
            let cost = self
                .forward
                .table
                .entry(meet)
                .g
                .saturating_add(self.backward.table.entry(meet).g);
            return self.finish(StepOutcome::Succeeded { path, cost });
        }

        self.count_down_layer(turn);
        StepRecord {
            outcome: StepOutcome::Continue,
            snapshot: self.snapshot(SearchStatus::Running),
        }
    }

    /// Count down the layer being expanded; hand the turn over once it is done.
    fn count_down_layer(&mut self, turn: Direction) {
        let (side, _) = self.sides_mut(turn);
        side.layer_remaining = side.layer_remaining.saturating_sub(1);
        if side.layer_remaining == 0 {
            self.turn = turn.other();
        }
    }

    fn finish(&mut self, outcome: StepOutcome) -> StepRecord {
        self.finished = Some(outcome.clone());
        StepRecord {
            snapshot: self.terminal_snapshot(&outcome),
            outcome,
        }
    }

    fn terminal_snapshot(&self, outcome: &StepOutcome) -> Snapshot {
        match outcome {
            StepOutcome::Succeeded { path, cost } => {
                let mut snapshot = self.snapshot(SearchStatus::Succeeded);
                snapshot.path.clone_from(path);
                snapshot.path_cost = Some(*cost);
                snapshot
            }
            StepOutcome::Failed | StepOutcome::Continue => self.snapshot(SearchStatus::Failed),
        }
    }

    fn snapshot(&self, status: SearchStatus) -> Snapshot {
        let node_tags: Vec<NodeTag> = (0..self.graph.len())
            .map(|i| self.forward.table.tag(i).max(self.backward.table.tag(i)))
            .collect();

        // A node queued on one side but already taken by the other is shown
        // as visited only.
        let frontier = self
            .forward
            .frontier()
            .chain(self.backward.frontier())
            .filter(|&i| node_tags[i] == NodeTag::Frontier)
            .map(|i| self.graph.node_at(i).id())
            .collect();

        let mut traversal = self.forward.expanded.clone();
        traversal.extend_from_slice(&self.backward.expanded);

        Snapshot {
            frontier,
            visited: self.visited.clone(),
            traversal,
            path: Vec::new(),
            path_cost: None,
            status,
            current: None,
            meeting_node: self.meeting.map(|i| self.graph.node_at(i).id()),
            iteration: None,
            node_tags,
        }
    }
}

impl SearchProcess for BidirectionalSearch {
    fn strategy(&self) -> StrategyKind {
        StrategyKind::Bidirectional
    }

    fn initial_snapshot(&self) -> Snapshot {
        self.snapshot(SearchStatus::Running)
    }

    fn advance_one_step(&mut self) -> StepRecord {
        if let Some(outcome) = &self.finished {
            return StepRecord {
                outcome: outcome.clone(),
                snapshot: self.terminal_snapshot(outcome),
            };
        }
        match self.phase {
            Phase::Select => self.select(),
            Phase::Expand(index) => self.expand(index),
        }
    }

    fn nodes_explored(&self) -> usize {
        self.visited.len()
    }
}
