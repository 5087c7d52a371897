//! Single-frontier expansion loop shared by seven of the eight strategies.
//!
//! A run alternates two phases, each one observable step:
//!
//! 1. **Select**: pop the best live frontier entry (stale entries of
//!    already-visited nodes are discarded on the way) and tag it visited.
//! 2. **Expand**: append it to the visit order, test it against the goal set,
//!    and push its admissible children.
//!
//! The goal test happens on expansion, never on discovery. This is what makes
//! uniform-cost and A* return the cheapest path even when a goal is reached
//! early through an expensive edge.

use std::sync::Arc;

use trailscope_kernel::graph::{Cost, Graph, NodeId};

use crate::contract::{SearchProcess, StepOutcome, StepRecord};
use crate::frontier::{Candidate, Frontier};
use crate::path::reconstruct_path;
use crate::run_state::{NodeTag, RunStateTable};
use crate::snapshot::{CostReadout, IterationMark, SearchStatus, Snapshot};
use crate::strategy::StrategyKind;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Select,
    Expand(Candidate),
}

/// One run of a frontier-driven strategy (everything except bidirectional;
/// iterative deepening drives a sequence of these).
#[derive(Debug, Clone)]
pub struct FrontierSearch {
    graph: Arc<Graph>,
    strategy: StrategyKind,
    is_goal: Vec<bool>,
    frontier: Frontier,
    table: RunStateTable,
    visited: Vec<NodeId>,
    phase: Phase,
    current: Option<CostReadout>,
    iteration: Option<u32>,
    /// Set once a node at the depth limit is left with an unreached neighbor.
    cut_off: bool,
    finished: Option<StepOutcome>,
}

impl FrontierSearch {
    /// A fresh run from arena index `source`.
    ///
    /// `depth_limit` is read only by depth-bounded strategies. Indices must be
    /// valid arena positions of `graph`; [`crate::task::SearchTask`] resolves
    /// them.
    pub(crate) fn new(
        graph: Arc<Graph>,
        strategy: StrategyKind,
        source: usize,
        goals: &[usize],
        depth_limit: u32,
    ) -> Self {
        let len = graph.len();
        let mut is_goal = vec![false; len];
        for &g in goals {
            if let Some(slot) = is_goal.get_mut(g) {
                *slot = true;
            }
        }

        let h = graph.node_at(source).heuristic();
        let mut table = RunStateTable::new(len);
        let priority = strategy.priority(Cost::ZERO, h);
        table.discover(
            source,
            None,
            Cost::ZERO,
            strategy.is_cost_aware().then_some(priority),
        );
        let mut frontier = Frontier::new(strategy.frontier_family(), depth_limit);
        frontier.push(Candidate {
            index: source,
            depth: 0,
            priority,
        });

        Self {
            graph,
            strategy,
            is_goal,
            frontier,
            table,
            visited: Vec::new(),
            phase: Phase::Select,
            current: None,
            iteration: None,
            cut_off: false,
            finished: None,
        }
    }

    /// A run that is one round of iterative deepening at `depth_limit`.
    pub(crate) fn for_iteration(
        graph: Arc<Graph>,
        strategy: StrategyKind,
        source: usize,
        goals: &[usize],
        depth_limit: u32,
    ) -> Self {
        let mut run = Self::new(graph, strategy, source, goals, depth_limit);
        run.iteration = Some(depth_limit);
        run
    }

    /// Depth limit of this round, when driven by iterative deepening.
    #[must_use]
    pub fn iteration(&self) -> Option<u32> {
        self.iteration
    }

    /// Whether the depth limit kept this run from reaching some node.
    ///
    /// When false after a failed run, every node reachable from the source
    /// was expanded, so a deeper limit cannot change the outcome.
    #[must_use]
    pub fn hit_depth_limit(&self) -> bool {
        self.cut_off
    }

    fn select(&mut self) -> StepRecord {
        loop {
            let Some(candidate) = self.frontier.pop() else {
                return self.finish(StepOutcome::Failed);
            };
            if self.table.tag(candidate.index) == NodeTag::Visited {
                continue;
            }
            self.table.mark_visited(candidate.index);
            self.current = self.readout(candidate.index);
            self.phase = Phase::Expand(candidate);
            return StepRecord {
                outcome: StepOutcome::Continue,
                snapshot: self.snapshot(SearchStatus::Running, false),
            };
        }
    }

    fn expand(&mut self, candidate: Candidate) -> StepRecord {
        self.visited.push(self.graph.node_at(candidate.index).id());
        self.phase = Phase::Select;

        if self.is_goal[candidate.index] {
            let path = reconstruct_path(&self.graph, &self.table, candidate.index);
            let cost = self.table.entry(candidate.index).g;
            return self.finish(StepOutcome::Succeeded { path, cost });
        }
        if self.frontier.is_leaf_depth(candidate.depth) {
            self.cut_off |= self.has_unreached_neighbor(candidate.index);
        } else {
            self.push_children(candidate);
        }
        StepRecord {
            outcome: StepOutcome::Continue,
            snapshot: self.snapshot(SearchStatus::Running, false),
        }
    }

    fn has_unreached_neighbor(&self, index: usize) -> bool {
        self.graph.node_at(index).neighbors().iter().any(|edge| {
            self.graph
                .index_of(edge.node)
                .is_some_and(|child| !self.table.is_reached(child))
        })
    }

    /// Admit the children of `parent` in neighbor declaration order.
    ///
    /// Unvisited nodes are always admitted. A node already on the frontier is
    /// re-admitted only by cost-aware strategies and only through a strictly
    /// cheaper route; the older entry goes stale. Visited nodes are final.
    fn push_children(&mut self, parent: Candidate) {
        let parent_g = self.table.entry(parent.index).g;
        let mut children = Vec::new();
        for edge in self.graph.node_at(parent.index).neighbors() {
            let Some(child) = self.graph.index_of(edge.node) else {
                continue;
            };
            let g = parent_g.saturating_add(self.strategy.step_cost(edge.weight));
            let entry = self.table.entry(child);
            let admit = match entry.tag {
                NodeTag::Unvisited => true,
                NodeTag::Frontier => self.strategy.is_cost_aware() && g < entry.g,
                NodeTag::Visited => false,
            };
            if !admit {
                continue;
            }
            let h = self.graph.node_at(child).heuristic();
            let priority = self.strategy.priority(g, h);
            self.table.discover(
                child,
                Some(parent.index),
                g,
                self.strategy.is_cost_aware().then_some(priority),
            );
            children.push(Candidate {
                index: child,
                depth: parent.depth.saturating_add(1),
                priority,
            });
        }
        self.frontier.push_children(children);
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
                let mut snapshot = self.snapshot(SearchStatus::Succeeded, false);
                snapshot.path.clone_from(path);
                snapshot.path_cost = Some(*cost);
                snapshot
            }
            StepOutcome::Failed | StepOutcome::Continue => {
                self.snapshot(SearchStatus::Failed, false)
            }
        }
    }

    fn readout(&self, index: usize) -> Option<CostReadout> {
        if !self.strategy.is_cost_aware() {
            return None;
        }
        let g = self.table.entry(index).g;
        let h = self.graph.node_at(index).heuristic();
        Some(CostReadout {
            node: self.graph.node_at(index).id(),
            g,
            h,
            f: self.strategy.priority(g, h),
        })
    }

    /// Live frontier in expansion order, each node once.
    fn frontier_ids(&self) -> Vec<NodeId> {
        let mut listed = vec![false; self.graph.len()];
        self.frontier
            .expansion_order()
            .into_iter()
            .filter(|&i| {
                self.table.tag(i) == NodeTag::Frontier && !std::mem::replace(&mut listed[i], true)
            })
            .map(|i| self.graph.node_at(i).id())
            .collect()
    }

    fn snapshot(&self, status: SearchStatus, boundary: bool) -> Snapshot {
        Snapshot {
            frontier: self.frontier_ids(),
            visited: self.visited.clone(),
            traversal: self.visited.clone(),
            path: Vec::new(),
            path_cost: None,
            status,
            current: self.current,
            meeting_node: None,
            iteration: self.iteration.map(|depth_limit| IterationMark {
                depth_limit,
                boundary,
            }),
            node_tags: self.table.tags(),
        }
    }
}

impl SearchProcess for FrontierSearch {
    fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    fn initial_snapshot(&self) -> Snapshot {
        self.snapshot(SearchStatus::Running, true)
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
            Phase::Expand(candidate) => self.expand(candidate),
        }
    }

    fn nodes_explored(&self) -> usize {
        self.visited.len()
    }
}
