//! Task validation: graph, source, goals, strategy and parameters.

use std::sync::Arc;

use trailscope_kernel::graph::{Graph, NodeId};

use crate::bidirectional::BidirectionalSearch;
use crate::contract::SearchProcess;
use crate::deepening::DeepeningSearch;
use crate::error::ConfigurationError;
use crate::params::SearchParams;
use crate::search::FrontierSearch;
use crate::strategy::StrategyKind;

/// Unvalidated request to run a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub source: Option<NodeId>,
    pub goals: Vec<NodeId>,
    pub strategy: StrategyKind,
    pub params: SearchParams,
}

impl TaskSpec {
    /// Spec with default parameters.
    #[must_use]
    pub fn new(
        source: NodeId,
        goals: impl IntoIterator<Item = NodeId>,
        strategy: StrategyKind,
    ) -> Self {
        Self {
            source: Some(source),
            goals: goals.into_iter().collect(),
            strategy,
            params: SearchParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }
}

/// A validated task bound to its graph.
///
/// Construction is the only place configuration is checked; once a
/// `SearchTask` exists, every run it spawns is well-formed.
#[derive(Debug, Clone)]
pub struct SearchTask {
    graph: Arc<Graph>,
    source: NodeId,
    goals: Vec<NodeId>,
    strategy: StrategyKind,
    params: SearchParams,
    source_index: usize,
    goal_indices: Vec<usize>,
}

impl SearchTask {
    /// Validate `spec` against `graph`.
    ///
    /// Checks run in a fixed order: empty graph, missing or unknown source,
    /// empty goal set, unknown goals, then the depth parameter the strategy
    /// reads. Duplicate goals are collapsed, keeping first occurrence.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    pub fn new(graph: Arc<Graph>, spec: TaskSpec) -> Result<Self, ConfigurationError> {
        if graph.is_empty() {
            return Err(ConfigurationError::EmptyGraph);
        }
        let source = spec.source.ok_or(ConfigurationError::MissingSource)?;
        let source_index = graph
            .index_of(source)
            .ok_or(ConfigurationError::UnknownSource(source))?;
        if spec.goals.is_empty() {
            return Err(ConfigurationError::EmptyGoalSet);
        }

        let mut goals = Vec::with_capacity(spec.goals.len());
        let mut goal_indices = Vec::with_capacity(spec.goals.len());
        for goal in spec.goals {
            let index = graph
                .index_of(goal)
                .ok_or(ConfigurationError::UnknownGoal(goal))?;
            if !goal_indices.contains(&index) {
                goals.push(goal);
                goal_indices.push(index);
            }
        }
        spec.params.validate_for(spec.strategy)?;

        Ok(Self {
            graph,
            source,
            goals,
            strategy: spec.strategy,
            params: spec.params,
            source_index,
            goal_indices,
        })
    }

    #[must_use]
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Goals in first-declared order, without duplicates.
    #[must_use]
    pub fn goals(&self) -> &[NodeId] {
        &self.goals
    }

    #[must_use]
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    #[must_use]
    pub fn params(&self) -> SearchParams {
        self.params
    }

    #[must_use]
    pub fn is_goal(&self, id: NodeId) -> bool {
        self.goals.contains(&id)
    }

    /// A fresh process for this task, positioned before its first step.
    #[must_use]
    pub fn spawn(&self) -> Box<dyn SearchProcess> {
        let graph = Arc::clone(&self.graph);
        match self.strategy {
            StrategyKind::Bidirectional => Box::new(BidirectionalSearch::new(
                graph,
                self.source_index,
                &self.goal_indices,
            )),
            StrategyKind::IterativeDeepening => Box::new(DeepeningSearch::new(
                graph,
                self.source_index,
                &self.goal_indices,
                self.params.max_depth().unwrap_or(0),
            )),
            strategy => Box::new(FrontierSearch::new(
                graph,
                strategy,
                self.source_index,
                &self.goal_indices,
                self.params.depth_limit().unwrap_or(0),
            )),
        }
    }
}
