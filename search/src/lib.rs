//! Trailscope Search: step-at-a-time graph search with replayable history.
//!
//! This crate provides the search layer. It depends only on
//! `trailscope_kernel`; it does NOT depend on `trailscope_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! trailscope_kernel  ←  trailscope_search  ←  trailscope_harness
//! (graph, digests)      (runs, snapshots)     (sample graphs, runner)
//! ```
//!
//! # Key types
//!
//! - [`StrategyKind`] -- the eight strategies and their ordering hooks
//! - [`SearchTask`] -- a validated (graph, source, goals, strategy) tuple
//! - [`SearchProcess`] -- one observable step per call
//! - [`Snapshot`] -- immutable per-step state, replayed verbatim
//! - [`Stepper`] -- forward/backward/jump navigation over a run's history
//! - [`RunSummary`] -- end-of-run result with history and graph digests

#![forbid(unsafe_code)]

pub mod bidirectional;
pub mod contract;
pub mod deepening;
pub mod error;
pub mod frontier;
pub mod params;
pub mod path;
pub mod recorder;
pub mod run_state;
pub mod search;
pub mod snapshot;
pub mod stepper;
pub mod strategy;
pub mod summary;
pub mod task;

pub use contract::{SearchProcess, StepOutcome, StepRecord};
pub use error::ConfigurationError;
pub use params::SearchParams;
pub use run_state::NodeTag;
pub use snapshot::{SearchStatus, Snapshot};
pub use stepper::{Advance, CachePolicy, Stepper, StepperConfig};
pub use strategy::StrategyKind;
pub use summary::RunSummary;
pub use task::{SearchTask, TaskSpec};
