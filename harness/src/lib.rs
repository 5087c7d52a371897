//! Trailscope Harness: sample worlds and whole-run orchestration.
//!
//! The harness builds a sample graph, runs a strategy over it through the
//! search layer's stepper, and packages the result as a [`runner::RunReport`].
//!
//! The harness does NOT implement search logic; it delegates to the search
//! crate. Worlds provide graph data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod runner;
pub mod worlds;
