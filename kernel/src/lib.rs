//! Trailscope Kernel: the static, read-only layer of the search visualizer.
//!
//! # API Surface
//!
//! - [`graph`] -- the immutable graph model handed to every search run
//! - [`proof::canon`] -- the single canonical JSON serializer
//! - [`proof::hash`] -- domain-separated content hashing over canonical bytes
//!
//! # Module Dependency Direction
//!
//! `graph` ← `proof`
//!
//! One-way only. `graph` depends on nothing internal; `proof` uses `graph`
//! only to fingerprint graph structure.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod proof;
