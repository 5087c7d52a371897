//! Append-only snapshot history.

use std::sync::Arc;

use trailscope_kernel::proof::canon::CanonError;
use trailscope_kernel::proof::hash::{ContentHash, FramedHasher, HashDomain};

use crate::snapshot::Snapshot;

/// Ordered, append-only list of snapshots for one run.
///
/// Index 0 is the initial snapshot and index `k` the state after `k` steps.
/// Snapshots are shared as `Arc` so views can hold them across further steps.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<Arc<Snapshot>>,
}

impl SnapshotRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot and return its index.
    pub fn record(&mut self, snapshot: impl Into<Arc<Snapshot>>) -> usize {
        self.snapshots.push(snapshot.into());
        self.snapshots.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<Snapshot>> {
        self.snapshots.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Arc<Snapshot>> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<Snapshot>> {
        self.snapshots.iter()
    }

    /// Largest frontier shown in any recorded snapshot.
    #[must_use]
    pub fn peak_frontier(&self) -> usize {
        self.snapshots
            .iter()
            .map(|s| s.frontier.len())
            .max()
            .unwrap_or(0)
    }

    /// Digest over every snapshot's canonical bytes, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if any snapshot fails to serialize.
    pub fn history_digest(&self) -> Result<ContentHash, CanonError> {
        let mut hasher = FramedHasher::new(HashDomain::SnapshotHistory);
        for snapshot in &self.snapshots {
            hasher.frame(&snapshot.to_canonical_json_bytes()?);
        }
        Ok(hasher.finish())
    }
}
