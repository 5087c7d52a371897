//! Frontier containers for the four expansion orderings.
//!
//! The containers are deliberately dumb: they order [`Candidate`] entries and
//! nothing else. Duplicate suppression and staleness are decided by the
//! expansion loop against its [`crate::run_state::RunStateTable`], so a
//! priority frontier may hold several entries for one node (lazy deletion).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use trailscope_kernel::graph::Cost;

use crate::strategy::FrontierFamily;

/// One frontier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Arena index of the node.
    pub index: usize,
    /// Hops from the root of the run that produced it.
    pub depth: u32,
    /// Ordering key for the priority family; ignored elsewhere.
    pub priority: Cost,
}

/// Priority ordering key: `(priority, sequence)`, lower is better.
///
/// `sequence` is the insertion counter, so equal priorities leave in the
/// order they entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityKey {
    pub priority: Cost,
    pub sequence: u64,
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<PriorityKey>` to pop
/// the lowest key first.
#[derive(Debug, Clone)]
pub struct PriorityEntry {
    key: Reverse<PriorityKey>,
    candidate: Candidate,
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PriorityEntry {}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Frontier of one run, in the ordering its strategy requires.
#[derive(Debug, Clone)]
pub enum Frontier {
    /// Oldest first.
    Fifo(VecDeque<Candidate>),
    /// Newest first.
    Lifo(Vec<Candidate>),
    /// Newest first; candidates at `limit` are not expanded further.
    DepthBounded { stack: Vec<Candidate>, limit: u32 },
    /// Lowest key first.
    Priority {
        heap: BinaryHeap<PriorityEntry>,
        next_sequence: u64,
    },
}

impl Frontier {
    /// An empty frontier for `family`. `depth_limit` is read only by the
    /// depth-bounded family.
    #[must_use]
    pub fn new(family: FrontierFamily, depth_limit: u32) -> Self {
        match family {
            FrontierFamily::Fifo => Self::Fifo(VecDeque::new()),
            FrontierFamily::Lifo => Self::Lifo(Vec::new()),
            FrontierFamily::DepthBounded => Self::DepthBounded {
                stack: Vec::new(),
                limit: depth_limit,
            },
            FrontierFamily::Priority => Self::Priority {
                heap: BinaryHeap::new(),
                next_sequence: 0,
            },
        }
    }

    pub fn push(&mut self, candidate: Candidate) {
        match self {
            Self::Fifo(queue) => queue.push_back(candidate),
            Self::Lifo(stack) | Self::DepthBounded { stack, .. } => stack.push(candidate),
            Self::Priority {
                heap,
                next_sequence,
            } => {
                let sequence = *next_sequence;
                *next_sequence += 1;
                heap.push(PriorityEntry {
                    key: Reverse(PriorityKey {
                        priority: candidate.priority,
                        sequence,
                    }),
                    candidate,
                });
            }
        }
    }

    /// Push the children produced by one expansion, given in neighbor
    /// declaration order.
    ///
    /// Stack families push the batch reversed so the first declared child is
    /// popped first.
    pub fn push_children(&mut self, children: Vec<Candidate>) {
        if matches!(self, Self::Lifo(_) | Self::DepthBounded { .. }) {
            for candidate in children.into_iter().rev() {
                self.push(candidate);
            }
        } else {
            for candidate in children {
                self.push(candidate);
            }
        }
    }

    #[must_use]
    pub fn pop(&mut self) -> Option<Candidate> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Lifo(stack) | Self::DepthBounded { stack, .. } => stack.pop(),
            Self::Priority { heap, .. } => heap.pop().map(|e| e.candidate),
        }
    }

    /// Number of entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(queue) => queue.len(),
            Self::Lifo(stack) | Self::DepthBounded { stack, .. } => stack.len(),
            Self::Priority { heap, .. } => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a candidate at `depth` must not be expanded.
    #[must_use]
    pub fn is_leaf_depth(&self, depth: u32) -> bool {
        match self {
            Self::DepthBounded { limit, .. } => depth >= *limit,
            _ => false,
        }
    }

    /// Arena indices in the order they would be popped, stale entries
    /// included.
    #[must_use]
    pub fn expansion_order(&self) -> Vec<usize> {
        match self {
            Self::Fifo(queue) => queue.iter().map(|c| c.index).collect(),
            Self::Lifo(stack) | Self::DepthBounded { stack, .. } => {
                stack.iter().rev().map(|c| c.index).collect()
            }
            Self::Priority { heap, .. } => {
                let mut entries: Vec<&PriorityEntry> = heap.iter().collect();
                entries.sort_by(|a, b| a.key.0.cmp(&b.key.0));
                entries.iter().map(|e| e.candidate.index).collect()
            }
        }
    }
}
