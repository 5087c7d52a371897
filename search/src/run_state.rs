//! Per-run bookkeeping, kept apart from the graph.
//!
//! The graph is immutable and shared; everything a run learns about a node
//! (its tag, the parent it was reached from, its accumulated cost) lives in a
//! [`RunStateTable`] owned by that run and indexed by arena position. Parent
//! links are arena indices, so path reconstruction never touches shared
//! mutable state.

use strum::IntoStaticStr;
use trailscope_kernel::graph::Cost;

/// Visit tag of a node within one run.
///
/// Tags are ordered and only ever move forward:
/// `Unvisited < Frontier < Visited`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NodeTag {
    #[default]
    Unvisited,
    Frontier,
    Visited,
}

/// Run state of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStateEntry {
    pub tag: NodeTag,
    /// Arena index of the node this one was reached from (`None` for roots).
    pub parent: Option<usize>,
    /// Accumulated cost: edge weights for cost-aware strategies, hops otherwise.
    pub g: Cost,
    /// `g + h`, present only for cost-aware strategies.
    pub f: Option<Cost>,
}

/// Arena of [`RunStateEntry`] values, one per graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStateTable {
    entries: Vec<RunStateEntry>,
}

impl RunStateTable {
    /// A table with every node untouched.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![RunStateEntry::default(); len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at arena `index`. Out-of-range indices read as untouched.
    #[must_use]
    pub fn entry(&self, index: usize) -> RunStateEntry {
        self.entries.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn tag(&self, index: usize) -> NodeTag {
        self.entry(index).tag
    }

    /// Whether the run has reached `index` at all (frontier or visited).
    #[must_use]
    pub fn is_reached(&self, index: usize) -> bool {
        self.tag(index) != NodeTag::Unvisited
    }

    /// Record a route to `index` and tag it as frontier.
    ///
    /// Called for first discovery and for a cheaper rediscovery of a node
    /// still on the frontier. Visited nodes are final and are left alone.
    pub fn discover(&mut self, index: usize, parent: Option<usize>, g: Cost, f: Option<Cost>) {
        if let Some(entry) = self.entries.get_mut(index) {
            if entry.tag == NodeTag::Visited {
                return;
            }
            *entry = RunStateEntry {
                tag: NodeTag::Frontier,
                parent,
                g,
                f,
            };
        }
    }

    /// Tag `index` as visited (selected for expansion).
    pub fn mark_visited(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.tag = NodeTag::Visited;
        }
    }

    /// Every tag, in arena order.
    #[must_use]
    pub fn tags(&self) -> Vec<NodeTag> {
        self.entries.iter().map(|e| e.tag).collect()
    }

    /// Arena indices from `index` back to its root, following parent links.
    ///
    /// Parent links always point at nodes reached earlier, so the chain is
    /// acyclic; the walk is still bounded by the table length.
    #[must_use]
    pub fn parent_chain(&self, index: usize) -> Vec<usize> {
        let mut chain = vec![index];
        let mut cursor = self.entry(index).parent;
        while let Some(parent) = cursor {
            if chain.len() > self.entries.len() {
                break;
            }
            chain.push(parent);
            cursor = self.entry(parent).parent;
        }
        chain
    }
}
