//! The eight strategy variants and their ordering hooks.
//!
//! A strategy is configuration, not behavior: it names a frontier family and
//! supplies the hooks (`priority`, `step_cost`) the shared expansion loop
//! consults. There is no per-strategy subclass.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use trailscope_kernel::graph::Cost;

/// Strategy selector. Parses from and prints as its short slug.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum StrategyKind {
    #[strum(serialize = "bfs")]
    BreadthFirst,
    #[strum(serialize = "dfs")]
    DepthFirst,
    #[strum(serialize = "dls")]
    DepthLimited,
    #[strum(serialize = "ids")]
    IterativeDeepening,
    #[strum(serialize = "ucs")]
    UniformCost,
    #[strum(serialize = "bidirectional")]
    Bidirectional,
    #[strum(serialize = "greedy")]
    GreedyBestFirst,
    #[strum(serialize = "astar")]
    AStar,
}

/// Expansion-ordering container used by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierFamily {
    /// Dequeue oldest.
    Fifo,
    /// Pop newest.
    Lifo,
    /// Pop newest; entries at the depth limit are leaves.
    DepthBounded,
    /// Pop lowest key; stable on ties.
    Priority,
}

/// Static description of a strategy for an information panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub ordering: &'static str,
    pub complete: &'static str,
    pub optimal: &'static str,
    pub time: &'static str,
    pub space: &'static str,
}

impl StrategyKind {
    /// Frontier family. Iterative deepening reuses the depth-bounded stack and
    /// bidirectional search runs one FIFO queue per side.
    #[must_use]
    pub const fn frontier_family(self) -> FrontierFamily {
        match self {
            Self::BreadthFirst | Self::Bidirectional => FrontierFamily::Fifo,
            Self::DepthFirst => FrontierFamily::Lifo,
            Self::DepthLimited | Self::IterativeDeepening => FrontierFamily::DepthBounded,
            Self::UniformCost | Self::GreedyBestFirst | Self::AStar => FrontierFamily::Priority,
        }
    }

    /// Whether g accumulates edge weights (and snapshots carry g/h/f).
    #[must_use]
    pub const fn is_cost_aware(self) -> bool {
        matches!(
            self,
            Self::UniformCost | Self::GreedyBestFirst | Self::AStar
        )
    }

    #[must_use]
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    #[must_use]
    pub const fn uses_depth_parameter(self) -> bool {
        matches!(self, Self::DepthLimited | Self::IterativeDeepening)
    }

    /// Frontier key for a node with accumulated cost `g` and heuristic `h`.
    ///
    /// Only meaningful for the priority family; other strategies return 0.
    #[must_use]
    pub const fn priority(self, g: Cost, h: Cost) -> Cost {
        match self {
            Self::UniformCost => g,
            Self::GreedyBestFirst => h,
            Self::AStar => g.saturating_add(h),
            _ => Cost::ZERO,
        }
    }

    /// Cost of traversing an edge of `weight`: the weight itself for
    /// cost-aware strategies, one hop otherwise.
    #[must_use]
    pub const fn step_cost(self, weight: Cost) -> Cost {
        if self.is_cost_aware() {
            weight
        } else {
            Cost::ONE
        }
    }

    /// Panel description.
    #[must_use]
    pub const fn info(self) -> StrategyInfo {
        match self {
            Self::BreadthFirst => StrategyInfo {
                name: "Breadth-First Search",
                ordering: "Expands nodes level by level from a FIFO queue.",
                complete: "Yes",
                optimal: "Yes, in edge count",
                time: "O(V + E)",
                space: "O(V)",
            },
            Self::DepthFirst => StrategyInfo {
                name: "Depth-First Search",
                ordering: "Follows one branch as deep as possible from a LIFO stack.",
                complete: "Yes on finite graphs (visited set)",
                optimal: "No",
                time: "O(V + E)",
                space: "O(V)",
            },
            Self::DepthLimited => StrategyInfo {
                name: "Depth-Limited Search",
                ordering: "Depth-first, treating nodes at the depth limit as leaves.",
                complete: "Only if a goal lies within the limit",
                optimal: "No",
                time: "O(b^l)",
                space: "O(l)",
            },
            Self::IterativeDeepening => StrategyInfo {
                name: "Iterative Deepening Search",
                ordering: "Repeats depth-limited search with limits 0, 1, 2, ...",
                complete: "Yes, up to the maximum depth",
                optimal: "Yes on trees, in edge count",
                time: "O(b^d)",
                space: "O(d)",
            },
            Self::UniformCost => StrategyInfo {
                name: "Uniform Cost Search",
                ordering: "Expands the frontier node with the lowest path cost g(n).",
                complete: "Yes",
                optimal: "Yes",
                time: "O(b^(1 + C*/e))",
                space: "O(b^(1 + C*/e))",
            },
            Self::Bidirectional => StrategyInfo {
                name: "Bidirectional Search",
                ordering: "Breadth-first from the source and from the goals until the sides meet.",
                complete: "Yes",
                optimal: "Yes, in edge count",
                time: "O(b^(d/2))",
                space: "O(b^(d/2))",
            },
            Self::GreedyBestFirst => StrategyInfo {
                name: "Greedy Best-First Search",
                ordering: "Expands the frontier node with the lowest heuristic h(n).",
                complete: "Yes on finite graphs (visited set)",
                optimal: "No",
                time: "O(b^m)",
                space: "O(b^m)",
            },
            Self::AStar => StrategyInfo {
                name: "A* Search",
                ordering: "Expands the frontier node with the lowest f(n) = g(n) + h(n).",
                complete: "Yes",
                optimal: "Yes with a consistent heuristic",
                time: "O(b^d)",
                space: "O(b^d)",
            },
        }
    }
}
