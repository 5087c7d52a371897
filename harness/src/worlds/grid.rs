//! `Grid`: a rows × cols lattice with right and down edges.

use std::sync::Arc;

use trailscope_kernel::graph::{Cost, GraphBuilder, GraphError, NodeId, Position};

use crate::contract::{SampleGraph, SampleWorld};

const SPACING: i64 = 150;
const ORIGIN: (i64, i64) = (200, 150);

/// Lattice with unit edges to the right and downward neighbors.
///
/// Node ids are `row * cols + col`. The source is the top-left corner and
/// the goal the bottom-right corner; the heuristic is the Manhattan distance
/// to the goal in cells, which is exact for this edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: u32,
    pub cols: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self { rows: 3, cols: 3 }
    }
}

impl Grid {
    #[must_use]
    pub fn id_at(&self, row: u32, col: u32) -> NodeId {
        NodeId(row * self.cols + col)
    }
}

impl SampleWorld for Grid {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid"
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn description(&self) -> &str {
        "Lattice with right and down edges, corner to corner"
    }

    fn build(&self) -> Result<SampleGraph, GraphError> {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);
        let grid = Self { rows, cols };

        let mut b = GraphBuilder::new();
        for row in 0..rows {
            for col in 0..cols {
                let id = grid.id_at(row, col);
                let position = Position::new(
                    ORIGIN.0 + i64::from(col) * SPACING,
                    ORIGIN.1 + i64::from(row) * SPACING,
                );
                b.add_node(id, position)?;
                let remaining = (rows - 1 - row) + (cols - 1 - col);
                b.set_heuristic(id, Cost::from(remaining))?;
            }
        }
        for row in 0..rows {
            for col in 0..cols {
                if col + 1 < cols {
                    b.add_edge(grid.id_at(row, col), grid.id_at(row, col + 1), Cost::ONE)?;
                }
                if row + 1 < rows {
                    b.add_edge(grid.id_at(row, col), grid.id_at(row + 1, col), Cost::ONE)?;
                }
            }
        }
        Ok(SampleGraph {
            graph: Arc::new(b.build()),
            source: grid.id_at(0, 0),
            goals: vec![grid.id_at(rows - 1, cols - 1)],
        })
    }
}
