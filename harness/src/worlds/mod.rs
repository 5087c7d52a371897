//! Built-in sample graphs.

pub mod binary_tree;
pub mod grid;
pub mod simple_path;
pub mod weighted_detour;

use crate::contract::SampleWorld;

/// Every built-in world, in picker order.
#[must_use]
pub fn all() -> Vec<Box<dyn SampleWorld>> {
    vec![
        Box::new(simple_path::SimplePath),
        Box::new(binary_tree::BinaryTree),
        Box::new(grid::Grid::default()),
        Box::new(weighted_detour::WeightedDetour),
    ]
}

/// Built-in world with the given id.
#[must_use]
pub fn by_id(world_id: &str) -> Option<Box<dyn SampleWorld>> {
    all().into_iter().find(|w| w.world_id() == world_id)
}
