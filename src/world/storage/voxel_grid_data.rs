//! Voxel Grid Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in voxel_grid_operations.rs

use crate::world::core::{VoxelDefinition, VoxelId};

/// Dense voxel grid plus its definition catalog.
///
/// Voxels are stored X fastest, then Y, then Z. `definitions[0]` is always
/// air. `voxel_height` scales the Y axis; it is 1.0 for most levels.
#[derive(Clone, Debug)]
pub struct VoxelGridData {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub voxel_height: f64,
    pub voxels: Vec<VoxelId>,
    pub definitions: Vec<VoxelDefinition>,
}
