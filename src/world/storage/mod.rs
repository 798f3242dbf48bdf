//! Voxel storage
//!
//! The dense grid the renderer walks. Built from a LevelDefinition once per
//! level load and read-only while rendering.

pub mod voxel_grid_data;
pub mod voxel_grid_operations;

pub use voxel_grid_data::VoxelGridData;
pub use voxel_grid_operations::{
    add_voxel_definition, create_voxel_grid, get_voxel, get_voxel_definition, is_in_bounds,
    set_voxel, voxel_count, voxel_index,
};
