//! Voxel Grid Operations - Pure DOP Functions
//!
//! Reads outside the grid return air. Writes outside the grid, or writes of
//! IDs the catalog does not hold, are structural errors.

use super::voxel_grid_data::VoxelGridData;
use crate::error::{EngineError, EngineResult};
use crate::world::core::{VoxelDefinition, VoxelId, AIR_VOXEL_ID};

/// Create an all-air grid whose catalog holds only the air definition
pub fn create_voxel_grid(
    width: usize,
    height: usize,
    depth: usize,
    voxel_height: f64,
) -> EngineResult<VoxelGridData> {
    if width == 0 || height == 0 || depth == 0 {
        return Err(EngineError::ValidationFailed(format!(
            "voxel grid dimensions must be non-zero, got {}x{}x{}",
            width, height, depth
        )));
    }

    if !(voxel_height.is_finite() && voxel_height > 0.0) {
        return Err(EngineError::ValidationFailed(format!(
            "voxel height must be positive, got {}",
            voxel_height
        )));
    }

    Ok(VoxelGridData {
        width,
        height,
        depth,
        voxel_height,
        voxels: vec![AIR_VOXEL_ID; width * height * depth],
        definitions: vec![VoxelDefinition::Air],
    })
}

/// Append a definition to the catalog and return its ID
pub fn add_voxel_definition(
    grid: &mut VoxelGridData,
    definition: VoxelDefinition,
) -> EngineResult<VoxelId> {
    let id = grid.definitions.len();
    if id > VoxelId::MAX as usize {
        return Err(EngineError::CatalogFull {
            kind: "voxel".to_string(),
            max: VoxelId::MAX as usize + 1,
        });
    }

    grid.definitions.push(definition);
    Ok(id as VoxelId)
}

/// Calculate voxel index from 3D coordinates
pub fn voxel_index(grid: &VoxelGridData, x: usize, y: usize, z: usize) -> usize {
    x + (y * grid.width) + (z * grid.width * grid.height)
}

/// Check if coordinates are within grid bounds
pub fn is_in_bounds(grid: &VoxelGridData, x: i32, y: i32, z: i32) -> bool {
    x >= 0
        && y >= 0
        && z >= 0
        && (x as usize) < grid.width
        && (y as usize) < grid.height
        && (z as usize) < grid.depth
}

/// Get voxel ID at position, air outside the grid
pub fn get_voxel(grid: &VoxelGridData, x: i32, y: i32, z: i32) -> VoxelId {
    if is_in_bounds(grid, x, y, z) {
        grid.voxels[voxel_index(grid, x as usize, y as usize, z as usize)]
    } else {
        AIR_VOXEL_ID
    }
}

/// Set voxel ID at position
pub fn set_voxel(grid: &mut VoxelGridData, x: i32, y: i32, z: i32, id: VoxelId) -> EngineResult<()> {
    if !is_in_bounds(grid, x, y, z) {
        return Err(EngineError::VoxelOutOfBounds {
            pos: (x, y, z),
            dims: (grid.width, grid.height, grid.depth),
        });
    }

    if id as usize >= grid.definitions.len() {
        return Err(EngineError::DefinitionOutOfRange {
            kind: "voxel".to_string(),
            id: id as usize,
            count: grid.definitions.len(),
        });
    }

    let index = voxel_index(grid, x as usize, y as usize, z as usize);
    grid.voxels[index] = id;
    Ok(())
}

/// Look up a definition by ID
pub fn get_voxel_definition(grid: &VoxelGridData, id: VoxelId) -> EngineResult<&VoxelDefinition> {
    grid.definitions
        .get(id as usize)
        .ok_or_else(|| EngineError::DefinitionOutOfRange {
            kind: "voxel".to_string(),
            id: id as usize,
            count: grid.definitions.len(),
        })
}

/// Total number of cells
pub fn voxel_count(grid: &VoxelGridData) -> usize {
    grid.voxels.len()
}
