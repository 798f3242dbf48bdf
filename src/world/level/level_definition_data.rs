//! Level Definition Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in level_definition_operations.rs

use crate::world::core::{LevelVoxel, VoxelId};
use cgmath::Point3;

/// Every position one definition is placed at.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionPlacements<P> {
    pub def_id: usize,
    pub positions: Vec<P>,
}

/// One generated level: voxel IDs plus where every other definition sits.
///
/// IDs index the catalogs of the `LevelInfoDefinition` the level was built
/// with. Voxels are stored X fastest, then Y, then Z, like the render grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDefinition {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub voxels: Vec<VoxelId>,
    pub entities: Vec<DefinitionPlacements<Point3<f64>>>,
    pub locks: Vec<DefinitionPlacements<LevelVoxel>>,
    pub triggers: Vec<DefinitionPlacements<LevelVoxel>>,
    pub transitions: Vec<DefinitionPlacements<LevelVoxel>>,
    pub building_names: Vec<DefinitionPlacements<LevelVoxel>>,
}
