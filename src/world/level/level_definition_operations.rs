//! Level Definition Operations - Pure DOP Functions

use super::level_definition_data::{DefinitionPlacements, LevelDefinition};
use crate::error::{EngineError, EngineResult};
use crate::world::core::{LevelVoxel, VoxelId, AIR_VOXEL_ID};
use cgmath::Point3;

/// Create an all-air level with no placements
pub fn create_level_definition(
    width: usize,
    height: usize,
    depth: usize,
) -> EngineResult<LevelDefinition> {
    if width == 0 || height == 0 || depth == 0 {
        return Err(EngineError::ValidationFailed(format!(
            "level dimensions must be non-zero, got {}x{}x{}",
            width, height, depth
        )));
    }

    Ok(LevelDefinition {
        width,
        height,
        depth,
        voxels: vec![AIR_VOXEL_ID; width * height * depth],
        entities: Vec::new(),
        locks: Vec::new(),
        triggers: Vec::new(),
        transitions: Vec::new(),
        building_names: Vec::new(),
    })
}

fn level_index(level: &LevelDefinition, x: i32, y: i32, z: i32) -> Option<usize> {
    let in_bounds = x >= 0
        && y >= 0
        && z >= 0
        && (x as usize) < level.width
        && (y as usize) < level.height
        && (z as usize) < level.depth;
    in_bounds.then(|| {
        x as usize + (y as usize * level.width) + (z as usize * level.width * level.height)
    })
}

/// Voxel ID at a position, air outside the level
pub fn get_level_voxel(level: &LevelDefinition, x: i32, y: i32, z: i32) -> VoxelId {
    level_index(level, x, y, z)
        .map(|index| level.voxels[index])
        .unwrap_or(AIR_VOXEL_ID)
}

pub fn set_level_voxel(
    level: &mut LevelDefinition,
    x: i32,
    y: i32,
    z: i32,
    id: VoxelId,
) -> EngineResult<()> {
    let index = level_index(level, x, y, z).ok_or(EngineError::VoxelOutOfBounds {
        pos: (x, y, z),
        dims: (level.width, level.height, level.depth),
    })?;
    level.voxels[index] = id;
    Ok(())
}

fn push_placement<P>(list: &mut Vec<DefinitionPlacements<P>>, def_id: usize, position: P) {
    match list.iter_mut().find(|placements| placements.def_id == def_id) {
        Some(placements) => placements.positions.push(position),
        None => list.push(DefinitionPlacements {
            def_id,
            positions: vec![position],
        }),
    }
}

pub fn add_entity_placement(level: &mut LevelDefinition, def_id: usize, position: Point3<f64>) {
    push_placement(&mut level.entities, def_id, position);
}

pub fn add_lock_placement(level: &mut LevelDefinition, def_id: usize, position: LevelVoxel) {
    push_placement(&mut level.locks, def_id, position);
}

pub fn add_trigger_placement(level: &mut LevelDefinition, def_id: usize, position: LevelVoxel) {
    push_placement(&mut level.triggers, def_id, position);
}

pub fn add_transition_placement(level: &mut LevelDefinition, def_id: usize, position: LevelVoxel) {
    push_placement(&mut level.transitions, def_id, position);
}

pub fn add_building_name_placement(
    level: &mut LevelDefinition,
    name_id: usize,
    position: LevelVoxel,
) {
    push_placement(&mut level.building_names, name_id, position);
}

/// Definition ID placed at a voxel, if any
pub fn find_placement_at(
    list: &[DefinitionPlacements<LevelVoxel>],
    position: LevelVoxel,
) -> Option<usize> {
    list.iter()
        .find(|placements| placements.positions.contains(&position))
        .map(|placements| placements.def_id)
}

/// Total number of positions across every definition in the list
pub fn placement_count<P>(list: &[DefinitionPlacements<P>]) -> usize {
    list.iter().map(|placements| placements.positions.len()).sum()
}
