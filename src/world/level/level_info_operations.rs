//! Level Info Operations - Pure DOP Functions
//!
//! Catalog appends return the new definition ID. Lookups past the end of a
//! catalog are structural errors.

use super::definitions::{
    EntityDefinition, LockDefinition, TransitionDefinition, TriggerDefinition,
};
use super::level_info_data::LevelInfoDefinition;
use crate::error::{EngineError, EngineResult};
use crate::world::core::{VoxelDefinition, VoxelId};
use rustc_hash::FxHashMap;

/// Catalogs holding only the air voxel
pub fn create_level_info(ceiling_height: f64) -> LevelInfoDefinition {
    LevelInfoDefinition {
        voxel_defs: vec![VoxelDefinition::Air],
        entity_defs: Vec::new(),
        lock_defs: Vec::new(),
        trigger_defs: Vec::new(),
        transition_defs: Vec::new(),
        building_names: Vec::new(),
        building_name_overrides: FxHashMap::default(),
        ceiling_height,
    }
}

pub fn add_voxel_def(
    info: &mut LevelInfoDefinition,
    definition: VoxelDefinition,
) -> EngineResult<VoxelId> {
    let id = info.voxel_defs.len();
    if id > VoxelId::MAX as usize {
        return Err(EngineError::CatalogFull {
            kind: "voxel".to_string(),
            max: VoxelId::MAX as usize + 1,
        });
    }
    info.voxel_defs.push(definition);
    Ok(id as VoxelId)
}

pub fn add_entity_def(info: &mut LevelInfoDefinition, definition: EntityDefinition) -> usize {
    info.entity_defs.push(definition);
    info.entity_defs.len() - 1
}

pub fn add_lock_def(info: &mut LevelInfoDefinition, definition: LockDefinition) -> usize {
    info.lock_defs.push(definition);
    info.lock_defs.len() - 1
}

pub fn add_trigger_def(info: &mut LevelInfoDefinition, definition: TriggerDefinition) -> usize {
    info.trigger_defs.push(definition);
    info.trigger_defs.len() - 1
}

pub fn add_transition_def(
    info: &mut LevelInfoDefinition,
    definition: TransitionDefinition,
) -> usize {
    info.transition_defs.push(definition);
    info.transition_defs.len() - 1
}

pub fn add_building_name(info: &mut LevelInfoDefinition, name: String) -> usize {
    info.building_names.push(name);
    info.building_names.len() - 1
}

pub fn set_building_name_override(info: &mut LevelInfoDefinition, name_id: usize, name: String) {
    info.building_name_overrides.insert(name_id, name);
}

fn lookup<'a, T>(items: &'a [T], kind: &str, id: usize) -> EngineResult<&'a T> {
    items.get(id).ok_or(EngineError::DefinitionOutOfRange {
        kind: kind.to_string(),
        id,
        count: items.len(),
    })
}

pub fn get_voxel_def(info: &LevelInfoDefinition, id: VoxelId) -> EngineResult<&VoxelDefinition> {
    lookup(&info.voxel_defs, "voxel", id as usize)
}

pub fn get_entity_def(info: &LevelInfoDefinition, id: usize) -> EngineResult<&EntityDefinition> {
    lookup(&info.entity_defs, "entity", id)
}

pub fn get_lock_def(info: &LevelInfoDefinition, id: usize) -> EngineResult<&LockDefinition> {
    lookup(&info.lock_defs, "lock", id)
}

pub fn get_trigger_def(info: &LevelInfoDefinition, id: usize) -> EngineResult<&TriggerDefinition> {
    lookup(&info.trigger_defs, "trigger", id)
}

pub fn get_transition_def(
    info: &LevelInfoDefinition,
    id: usize,
) -> EngineResult<&TransitionDefinition> {
    lookup(&info.transition_defs, "transition", id)
}

/// Display name of a building, honouring overrides
pub fn get_building_name(info: &LevelInfoDefinition, id: usize) -> EngineResult<&str> {
    if let Some(name) = info.building_name_overrides.get(&id) {
        return Ok(name.as_str());
    }
    lookup(&info.building_names, "building name", id).map(String::as_str)
}
