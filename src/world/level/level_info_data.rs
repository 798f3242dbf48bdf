//! Level Info Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in level_info_operations.rs

use super::definitions::{
    EntityDefinition, LockDefinition, TransitionDefinition, TriggerDefinition,
};
use crate::world::core::VoxelDefinition;
use rustc_hash::FxHashMap;

/// Definition catalogs shared by every level of one generation pass.
///
/// `voxel_defs[0]` is always air.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelInfoDefinition {
    pub voxel_defs: Vec<VoxelDefinition>,
    pub entity_defs: Vec<EntityDefinition>,
    pub lock_defs: Vec<LockDefinition>,
    pub trigger_defs: Vec<TriggerDefinition>,
    pub transition_defs: Vec<TransitionDefinition>,
    pub building_names: Vec<String>,
    /// Replaces a generated name, e.g. the main quest temple.
    pub building_name_overrides: FxHashMap<usize, String>,
    /// Ceiling height in voxel units (Arena height / 128).
    pub ceiling_height: f64,
}
