//! Level definitions
//!
//! `LevelDefinition` is one level's voxel IDs plus placements.
//! `LevelInfoDefinition` holds the catalogs those IDs point into, shared by
//! every level built in the same generation call.

pub mod definitions;
pub mod level_definition_data;
pub mod level_definition_operations;
pub mod level_info_data;
pub mod level_info_operations;

pub use definitions::{
    DoodadDefinition, EntityCapability, EntityDefinition, EntityKind, InteriorGenInfo,
    LockDefinition, TransitionDefinition, TriggerDefinition, TriggerText,
};
pub use level_definition_data::{DefinitionPlacements, LevelDefinition};
pub use level_definition_operations::{
    add_building_name_placement, add_entity_placement, add_lock_placement,
    add_transition_placement, add_trigger_placement, create_level_definition, find_placement_at,
    get_level_voxel, placement_count, set_level_voxel,
};
pub use level_info_data::LevelInfoDefinition;
pub use level_info_operations::{
    add_building_name, add_entity_def, add_lock_def, add_transition_def, add_trigger_def,
    add_voxel_def, create_level_info, get_building_name, get_entity_def, get_lock_def,
    get_transition_def, get_trigger_def, get_voxel_def, set_building_name_override,
};
