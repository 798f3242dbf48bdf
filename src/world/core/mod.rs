//! Core world data types
//!
//! The voxel definition sum type, grid/legacy coordinates, and the small
//! enums (world type, interior type) that parameterise generation.

mod position;
mod ray;
mod voxel_definition;
mod world_types;

pub use position::{
    level_to_legacy_voxel, legacy_to_level_voxel, LegacyVoxel2, LevelVoxel,
    LevelVoxel2,
};
pub use ray::{FaceAxis, Ray};
pub use voxel_definition::{
    ChasmKind, DoorKind, Facing, VoxelDefinition, VoxelId, WallKind, AIR_VOXEL_ID,
};
pub use world_types::{InteriorType, WorldType};
