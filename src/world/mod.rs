//! World Module
//!
//! Static level data and the generators that build it.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental data types (VoxelDefinition, positions, world/interior types)
//! - **Storage**: VoxelGridData, the dense grid the renderer walks
//! - **Level**: LevelDefinition placements and the LevelInfoDefinition catalogs
//! - **Generation**: legacy layer decoding for prefab, dungeon, city and wilderness levels
//! - **Runtime**: mutable overlays (doors, fading voxels, chasm faces) kept apart from static data
//!
//! Generation is single-threaded and deterministic. Caches live for one
//! generation call and are never shared between runs.

pub mod core;
pub mod error;
pub mod generation;
pub mod level;
pub mod runtime;
pub mod storage;

// Re-export core types for convenience
pub use core::{
    ChasmKind, DoorKind, Facing, InteriorType, LegacyVoxel2, LevelVoxel, LevelVoxel2,
    VoxelDefinition, VoxelId, WallKind, WorldType, AIR_VOXEL_ID,
};

pub use error::{GenerationError, GenerationResult};
pub use level::{LevelDefinition, LevelInfoDefinition};
pub use storage::VoxelGridData;
