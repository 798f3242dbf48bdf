// Arena Engine - voxel world reconstruction of a 1990s first-person RPG
//
// Follows the same data-oriented layout as the rest of the engine family:
// - *_data.rs files hold plain data structures
// - *_operations.rs files hold the free functions that transform them
//
// Two subsystems make up the core:
// - renderer: 3D-DDA software ray caster over a VoxelGridData
// - world::generation: legacy FLOR/MAP1/MAP2 decoding into LevelDefinition catalogs

pub mod constants;
pub mod error;
pub mod config;

pub mod camera;
pub mod legacy;
pub mod renderer;
pub mod thread_pool;
pub mod world;

pub use camera::{CameraBasis, CameraData};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use renderer::{RayCastResult, SoftwareRendererData};
pub use world::core::{VoxelDefinition, VoxelId, WorldType};
pub use world::level::{LevelDefinition, LevelInfoDefinition};
pub use world::storage::VoxelGridData;
