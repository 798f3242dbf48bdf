//! Level runtime overlays
//!
//! Door, fade and chasm-face state for the active level, plus resolution of
//! a LevelDefinition into the grid the renderer walks. None of this mutates
//! the static level data.

pub mod runtime_data;
pub mod runtime_operations;

pub use runtime_data::{ChasmState, DoorAnimation, DoorState, FadeState, LevelRuntimeData};
pub use runtime_operations::{
    build_level_runtime, build_voxel_grid, ceiling_height, chasm_face_count, chasm_face_visible,
    close_door, compute_chasm_state, fade_percent, is_fade_complete, open_door, start_fade,
    update_door, update_fade,
};
