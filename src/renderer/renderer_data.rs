//! Software Renderer Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in renderer_operations.rs

use super::texture_cache_data::TextureCacheData;
use crate::camera::CameraData;
use crate::thread_pool::RenderThreadPool;
use crate::world::core::{FaceAxis, LevelVoxel, VoxelId};

/// Outcome of one 3D-DDA traversal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCastResult {
    pub hit: bool,
    /// Air on a miss
    pub voxel_id: VoxelId,
    pub voxel: LevelVoxel,
    pub face_axis: FaceAxis,
    /// Infinite on a miss
    pub distance: f64,
    pub u: f64,
    pub v: f64,
    /// The ray ended inside the voxel it started in
    pub back_face: bool,
    pub ray_moving_up: bool,
}

/// CPU renderer state. `pixels` is row-major 0x00RRGGBB, exactly
/// width * height entries.
#[derive(Debug)]
pub struct SoftwareRendererData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
    pub textures: TextureCacheData,
    pub camera: CameraData,
    pub fog_color: [f64; 3],
    pub thread_pool: RenderThreadPool,
}
