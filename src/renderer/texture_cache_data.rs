//! Texture Cache Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in texture_cache_operations.rs

use rustc_hash::FxHashMap;

/// One texture converted to floating-point RGBA at load time.
/// Texels are row-major: index = x + y * width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: usize,
    pub height: usize,
    pub texels: Vec<[f64; 4]>,
}

/// Level-wide texture table keyed by the texture IDs voxel definitions carry
#[derive(Debug, Clone, Default)]
pub struct TextureCacheData {
    pub textures: FxHashMap<i32, TextureData>,
}
