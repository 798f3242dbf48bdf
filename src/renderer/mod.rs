//! Software Renderer
//!
//! CPU ray caster over a VoxelGridData. Each frame casts one ray per pixel
//! through the 3D-DDA in `ray_caster`, shades hits from the texture cache
//! and blends them into fog by depth.

pub mod ray_caster;
pub mod renderer_data;
pub mod renderer_operations;
pub mod texture_cache_data;
pub mod texture_cache_operations;

pub use ray_caster::{cast_ray, shade_ray_result};
pub use renderer_data::{RayCastResult, SoftwareRendererData};
pub use renderer_operations::{
    add_renderer_indexed_texture, add_renderer_texture, create_software_renderer, frame_to_image,
    pack_color, pixel_bytes, pixels, render, resize_renderer, save_frame, set_renderer_camera,
    CLEAR_PIXEL,
};
pub use texture_cache_data::{TextureCacheData, TextureData};
pub use texture_cache_operations::{
    add_indexed_texture, add_texture, argb_to_rgba, create_texture_cache, get_texture,
    sample_texture, texture_count,
};
