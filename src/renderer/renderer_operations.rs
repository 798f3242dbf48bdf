//! Software Renderer Operations - Pure DOP Functions
//!
//! A frame is split into row bands, one per worker. Each worker owns a
//! disjoint slice of the framebuffer and reads the grid, textures and
//! camera basis shared between them.

use super::ray_caster::{cast_ray, shade_ray_result};
use super::renderer_data::SoftwareRendererData;
use super::texture_cache_data::TextureCacheData;
use super::texture_cache_operations::{add_indexed_texture, add_texture, create_texture_cache};
use crate::camera::{build_camera_basis, init_camera, pixel_ray_direction, CameraBasis, CameraData};
use crate::config::EngineConfig;
use crate::constants::render::MAX_RENDER_DIMENSION;
use crate::error::{EngineError, EngineResult};
use crate::thread_pool::{compute_row_bands, create_render_thread_pool};
use crate::world::storage::VoxelGridData;
use cgmath::Point3;
use image::RgbaImage;
use std::path::Path;

/// Pixel value after a resize and before the first frame
pub const CLEAR_PIXEL: u32 = 0x0000_0000;

fn check_resolution(width: u32, height: u32) -> EngineResult<()> {
    let in_range = |value: u32| (1..=MAX_RENDER_DIMENSION).contains(&value);
    if !(in_range(width) && in_range(height)) {
        return Err(EngineError::InvalidConfig {
            field: "resolution".to_string(),
            value: format!("{}x{}", width, height),
            reason: format!("each side must be in 1..={}", MAX_RENDER_DIMENSION),
        });
    }
    Ok(())
}

/// Renderer sized and tuned by `config`. The camera starts at the origin
/// looking down +X with the configured FOV and view distance.
pub fn create_software_renderer(config: &EngineConfig) -> EngineResult<SoftwareRendererData> {
    config.validate().map_err(|e| EngineError::InvalidConfig {
        field: "EngineConfig".to_string(),
        value: format!("{}x{}", config.render_width, config.render_height),
        reason: e.to_string(),
    })?;

    let thread_pool = create_render_thread_pool(config.render_threads)?;
    let camera = CameraData {
        fov_y_degrees: config.fov_y_degrees,
        view_distance: config.view_distance,
        ..init_camera(Point3::new(0.0, 0.0, 0.0))
    };

    log::info!(
        "[renderer::create_software_renderer] {}x{} on {} thread(s)",
        config.render_width,
        config.render_height,
        thread_pool.thread_count
    );

    Ok(SoftwareRendererData {
        width: config.render_width,
        height: config.render_height,
        pixels: vec![CLEAR_PIXEL; config.render_width as usize * config.render_height as usize],
        textures: create_texture_cache(),
        camera,
        fog_color: config.fog_color,
        thread_pool,
    })
}

/// Reallocate the framebuffer. Nothing from the previous frame survives.
pub fn resize_renderer(renderer: &mut SoftwareRendererData, width: u32, height: u32) -> EngineResult<()> {
    check_resolution(width, height)?;

    renderer.width = width;
    renderer.height = height;
    renderer.pixels = vec![CLEAR_PIXEL; width as usize * height as usize];

    log::debug!("[renderer::resize_renderer] Framebuffer now {}x{}", width, height);
    Ok(())
}

/// Replace the camera. The basis is rebuilt at the start of every render.
pub fn set_renderer_camera(renderer: &mut SoftwareRendererData, camera: CameraData) {
    renderer.camera = camera;
}

pub fn add_renderer_texture(
    renderer: &mut SoftwareRendererData,
    id: i32,
    width: usize,
    height: usize,
    pixels: &[u32],
) -> EngineResult<()> {
    add_texture(&mut renderer.textures, id, width, height, pixels)
}

pub fn add_renderer_indexed_texture(
    renderer: &mut SoftwareRendererData,
    id: i32,
    width: usize,
    height: usize,
    indices: &[u8],
    palette: &[u32],
) -> EngineResult<()> {
    add_indexed_texture(&mut renderer.textures, id, width, height, indices, palette)
}

/// Pack a [0, 1] RGB color as 0x00RRGGBB
pub fn pack_color(color: [f64; 3]) -> u32 {
    let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0) as u32;
    (channel(color[0]) << 16) | (channel(color[1]) << 8) | channel(color[2])
}

/// Shared read-only state for one frame
struct FrameContext<'a> {
    grid: &'a VoxelGridData,
    textures: &'a TextureCacheData,
    basis: CameraBasis,
    eye: Point3<f64>,
    view_distance: f64,
    fog_color: [f64; 3],
    width: u32,
    height: u32,
}

fn render_rows(frame: &FrameContext<'_>, first_row: usize, band: &mut [u32]) {
    let width = frame.width as usize;
    for (offset, row) in band.chunks_mut(width).enumerate() {
        let y = (first_row + offset) as u32;
        for (x, pixel) in row.iter_mut().enumerate() {
            let direction = pixel_ray_direction(&frame.basis, x as u32, y, frame.width, frame.height);
            let result = cast_ray(frame.grid, frame.eye, direction, frame.view_distance);
            let color = shade_ray_result(
                &result,
                frame.grid,
                frame.textures,
                frame.view_distance,
                frame.fog_color,
            );
            *pixel = pack_color(color);
        }
    }
}

/// Fill the framebuffer for the current camera. Returns once every band
/// has finished.
pub fn render(renderer: &mut SoftwareRendererData, grid: &VoxelGridData) -> EngineResult<()> {
    let expected = renderer.width as usize * renderer.height as usize;
    if renderer.pixels.len() != expected {
        return Err(EngineError::BufferAccess {
            index: expected,
            size: renderer.pixels.len(),
        });
    }

    let SoftwareRendererData {
        width,
        height,
        pixels,
        textures,
        camera,
        fog_color,
        thread_pool,
    } = renderer;

    let frame = FrameContext {
        grid,
        textures,
        basis: build_camera_basis(camera),
        eye: camera.eye,
        view_distance: camera.view_distance,
        fog_color: *fog_color,
        width: *width,
        height: *height,
    };
    let row_width = *width as usize;
    let bands = compute_row_bands(*height as usize, thread_pool.thread_count);

    thread_pool.pool.scope(|scope| {
        let mut remaining: &mut [u32] = pixels.as_mut_slice();
        for band in &bands {
            let (band_pixels, rest) =
                std::mem::take(&mut remaining).split_at_mut(band.rows.len() * row_width);
            remaining = rest;
            if band_pixels.is_empty() {
                continue;
            }
            let frame = &frame;
            let first_row = band.rows.start;
            scope.spawn(move |_| render_rows(frame, first_row, band_pixels));
        }
    });

    Ok(())
}

/// Framebuffer as 0x00RRGGBB, row-major
pub fn pixels(renderer: &SoftwareRendererData) -> &[u32] {
    &renderer.pixels
}

/// Framebuffer reinterpreted as native-endian bytes for upload or hashing
pub fn pixel_bytes(renderer: &SoftwareRendererData) -> &[u8] {
    bytemuck::cast_slice(&renderer.pixels)
}

/// Copy of the current frame as an opaque RGBA image
pub fn frame_to_image(renderer: &SoftwareRendererData) -> RgbaImage {
    let width = renderer.width;
    RgbaImage::from_fn(renderer.width, renderer.height, |x, y| {
        let pixel = renderer.pixels[(x + y * width) as usize];
        image::Rgba([
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
            0xFF,
        ])
    })
}

/// Write the current frame to an image file; the format follows the extension
pub fn save_frame(renderer: &SoftwareRendererData, path: impl AsRef<Path>) -> EngineResult<()> {
    let path = path.as_ref();
    frame_to_image(renderer)
        .save(path)
        .map_err(|error| EngineError::IoError {
            path: path.display().to_string(),
            error: error.to_string(),
        })?;
    log::info!("[renderer::save_frame] Wrote {}", path.display());
    Ok(())
}
