//! Texture Cache Operations - Pure DOP Functions
//!
//! Source pixels are converted once here so sampling never touches the
//! packed formats.

use super::texture_cache_data::{TextureCacheData, TextureData};
use crate::constants::render::PALETTE_SIZE;
use crate::error::{EngineError, EngineResult};

pub fn create_texture_cache() -> TextureCacheData {
    TextureCacheData::default()
}

/// 0xAARRGGBB to normalized RGBA
pub fn argb_to_rgba(pixel: u32) -> [f64; 4] {
    let channel = |shift: u32| ((pixel >> shift) & 0xFF) as f64 / 255.0;
    [channel(16), channel(8), channel(0), channel(24)]
}

fn check_dimensions(id: i32, width: usize, height: usize, len: usize) -> EngineResult<()> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidTexture {
            id: id.to_string(),
            reason: format!("dimensions {}x{} must be non-zero", width, height),
        });
    }
    if len != width * height {
        return Err(EngineError::InvalidTexture {
            id: id.to_string(),
            reason: format!("expected {} pixels for {}x{}, got {}", width * height, width, height, len),
        });
    }
    Ok(())
}

fn insert_texture(cache: &mut TextureCacheData, id: i32, texture: TextureData) {
    if cache.textures.insert(id, texture).is_some() {
        log::debug!("[texture_cache::insert_texture] Replaced texture {}", id);
    }
}

/// Add a texture from ARGB pixels. Replaces any texture with the same ID.
pub fn add_texture(
    cache: &mut TextureCacheData,
    id: i32,
    width: usize,
    height: usize,
    pixels: &[u32],
) -> EngineResult<()> {
    check_dimensions(id, width, height, pixels.len())?;

    let texels = pixels.iter().map(|&pixel| argb_to_rgba(pixel)).collect();
    insert_texture(cache, id, TextureData { width, height, texels });
    Ok(())
}

/// Add a texture from 8-bit palette indices and a 256-entry ARGB palette
pub fn add_indexed_texture(
    cache: &mut TextureCacheData,
    id: i32,
    width: usize,
    height: usize,
    indices: &[u8],
    palette: &[u32],
) -> EngineResult<()> {
    check_dimensions(id, width, height, indices.len())?;
    if palette.len() != PALETTE_SIZE {
        return Err(EngineError::InvalidTexture {
            id: id.to_string(),
            reason: format!("palette must have {} entries, got {}", PALETTE_SIZE, palette.len()),
        });
    }

    let rgba_palette: Vec<[f64; 4]> = palette.iter().map(|&pixel| argb_to_rgba(pixel)).collect();
    let texels = indices
        .iter()
        .map(|&index| rgba_palette[index as usize])
        .collect();
    insert_texture(cache, id, TextureData { width, height, texels });
    Ok(())
}

pub fn get_texture(cache: &TextureCacheData, id: i32) -> Option<&TextureData> {
    cache.textures.get(&id)
}

pub fn texture_count(cache: &TextureCacheData) -> usize {
    cache.textures.len()
}

/// Nearest texel for u, v in [0, 1). Returns `None` outside that range.
pub fn sample_texture(texture: &TextureData, u: f64, v: f64) -> Option<[f64; 3]> {
    if !((0.0..1.0).contains(&u) && (0.0..1.0).contains(&v)) {
        return None;
    }

    let x = ((u * texture.width as f64) as usize).min(texture.width - 1);
    let y = ((v * texture.height as f64) as usize).min(texture.height - 1);
    let texel = texture.texels[x + y * texture.width];
    Some([texel[0], texel[1], texel[2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_conversion() {
        let rgba = argb_to_rgba(0x80FF0033);
        assert_eq!(rgba[0], 1.0);
        assert_eq!(rgba[1], 0.0);
        assert!((rgba[2] - 0x33 as f64 / 255.0).abs() < 1e-12);
        assert!((rgba[3] - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_add_and_sample_texture() {
        let mut cache = create_texture_cache();
        // 2x2: red, green / blue, white
        let pixels = [0xFFFF0000, 0xFF00FF00, 0xFF0000FF, 0xFFFFFFFF];
        add_texture(&mut cache, 3, 2, 2, &pixels).expect("valid texture");
        assert_eq!(texture_count(&cache), 1);

        let texture = get_texture(&cache, 3).expect("cached");
        assert_eq!(sample_texture(texture, 0.0, 0.0), Some([1.0, 0.0, 0.0]));
        assert_eq!(sample_texture(texture, 0.75, 0.0), Some([0.0, 1.0, 0.0]));
        assert_eq!(sample_texture(texture, 0.25, 0.6), Some([0.0, 0.0, 1.0]));
        assert_eq!(sample_texture(texture, 1.0, 0.5), None);
        assert_eq!(sample_texture(texture, 0.5, -0.01), None);
        assert_eq!(sample_texture(texture, f64::NAN, 0.5), None);
    }

    #[test]
    fn test_indexed_texture_uses_palette() {
        let mut cache = create_texture_cache();
        let mut palette = vec![0u32; PALETTE_SIZE];
        palette[7] = 0xFF00FF00;
        add_indexed_texture(&mut cache, 0, 1, 2, &[7, 0], &palette).expect("valid texture");

        let texture = get_texture(&cache, 0).expect("cached");
        assert_eq!(texture.texels[0], [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(texture.texels[1], [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rejects_bad_textures() {
        let mut cache = create_texture_cache();
        assert!(add_texture(&mut cache, 0, 2, 2, &[0; 3]).is_err());
        assert!(add_texture(&mut cache, 0, 0, 2, &[]).is_err());
        assert!(add_indexed_texture(&mut cache, 0, 1, 1, &[0], &[0; 16]).is_err());
        assert_eq!(texture_count(&cache), 0);
    }
}
