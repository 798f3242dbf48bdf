//! Wilderness generation
//!
//! Each distinct wild block becomes one level; the chunk grid then refers to
//! those levels by index. Building names are chunk-specific even when two
//! chunks share a level, so they are generated per grid cell afterwards.

use super::building_names::{generate_wild_chunk_building_names, WildChunkBuildingNameInfo};
use super::generation_caches::GenerationCaches;
use super::layer_reader::{level_height, read_flor, read_map1, read_map2, GenerationContext};
use crate::constants::generation::{WILD_CHUNK_DIM, WILD_CITY_BLOCK_FIRST, WILD_CITY_BLOCK_LAST};
use crate::error::EngineResult;
use crate::legacy::{LegacyLevel, TileLayer};
use crate::world::core::{LevelVoxel2, WorldType};
use crate::world::error::GenerationError;
use crate::world::level::{create_level_definition, create_level_info, LevelDefinition, LevelInfoDefinition};

/// Replaces the placeholder layout of wild blocks 1..=4 with the home
/// city's own surroundings.
pub trait WildCityBlockReviser {
    fn revise_city_block(
        &self,
        block_id: u16,
        flor: &mut TileLayer,
        map1: &mut TileLayer,
        map2: &mut TileLayer,
    ) -> EngineResult<()>;
}

/// Which level each wilderness chunk uses, row-major with X fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildLevelGrid {
    pub width: usize,
    pub depth: usize,
    pub level_indices: Vec<usize>,
}

impl WildLevelGrid {
    pub fn level_index(&self, x: usize, z: usize) -> Option<usize> {
        if x < self.width && z < self.depth {
            self.level_indices.get(x + z * self.width).copied()
        } else {
            None
        }
    }
}

/// Inputs for one wilderness.
#[derive(Debug, Clone, Copy)]
pub struct WildGenInfo<'a> {
    /// One level per entry, in order.
    pub unique_block_ids: &'a [u16],
    pub level_grid: &'a WildLevelGrid,
}

#[derive(Debug, Clone)]
pub struct GeneratedWilderness {
    pub levels: Vec<LevelDefinition>,
    pub info: LevelInfoDefinition,
    /// Only chunks that contain a named building.
    pub building_name_infos: Vec<WildChunkBuildingNameInfo>,
}

fn is_city_block(block_id: u16) -> bool {
    (WILD_CITY_BLOCK_FIRST..=WILD_CITY_BLOCK_LAST).contains(&block_id)
}

fn wild_block<'a>(chunks: &'a [LegacyLevel], block_id: u16) -> EngineResult<&'a LegacyLevel> {
    let chunk = (block_id as usize)
        .checked_sub(1)
        .and_then(|index| chunks.get(index))
        .ok_or(GenerationError::MissingWildBlock(block_id))?;
    chunk.expect_dimensions(WILD_CHUNK_DIM, WILD_CHUNK_DIM, &format!("wild block {}", block_id))?;
    Ok(chunk)
}

fn generate_wild_level(
    block_id: u16,
    chunks: &[LegacyLevel],
    reviser: Option<&dyn WildCityBlockReviser>,
    ctx: &GenerationContext,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<LevelDefinition> {
    let source = wild_block(chunks, block_id)?;
    let mut flor = source.flor.clone();
    let mut map1 = source.map1.clone();
    let mut map2 = source
        .map2
        .clone()
        .unwrap_or_else(|| TileLayer::new(WILD_CHUNK_DIM, WILD_CHUNK_DIM));

    if is_city_block(block_id) {
        match reviser {
            Some(reviser) => reviser.revise_city_block(block_id, &mut flor, &mut map1, &mut map2)?,
            None => log::warn!(
                "[wilderness::generate_wild_level] No city block reviser, block {} keeps its placeholder",
                block_id
            ),
        }
    }

    let temp = LegacyLevel {
        flor,
        map1,
        map2: Some(map2),
        locks: Vec::new(),
        triggers: Vec::new(),
    };
    temp.expect_dimensions(WILD_CHUNK_DIM, WILD_CHUNK_DIM, "revised wild block")?;

    let mut level = create_level_definition(WILD_CHUNK_DIM, level_height(&temp), WILD_CHUNK_DIM)?;
    read_flor(&temp.flor, ctx, &mut level, info, caches)?;
    read_map1(&temp.map1, ctx, &mut level, info, caches)?;
    if let Some(map2) = &temp.map2 {
        read_map2(map2, ctx, &mut level, info, caches)?;
    }
    Ok(level)
}

/// Generate every distinct wilderness level, then name buildings chunk by
/// chunk. `chunks[id - 1]` is the 64x64 layout of wild block `id`.
pub fn generate_wilderness(
    gen_info: &WildGenInfo,
    chunks: &[LegacyLevel],
    reviser: Option<&dyn WildCityBlockReviser>,
    ctx: &GenerationContext,
) -> EngineResult<GeneratedWilderness> {
    let ctx = GenerationContext {
        world_type: WorldType::Wilderness,
        interior_type: None,
        ruler_is_male: None,
        ..*ctx
    };
    let grid = gen_info.level_grid;
    if grid.level_indices.len() != grid.width * grid.depth {
        return Err(GenerationError::InvalidLayout(format!(
            "wild level grid {}x{} has {} entries",
            grid.width,
            grid.depth,
            grid.level_indices.len()
        ))
        .into());
    }
    if let Some(&bad) = grid
        .level_indices
        .iter()
        .find(|&&index| index >= gen_info.unique_block_ids.len())
    {
        return Err(GenerationError::InvalidLayout(format!(
            "wild level grid refers to level {} of {}",
            bad,
            gen_info.unique_block_ids.len()
        ))
        .into());
    }

    log::info!(
        "[wilderness::generate_wilderness] {} unique block(s) over a {}x{} chunk grid",
        gen_info.unique_block_ids.len(),
        grid.width,
        grid.depth
    );

    let mut info = create_level_info(ctx.inf.ceiling_scale());
    let mut caches = GenerationCaches::default();
    let levels = gen_info
        .unique_block_ids
        .iter()
        .map(|&block_id| generate_wild_level(block_id, chunks, reviser, &ctx, &mut info, &mut caches))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut building_name_infos = Vec::new();
    for z in 0..grid.depth {
        for x in 0..grid.width {
            let level = match grid.level_index(x, z) {
                Some(index) => &levels[index],
                None => continue,
            };
            let chunk = LevelVoxel2 {
                x: x as i32,
                z: z as i32,
            };
            let names = generate_wild_chunk_building_names(
                chunk,
                level,
                ctx.tables,
                &mut info,
                &mut caches,
            )?;
            if names.has_building_names() {
                building_name_infos.push(names);
            }
        }
    }

    log::debug!(
        "[wilderness::generate_wilderness] {} voxel defs, {} named chunk(s)",
        info.voxel_defs.len(),
        building_name_infos.len()
    );
    Ok(GeneratedWilderness {
        levels,
        info,
        building_name_infos,
    })
}
