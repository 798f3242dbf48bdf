//! City generation
//!
//! A city starts from its skeleton layout. Procedural cities then fill a
//! square of blocks with shop, guild and house layouts picked by the city
//! seed; premade cities keep the skeleton as-is. The palace gate run on the
//! city wall is re-oriented, the layers are decoded and every tavern,
//! equipment store and temple is named.

use super::building_names::{generate_city_building_names, CityNameParams, MainQuestTempleOverride};
use super::generation_caches::GenerationCaches;
use super::layer_reader::{level_height, read_flor, read_map1, read_map2, GenerationContext};
use crate::constants::generation::{CITY_BLOCK_DIM, PALACE_GATE_LENGTH};
use crate::error::EngineResult;
use crate::legacy::generation_tables::CITY_BLOCK_TYPE_COUNT;
use crate::legacy::{ArenaRandom, CityGenerationTables, LegacyLevel, TileLayer};
use crate::world::core::{LegacyVoxel2, WorldType};
use crate::world::error::GenerationError;
use crate::world::level::{create_level_definition, create_level_info, LevelDefinition, LevelInfoDefinition};
use rustc_hash::FxHashMap;

/// Where procedural cities get their block layouts, by layout name
/// (`"EQBD1A.MIF"` and so on).
pub trait CityBlockSource {
    fn city_block(&self, name: &str) -> Option<&LegacyLevel>;
}

impl CityBlockSource for FxHashMap<String, LegacyLevel> {
    fn city_block(&self, name: &str) -> Option<&LegacyLevel> {
        self.get(name)
    }
}

/// Everything a city needs beyond the parameter table.
#[derive(Debug, Clone)]
pub struct CityGenInfo {
    pub skeleton: LegacyLevel,
    pub city_seed: u32,
    pub race_id: usize,
    pub is_premade: bool,
    pub coastal: bool,
    /// Plan cells (x + y * blocks_per_side) that keep the skeleton.
    pub reserved_blocks: Vec<usize>,
    /// Legacy column/row of the first block's corner.
    pub block_start_position: LegacyVoxel2,
    pub blocks_per_side: usize,
    pub city_type_name: String,
    pub main_quest_temple_override: Option<MainQuestTempleOverride>,
}

/// Plan cell contents. Block types start at 2 and map to table index - 2.
const PLAN_EMPTY: u8 = 0;
const PLAN_RESERVED: u8 = 1;
const PLAN_FIRST_BLOCK: u8 = 2;

/// Claim a random empty plan cell for `block`. A full plan is logged and the
/// block dropped.
fn place_block(plan: &mut [u8], block: u8, random: &mut ArenaRandom) {
    if !plan.iter().any(|&cell| cell == PLAN_EMPTY) {
        log::warn!(
            "[city::place_block] No empty plan cell for block type {}, skipping",
            block
        );
        return;
    }

    loop {
        let index = random.next_mod(plan.len() as u32) as usize;
        if plan[index] == PLAN_EMPTY {
            plan[index] = block;
            return;
        }
    }
}

/// Block type for a roll in 0..100 against the cumulative chances.
fn block_for_roll(roll: u32, chances: &[u32; CITY_BLOCK_TYPE_COUNT]) -> u8 {
    let mut total = 0;
    for (index, &chance) in chances.iter().enumerate() {
        total += chance;
        if roll < total {
            return PLAN_FIRST_BLOCK + index as u8;
        }
    }
    PLAN_FIRST_BLOCK + (CITY_BLOCK_TYPE_COUNT - 1) as u8
}

/// Block plan for a procedural city: one of each block type first, then
/// every remaining empty cell rolled against the block chances.
pub fn plan_city_blocks(
    blocks_per_side: usize,
    reserved_blocks: &[usize],
    tables: &CityGenerationTables,
    random: &mut ArenaRandom,
) -> Vec<u8> {
    let mut plan = vec![PLAN_EMPTY; blocks_per_side * blocks_per_side];
    for &reserved in reserved_blocks {
        if let Some(cell) = plan.get_mut(reserved) {
            *cell = PLAN_RESERVED;
        }
    }

    for block in PLAN_FIRST_BLOCK..PLAN_FIRST_BLOCK + CITY_BLOCK_TYPE_COUNT as u8 {
        place_block(&mut plan, block, random);
    }

    let empty = plan.iter().filter(|&&cell| cell == PLAN_EMPTY).count();
    for _ in 0..empty {
        let roll = random.next_mod(100);
        place_block(&mut plan, block_for_roll(roll, &tables.block_chances), random);
    }
    plan
}

/// Write the chosen block layouts into the city layers.
#[allow(clippy::too_many_arguments)]
fn write_city_blocks(
    plan: &[u8],
    gen_info: &CityGenInfo,
    tables: &CityGenerationTables,
    source: &dyn CityBlockSource,
    random: &mut ArenaRandom,
    flor: &mut TileLayer,
    map1: &mut TileLayer,
    map2: &mut TileLayer,
) -> EngineResult<()> {
    let side = gen_info.blocks_per_side;
    for y_dim in 0..side {
        for x_dim in 0..side {
            let block = plan[x_dim + y_dim * side];
            if block < PLAN_FIRST_BLOCK {
                continue;
            }
            let type_index = (block - PLAN_FIRST_BLOCK) as usize;

            let rotation =
                &tables.rotations[random.next_mod(tables.rotations.len() as u32) as usize];
            let variation = random
                .next_mod(tables.block_variations[type_index])
                .max(1);
            let name = format!(
                "{}BD{}{}.MIF",
                tables.block_codes[type_index], variation, rotation
            );

            let layout = source
                .city_block(&name)
                .ok_or_else(|| GenerationError::MissingCityBlock(name.clone()))?;
            layout.expect_dimensions(CITY_BLOCK_DIM, CITY_BLOCK_DIM, &name)?;

            let dst_x = (gen_info.block_start_position.x as usize) + x_dim * CITY_BLOCK_DIM;
            let dst_z = (gen_info.block_start_position.y as usize) + y_dim * CITY_BLOCK_DIM;
            flor.blit(&layout.flor, dst_x, dst_z)?;
            map1.blit(&layout.map1, dst_x, dst_z)?;
            if let Some(block_map2) = &layout.map2 {
                map2.blit(block_map2, dst_x, dst_z)?;
            }

            log::trace!(
                "[city::write_city_blocks] {} at ({}, {})",
                name,
                dst_x,
                dst_z
            );
        }
    }
    Ok(())
}

fn is_edge_code(code: u16) -> bool {
    (code & 0xF000) == 0xA000
}

/// Re-orient the palace gate run on the city wall so it faces out of the
/// city on the side it sits on.
///
/// The first edge code found on the perimeter starts the run: rows 0 and
/// last are searched first, then columns 0 and last. Up to four edge codes
/// along that side get that side's facing bits.
pub fn revise_palace_graphics(map1: &mut TileLayer) -> EngineResult<()> {
    let width = map1.width();
    let depth = map1.depth();
    if width == 0 || depth == 0 {
        return Ok(());
    }

    // (start x, start z, step x, step z, facing bits)
    let mut found = None;
    'rows: for x in 0..width {
        for (z, bits) in [(0, 0x0000), (depth - 1, 0x0080)] {
            if is_edge_code(map1.get(x, z)?) {
                found = Some((x, z, 1, 0, bits));
                break 'rows;
            }
        }
    }
    if found.is_none() {
        'columns: for z in 0..depth {
            for (x, bits) in [(0, 0x00C0), (width - 1, 0x0040)] {
                if is_edge_code(map1.get(x, z)?) {
                    found = Some((x, z, 0, 1, bits));
                    break 'columns;
                }
            }
        }
    }

    let (x, z, step_x, step_z, bits) = match found {
        Some(run) => run,
        None => {
            log::debug!("[city::revise_palace_graphics] No palace gate on the perimeter");
            return Ok(());
        }
    };

    for i in 0..PALACE_GATE_LENGTH {
        let (cx, cz) = (x + i * step_x, z + i * step_z);
        if cx >= width || cz >= depth {
            break;
        }
        let code = map1.get(cx, cz)?;
        if is_edge_code(code) {
            map1.set(cx, cz, (code & !0x00C0) | bits)?;
        }
    }
    Ok(())
}

/// Generate a city level.
///
/// `random` starts from the city seed, drives block placement and then
/// continues into building names.
pub fn generate_city(
    gen_info: &CityGenInfo,
    source: &dyn CityBlockSource,
    ctx: &GenerationContext,
) -> EngineResult<(LevelDefinition, LevelInfoDefinition)> {
    let ctx = GenerationContext {
        world_type: WorldType::City,
        interior_type: None,
        ruler_is_male: None,
        ..*ctx
    };
    let tables = &ctx.tables.city_gen;
    tables.validate_names()?;
    if !gen_info.is_premade {
        tables.validate_blocks()?;
    }

    let skeleton = &gen_info.skeleton;
    skeleton.validate()?;
    let mut flor = skeleton.flor.clone();
    let mut map1 = skeleton.map1.clone();
    let mut map2 = skeleton
        .map2
        .clone()
        .unwrap_or_else(|| TileLayer::new(skeleton.width(), skeleton.depth()));

    let mut random = ArenaRandom::new(gen_info.city_seed);

    if !gen_info.is_premade {
        let plan = plan_city_blocks(
            gen_info.blocks_per_side,
            &gen_info.reserved_blocks,
            tables,
            &mut random,
        );
        write_city_blocks(
            &plan, gen_info, tables, source, &mut random, &mut flor, &mut map1, &mut map2,
        )?;
    }

    revise_palace_graphics(&mut map1)?;

    let temp = LegacyLevel {
        flor,
        map1,
        map2: Some(map2),
        locks: Vec::new(),
        triggers: Vec::new(),
    };

    let mut level = create_level_definition(temp.depth(), level_height(&temp), temp.width())?;
    let mut info = create_level_info(ctx.inf.ceiling_scale());
    let mut caches = GenerationCaches::default();

    read_flor(&temp.flor, &ctx, &mut level, &mut info, &mut caches)?;
    read_map1(&temp.map1, &ctx, &mut level, &mut info, &mut caches)?;
    if let Some(map2) = &temp.map2 {
        read_map2(map2, &ctx, &mut level, &mut info, &mut caches)?;
    }

    let params = CityNameParams {
        city_seed: gen_info.city_seed,
        race_id: gen_info.race_id,
        coastal: gen_info.coastal,
        city_type_name: &gen_info.city_type_name,
        temple_override: gen_info.main_quest_temple_override,
    };
    generate_city_building_names(&params, &mut random, ctx.tables, &mut level, &mut info)?;

    log::info!(
        "[city::generate_city] City {:#010X}: {}x{}x{}, {} voxel defs, {} building names",
        gen_info.city_seed,
        level.width,
        level.height,
        level.depth,
        info.voxel_defs.len(),
        info.building_names.len()
    );
    Ok((level, info))
}
