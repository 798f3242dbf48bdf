//! Procedural dungeons
//!
//! Each level is a grid of 32x32 chunks drawn from a pool of 32 layouts
//! (4 tile sets of 8). Reseed points, in order:
//!
//! 1. The caller's generator state is captured as `seed2` before anything
//!    is drawn.
//! 2. Transition cells for every level are drawn from the caller's state.
//! 3. Level `i` reseeds with `seed2 + i`, then draws its tile set and one
//!    chunk per cell in row-major order.

use super::generation_caches::GenerationCaches;
use super::layer_reader::{read_ceiling, read_flor, read_lock, read_map1, read_trigger, GenerationContext};
use crate::constants::generation::{
    DEFAULT_LEVEL_HEIGHT, DUNGEON_CHUNKS_PER_TILE_SET, DUNGEON_CHUNK_DIM, DUNGEON_CHUNK_POOL_SIZE,
    DUNGEON_PERIMETER_VOXEL, DUNGEON_TILE_SETS, LEVEL_CHANGE_VOXEL_OFFSET,
};
use crate::error::EngineResult;
use crate::legacy::{ArenaRandom, LegacyLevel, LegacyLock, LegacyTrigger, TileLayer};
use crate::world::core::{legacy_to_level_voxel, LegacyVoxel2, LevelVoxel2};
use crate::world::error::GenerationError;
use crate::world::level::{create_level_definition, create_level_info, LevelDefinition, LevelInfoDefinition};

/// Output of one dungeon generation call.
#[derive(Debug, Clone)]
pub struct GeneratedDungeon {
    pub levels: Vec<LevelDefinition>,
    pub info: LevelInfoDefinition,
    /// Player entry point: the first level's *LEVELUP voxel in level axes.
    pub start_point: LevelVoxel2,
    /// Chunk holding the *LEVELUP voxel of each level. Level `i`'s
    /// *LEVELDOWN sits in chunk `i + 1`.
    pub transition_chunks: Vec<LegacyVoxel2>,
}

/// `(z << 8) + x` packing of a chunk coordinate.
pub fn pack_level_change_voxel(x: u32, z: u32) -> u32 {
    (z << 8) + x
}

pub fn unpack_level_change_voxel(packed: u32) -> (u32, u32) {
    (packed & 0xFF, packed >> 8)
}

/// Legacy voxel coordinate of the transition cell inside a chunk.
pub fn offset_level_change_voxel(chunk: u32) -> i32 {
    LEVEL_CHANGE_VOXEL_OFFSET + (DUNGEON_CHUNK_DIM as i32 * chunk as i32)
}

/// MAP1 wall code for a *LEVELUP/*LEVELDOWN marker byte.
pub fn convert_level_change_voxel(byte: u8) -> u16 {
    ((byte as u16) << 8) | byte as u16
}

fn level_change_byte(index: Option<i32>, what: &str) -> u8 {
    let Some(index) = index else {
        log::warn!(
            "[dungeon::level_change_byte] Missing {} in parameter table, using 0",
            what
        );
        return 0;
    };
    match index.checked_add(1).and_then(|byte| u8::try_from(byte).ok()) {
        Some(byte) => byte,
        None => {
            log::warn!(
                "[dungeon::level_change_byte] {} index {} does not fit a wall byte, using 0",
                what,
                index
            );
            0
        }
    }
}

/// Packed transition chunk per level. Consecutive entries always differ.
fn pick_transition_chunks(
    level_count: usize,
    width_chunks: u32,
    depth_chunks: u32,
    random: &mut ArenaRandom,
) -> Vec<u32> {
    let next_block = |random: &mut ArenaRandom| {
        let z = random.next_mod(depth_chunks);
        let x = random.next_mod(width_chunks);
        pack_level_change_voxel(x, z)
    };

    let mut transitions = Vec::with_capacity(level_count);
    transitions.push(next_block(random));
    for _ in 1..level_count {
        let previous = transitions[transitions.len() - 1];
        let mut block = next_block(random);
        while block == previous {
            block = next_block(random);
        }
        transitions.push(block);
    }
    transitions
}

fn validate_dungeon_inputs(
    chunks: &[LegacyLevel],
    level_count: usize,
    width_chunks: usize,
    depth_chunks: usize,
) -> EngineResult<()> {
    if level_count == 0 || width_chunks == 0 || depth_chunks == 0 {
        return Err(GenerationError::InvalidLayout(format!(
            "dungeon needs at least one level and chunk, got {} level(s) of {}x{}",
            level_count, width_chunks, depth_chunks
        ))
        .into());
    }

    // A single chunk cannot hold two distinct consecutive transition cells.
    if width_chunks * depth_chunks == 1 && level_count > 1 {
        return Err(GenerationError::DegenerateDungeon {
            width: width_chunks,
            depth: depth_chunks,
            levels: level_count,
        }
        .into());
    }

    if width_chunks > 0x100 || depth_chunks > 0x100 {
        return Err(GenerationError::InvalidLayout(format!(
            "dungeon of {}x{} chunks exceeds the packed transition range",
            width_chunks, depth_chunks
        ))
        .into());
    }

    if chunks.len() != DUNGEON_CHUNK_POOL_SIZE {
        return Err(GenerationError::ChunkPoolSize {
            expected: DUNGEON_CHUNK_POOL_SIZE,
            found: chunks.len(),
        }
        .into());
    }

    for (index, chunk) in chunks.iter().enumerate() {
        chunk.expect_dimensions(
            DUNGEON_CHUNK_DIM,
            DUNGEON_CHUNK_DIM,
            &format!("dungeon chunk {}", index),
        )?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn generate_dungeon_level(
    chunks: &[LegacyLevel],
    width_chunks: usize,
    depth_chunks: usize,
    level_up_block: u32,
    level_down_block: Option<u32>,
    random: &mut ArenaRandom,
    ctx: &GenerationContext,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<LevelDefinition> {
    let layer_width = DUNGEON_CHUNK_DIM * width_chunks;
    let layer_depth = DUNGEON_CHUNK_DIM * depth_chunks;
    let mut flor = TileLayer::new(layer_width, layer_depth);
    let mut map1 = TileLayer::new(layer_width, layer_depth);
    let mut level = create_level_definition(layer_depth, DEFAULT_LEVEL_HEIGHT, layer_width)?;

    let tile_set = random.next_mod(DUNGEON_TILE_SETS);

    for row in 0..depth_chunks {
        let z_offset = row * DUNGEON_CHUNK_DIM;
        for column in 0..width_chunks {
            let x_offset = column * DUNGEON_CHUNK_DIM;

            let block_index = (tile_set * DUNGEON_CHUNKS_PER_TILE_SET
                + random.next_mod(DUNGEON_CHUNKS_PER_TILE_SET)) as usize;
            let block = &chunks[block_index];
            flor.blit(&block.flor, x_offset, z_offset)?;
            map1.blit(&block.map1, x_offset, z_offset)?;

            for lock in &block.locks {
                let shifted = LegacyLock {
                    x: x_offset as i32 + lock.x,
                    y: z_offset as i32 + lock.y,
                    lock_level: lock.lock_level,
                };
                read_lock(&shifted, &mut level, info, caches);
            }

            for trigger in &block.triggers {
                let shifted = LegacyTrigger {
                    x: x_offset as i32 + trigger.x,
                    y: z_offset as i32 + trigger.y,
                    ..*trigger
                };
                read_trigger(&shifted, ctx, &mut level, info, caches);
            }
        }
    }

    // Top and bottom rows, then the left and right columns between them.
    for x in 0..layer_width {
        map1.set(x, 0, DUNGEON_PERIMETER_VOXEL)?;
        map1.set(x, layer_depth - 1, DUNGEON_PERIMETER_VOXEL)?;
    }
    for z in 1..layer_depth.saturating_sub(1) {
        map1.set(0, z, DUNGEON_PERIMETER_VOXEL)?;
        map1.set(layer_width - 1, z, DUNGEON_PERIMETER_VOXEL)?;
    }

    let stamp = |map1: &mut TileLayer, block: u32, byte: u8| -> EngineResult<()> {
        let (x, z) = unpack_level_change_voxel(block);
        map1.set(
            offset_level_change_voxel(x) as usize,
            offset_level_change_voxel(z) as usize,
            convert_level_change_voxel(byte),
        )
    };

    let up_byte = level_change_byte(ctx.inf.level_up_index, "*LEVELUP");
    stamp(&mut map1, level_up_block, up_byte)?;
    if let Some(down_block) = level_down_block {
        let down_byte = level_change_byte(ctx.inf.level_down_index, "*LEVELDOWN");
        stamp(&mut map1, down_block, down_byte)?;
    }

    read_flor(&flor, ctx, &mut level, info, caches)?;
    read_map1(&map1, ctx, &mut level, info, caches)?;
    if !ctx.inf.ceiling.outdoor_dungeon {
        read_ceiling(ctx, &mut level, info, caches)?;
    }

    Ok(level)
}

/// Generate `level_count` dungeon levels from the 32-layout chunk pool.
///
/// `random` carries the caller's state in and is left wherever the last
/// level's chunk picks end.
pub fn generate_dungeon(
    chunks: &[LegacyLevel],
    level_count: usize,
    width_chunks: usize,
    depth_chunks: usize,
    random: &mut ArenaRandom,
    ctx: &GenerationContext,
) -> EngineResult<GeneratedDungeon> {
    validate_dungeon_inputs(chunks, level_count, width_chunks, depth_chunks)?;

    log::info!(
        "[dungeon::generate_dungeon] {} level(s) of {}x{} chunks, seed {:#010X}",
        level_count,
        width_chunks,
        depth_chunks,
        random.seed()
    );

    let seed2 = random.seed();
    let transitions =
        pick_transition_chunks(level_count, width_chunks as u32, depth_chunks as u32, random);

    let mut info = create_level_info(ctx.inf.ceiling_scale());
    let mut caches = GenerationCaches::default();
    let mut levels = Vec::with_capacity(level_count);

    for i in 0..level_count {
        random.srand(seed2.wrapping_add(i as u32));
        let level_up_block = transitions[i];
        // No *LEVELDOWN on the lowest level.
        let level_down_block = transitions.get(i + 1).copied();

        levels.push(generate_dungeon_level(
            chunks,
            width_chunks,
            depth_chunks,
            level_up_block,
            level_down_block,
            random,
            ctx,
            &mut info,
            &mut caches,
        )?);
    }

    let (first_x, first_z) = unpack_level_change_voxel(transitions[0]);
    let start_point = legacy_to_level_voxel(LegacyVoxel2 {
        x: offset_level_change_voxel(first_x),
        y: offset_level_change_voxel(first_z),
    });

    let transition_chunks = transitions
        .iter()
        .map(|&packed| {
            let (x, z) = unpack_level_change_voxel(packed);
            LegacyVoxel2 {
                x: x as i32,
                y: z as i32,
            }
        })
        .collect();

    Ok(GeneratedDungeon {
        levels,
        info,
        start_point,
        transition_chunks,
    })
}
