//! Legacy layer readers
//!
//! Walk FLOR/MAP1/MAP2 layers cell by cell, decode each code through the
//! shared caches and write voxel IDs and placements into a level. Legacy
//! cell (column x, row z) lands at level voxel (z, layer y, x).

use super::definition_builders::{
    is_entity_transition, make_den_transition_def, make_entity_def, make_trigger_def,
    make_voxel_transition_def,
};
use super::generation_caches::{CachedTile, EntityKey, GenerationCaches, SourceLayer, TileKey};
use crate::constants::generation::{CEILING_LAYER, FLOOR_LAYER, MAIN_LAYER};
use crate::error::EngineResult;
use crate::legacy::{
    decode_ceiling_tile, decode_floor_tile, decode_wall_tile, make_synthetic_ceiling,
    map2_voxel_height, DecodedTile, LegacyLevel, LegacyLock, LegacyTables, LegacyTrigger,
    ParameterTable, TileLayer,
};
use crate::world::core::{
    legacy_to_level_voxel, InteriorType, LegacyVoxel2, LevelVoxel, WorldType,
};
use crate::world::level::{
    add_entity_def, add_entity_placement, add_lock_def, add_lock_placement, add_transition_def,
    add_transition_placement, add_trigger_def, add_trigger_placement, add_voxel_def,
    get_voxel_def, set_level_voxel, LevelDefinition, LevelInfoDefinition, LockDefinition,
};
use cgmath::Point3;

/// Inputs every reader needs that stay fixed for one generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub world_type: WorldType,
    pub interior_type: Option<InteriorType>,
    /// Only meaningful for palaces; passed through to interior transitions.
    pub ruler_is_male: Option<bool>,
    pub inf: &'a ParameterTable,
    pub tables: &'a LegacyTables,
}

impl<'a> GenerationContext<'a> {
    fn tile_key(&self, code: u16) -> TileKey {
        TileKey {
            code,
            world_type: self.world_type,
        }
    }
}

/// Grid height a legacy level needs: floor, main, then its tallest MAP2
/// column, or a single ceiling layer without MAP2.
pub fn level_height(level: &LegacyLevel) -> usize {
    let map2_height = level
        .map2
        .as_ref()
        .and_then(|map2| {
            map2.codes()
                .iter()
                .filter(|&&code| code != 0)
                .map(|&code| map2_voxel_height(code))
                .max()
        })
        .unwrap_or(1);
    CEILING_LAYER + map2_height
}

fn level_xz(x: usize, z: usize) -> (i32, i32) {
    (z as i32, x as i32)
}

fn entity_position(level_x: i32, level_z: i32) -> Point3<f64> {
    Point3::new(level_x as f64 + 0.5, 1.0, level_z as f64 + 0.5)
}

fn resolve_entity(
    key: EntityKey,
    flat_index: i32,
    ctx: &GenerationContext,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> Option<usize> {
    if let Some(&cached) = caches.entities.get(&key) {
        return cached;
    }
    let id = make_entity_def(flat_index, ctx.inf).map(|def| add_entity_def(info, def));
    caches.entities.insert(key, id);
    id
}

/// FLOR layer: floors and chasms at y = 0, plus any flats they carry.
pub fn read_flor(
    flor: &TileLayer,
    ctx: &GenerationContext,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<()> {
    for z in 0..flor.depth() {
        for x in 0..flor.width() {
            let code = flor.get(x, z)?;
            let (level_x, level_z) = level_xz(x, z);

            let key = ctx.tile_key(code);
            let (voxel_id, flat_index) = match caches.flor_voxels.get(&key) {
                Some(&id) => {
                    let flat = (code & 0x00FF) as i32;
                    (id, (flat > 0).then(|| flat - 1))
                }
                None => {
                    let decoded = decode_floor_tile(code, ctx.inf);
                    let id = add_voxel_def(info, decoded.voxel)?;
                    caches.flor_voxels.insert(key, id);
                    (id, decoded.flat_index)
                }
            };
            set_level_voxel(level, level_x, FLOOR_LAYER as i32, level_z, voxel_id)?;

            if let Some(flat_index) = flat_index {
                let entity_key = EntityKey {
                    layer: SourceLayer::Flor,
                    code,
                    world_type: ctx.world_type,
                };
                if let Some(entity_id) = resolve_entity(entity_key, flat_index, ctx, info, caches) {
                    add_entity_placement(level, entity_id, entity_position(level_x, level_z));
                }
            }
        }
    }
    Ok(())
}

fn resolve_map1_tile(
    code: u16,
    ctx: &GenerationContext,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<CachedTile> {
    let key = ctx.tile_key(code);
    if let Some(&cached) = caches.map1_tiles.get(&key) {
        return Ok(cached);
    }

    let cached = match decode_wall_tile(code, ctx.world_type, ctx.inf, &ctx.tables.wall_heights) {
        DecodedTile::Voxel(definition) => CachedTile::Voxel(add_voxel_def(info, definition)?),
        DecodedTile::Entity { flat_index } => CachedTile::Entity { flat_index },
        DecodedTile::Empty | DecodedTile::Rejected => CachedTile::Skip,
    };
    caches.map1_tiles.insert(key, cached);
    Ok(cached)
}

fn resolve_voxel_transition(
    code: u16,
    voxel_id: u16,
    ctx: &GenerationContext,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<Option<usize>> {
    let key = ctx.tile_key(code);
    if let Some(&cached) = caches.transitions.get(&key) {
        return Ok(cached);
    }

    let definition = get_voxel_def(info, voxel_id)?;
    let id = make_voxel_transition_def(definition, ctx.world_type, ctx.ruler_is_male)
        .map(|transition| add_transition_def(info, transition));
    caches.transitions.insert(key, id);
    Ok(id)
}

/// MAP1 layer: walls and objects at y = 1, their transitions, and flats.
pub fn read_map1(
    map1: &TileLayer,
    ctx: &GenerationContext,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<()> {
    for z in 0..map1.depth() {
        for x in 0..map1.width() {
            let code = map1.get(x, z)?;
            if code == 0 {
                continue;
            }

            let (level_x, level_z) = level_xz(x, z);
            let position = LevelVoxel::new(level_x, MAIN_LAYER as i32, level_z);

            match resolve_map1_tile(code, ctx, info, caches)? {
                CachedTile::Voxel(voxel_id) => {
                    set_level_voxel(level, level_x, MAIN_LAYER as i32, level_z, voxel_id)?;
                    if let Some(transition_id) =
                        resolve_voxel_transition(code, voxel_id, ctx, info, caches)?
                    {
                        add_transition_placement(level, transition_id, position);
                    }
                }
                CachedTile::Entity { flat_index } => {
                    let entity_key = EntityKey {
                        layer: SourceLayer::Map1,
                        code,
                        world_type: ctx.world_type,
                    };
                    if let Some(entity_id) =
                        resolve_entity(entity_key, flat_index, ctx, info, caches)
                    {
                        add_entity_placement(level, entity_id, entity_position(level_x, level_z));
                    }

                    if is_entity_transition(flat_index, ctx.world_type) {
                        let transition_id = match caches.den_transition {
                            Some(id) => id,
                            None => {
                                let id = add_transition_def(info, make_den_transition_def());
                                caches.den_transition = Some(id);
                                id
                            }
                        };
                        add_transition_placement(level, transition_id, position);
                    }
                }
                CachedTile::Skip => {}
            }
        }
    }
    Ok(())
}

/// MAP2 layer: solid walls replicated upward from y = 2.
pub fn read_map2(
    map2: &TileLayer,
    ctx: &GenerationContext,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<()> {
    for z in 0..map2.depth() {
        for x in 0..map2.width() {
            let code = map2.get(x, z)?;
            if code == 0 {
                continue;
            }

            let key = ctx.tile_key(code);
            let cached = match caches.map2_tiles.get(&key) {
                Some(&cached) => cached,
                None => {
                    let cached = match decode_ceiling_tile(code) {
                        DecodedTile::Voxel(definition) => {
                            CachedTile::Voxel(add_voxel_def(info, definition)?)
                        }
                        _ => CachedTile::Skip,
                    };
                    caches.map2_tiles.insert(key, cached);
                    cached
                }
            };

            if let CachedTile::Voxel(voxel_id) = cached {
                let (level_x, level_z) = level_xz(x, z);
                let y_start = CEILING_LAYER;
                let y_end = y_start + map2_voxel_height(code);
                for y in y_start..y_end {
                    set_level_voxel(level, level_x, y as i32, level_z, voxel_id)?;
                }
            }
        }
    }
    Ok(())
}

/// One ceiling block across the whole footprint at y = 2, for levels
/// without MAP2 data.
pub fn read_ceiling(
    ctx: &GenerationContext,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<()> {
    let voxel_id = match caches.synthetic_ceiling {
        Some(id) => id,
        None => {
            let id = add_voxel_def(info, make_synthetic_ceiling(ctx.inf))?;
            caches.synthetic_ceiling = Some(id);
            id
        }
    };

    for level_z in 0..level.depth {
        for level_x in 0..level.width {
            set_level_voxel(
                level,
                level_x as i32,
                CEILING_LAYER as i32,
                level_z as i32,
                voxel_id,
            )?;
        }
    }
    Ok(())
}

/// LOCK entry; deduplicated by legacy position and lock level.
pub fn read_lock(
    lock: &LegacyLock,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) {
    let lock_id = *caches.locks.entry(*lock).or_insert_with(|| {
        add_lock_def(
            info,
            LockDefinition {
                lock_level: lock.lock_level,
            },
        )
    });

    let position = legacy_to_level_voxel(LegacyVoxel2 {
        x: lock.x,
        y: lock.y,
    });
    add_lock_placement(
        level,
        lock_id,
        LevelVoxel::new(position.x, MAIN_LAYER as i32, position.z),
    );
}

/// TRIG entry; deduplicated by legacy position, text and sound.
pub fn read_trigger(
    trigger: &LegacyTrigger,
    ctx: &GenerationContext,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) {
    let trigger_id = *caches
        .triggers
        .entry(*trigger)
        .or_insert_with(|| add_trigger_def(info, make_trigger_def(trigger, ctx.inf)));

    let position = legacy_to_level_voxel(LegacyVoxel2 {
        x: trigger.x,
        y: trigger.y,
    });
    add_trigger_placement(
        level,
        trigger_id,
        LevelVoxel::new(position.x, MAIN_LAYER as i32, position.z),
    );
}

/// FLOR, MAP1, then MAP2 or the synthetic ceiling (never in outdoor dungeons).
pub fn read_level_layers(
    source: &LegacyLevel,
    ctx: &GenerationContext,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<()> {
    read_flor(&source.flor, ctx, level, info, caches)?;
    read_map1(&source.map1, ctx, level, info, caches)?;
    match &source.map2 {
        Some(map2) => read_map2(map2, ctx, level, info, caches)?,
        None if !ctx.inf.ceiling.outdoor_dungeon => read_ceiling(ctx, level, info, caches)?,
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::{FlatData, TextData};
    use crate::world::level::{
        create_level_definition, create_level_info, find_placement_at, get_level_voxel,
        placement_count, TransitionDefinition,
    };
    use crate::world::core::{VoxelDefinition, WallKind, AIR_VOXEL_ID};

    fn context<'a>(inf: &'a ParameterTable, tables: &'a LegacyTables) -> GenerationContext<'a> {
        GenerationContext {
            world_type: WorldType::Interior,
            interior_type: Some(InteriorType::Tower),
            ruler_is_male: None,
            inf,
            tables,
        }
    }

    #[test]
    fn test_flor_axis_swap_and_cache() {
        let _ = env_logger::builder().is_test(true).try_init();
        let inf = ParameterTable::default();
        let tables = LegacyTables::default();
        let ctx = context(&inf, &tables);

        // 3 columns x 2 rows
        let flor = TileLayer::from_codes(3, 2, vec![0x0100, 0x0200, 0x0100, 0x0100, 0x0100, 0x0200])
            .expect("sized");
        let mut level = create_level_definition(2, 3, 3).expect("dims");
        let mut info = create_level_info(1.0);
        let mut caches = GenerationCaches::default();

        read_flor(&flor, &ctx, &mut level, &mut info, &mut caches).expect("read");

        // Two distinct codes, plus air.
        assert_eq!(info.voxel_defs.len(), 3);
        // Legacy (column 1, row 0) -> level (0, 0, 1)
        let id = get_level_voxel(&level, 0, 0, 1);
        assert_eq!(info.voxel_defs[id as usize], VoxelDefinition::Floor { texture: 2 });
        // Legacy (column 2, row 1) -> level (1, 0, 2)
        assert_eq!(get_level_voxel(&level, 1, 0, 2), id);
        assert_eq!(get_level_voxel(&level, 0, 0, 0), get_level_voxel(&level, 0, 0, 2));
    }

    #[test]
    fn test_identical_codes_share_definitions_across_levels() {
        let inf = ParameterTable::default();
        let tables = LegacyTables::default();
        let ctx = context(&inf, &tables);
        let mut info = create_level_info(1.0);
        let mut caches = GenerationCaches::default();

        let mut source = LegacyLevel::new(4, 4);
        source.map1.fill(0x0505);
        source.flor.fill(0x0300);

        let mut first = create_level_definition(4, 3, 4).expect("dims");
        let mut second = create_level_definition(4, 3, 4).expect("dims");
        read_level_layers(&source, &ctx, &mut first, &mut info, &mut caches).expect("read");
        read_level_layers(&source, &ctx, &mut second, &mut info, &mut caches).expect("read");

        assert_eq!(first.voxels, second.voxels);
        // Air, floor, wall, synthetic ceiling.
        assert_eq!(info.voxel_defs.len(), 4);
    }

    #[test]
    fn test_map1_flats_and_transitions() {
        let mut inf = ParameterTable::default();
        inf.level_up_index = Some(4);
        inf.flats = vec![FlatData::default(); 3];
        let tables = LegacyTables::default();
        let ctx = context(&inf, &tables);

        let mut map1 = TileLayer::new(3, 3);
        map1.set(1, 0, 0x0505).expect("in bounds");
        map1.set(2, 2, 0x8002).expect("in bounds");
        map1.set(0, 2, 0x8002).expect("in bounds");
        map1.set(0, 1, 0xC001).expect("in bounds");

        let mut level = create_level_definition(3, 3, 3).expect("dims");
        let mut info = create_level_info(1.0);
        let mut caches = GenerationCaches::default();
        read_map1(&map1, &ctx, &mut level, &mut info, &mut caches).expect("read");

        let transition = find_placement_at(&level.transitions, LevelVoxel::new(0, 1, 1))
            .expect("level up transition");
        assert_eq!(
            info.transition_defs[transition],
            TransitionDefinition::LevelChange { is_up: true }
        );
        match info.voxel_defs[get_level_voxel(&level, 0, 1, 1) as usize] {
            VoxelDefinition::Wall { kind, .. } => assert_eq!(kind, WallKind::LevelUp),
            ref other => panic!("expected wall, got {:?}", other),
        }

        // Same flat code twice: one definition, two placements.
        assert_eq!(info.entity_defs.len(), 1);
        assert_eq!(placement_count(&level.entities), 2);
        assert_eq!(level.entities[0].positions[0], Point3::new(2.5, 1.0, 0.5));

        // 0xC codes leave the cell empty.
        assert_eq!(get_level_voxel(&level, 1, 1, 0), AIR_VOXEL_ID);
    }

    #[test]
    fn test_wild_den_is_a_transition() {
        let mut inf = ParameterTable::default();
        inf.flats = vec![FlatData::default(); 40];
        let tables = LegacyTables::default();
        let ctx = GenerationContext {
            world_type: WorldType::Wilderness,
            interior_type: None,
            ..context(&inf, &tables)
        };

        let mut map1 = TileLayer::new(2, 2);
        map1.set(1, 1, 0x8025).expect("in bounds");
        let mut level = create_level_definition(2, 3, 2).expect("dims");
        let mut info = create_level_info(1.0);
        let mut caches = GenerationCaches::default();
        read_map1(&map1, &ctx, &mut level, &mut info, &mut caches).expect("read");

        assert_eq!(info.transition_defs.len(), 1);
        assert!(find_placement_at(&level.transitions, LevelVoxel::new(1, 1, 1)).is_some());
    }

    #[test]
    fn test_map2_replication_and_height() {
        let inf = ParameterTable::default();
        let tables = LegacyTables::default();
        let ctx = context(&inf, &tables);

        let mut source = LegacyLevel::new(2, 2);
        let mut map2 = TileLayer::new(2, 2);
        map2.set(0, 1, 0x8083).expect("in bounds");
        map2.set(1, 1, 0x0002).expect("in bounds");
        source.map2 = Some(map2);
        assert_eq!(level_height(&source), 6);

        let mut level = create_level_definition(2, level_height(&source), 2).expect("dims");
        let mut info = create_level_info(1.0);
        let mut caches = GenerationCaches::default();
        read_level_layers(&source, &ctx, &mut level, &mut info, &mut caches).expect("read");

        // Legacy (0, 1) -> level (1, y, 0): four layers from y = 2.
        for y in 2..6 {
            assert_ne!(get_level_voxel(&level, 1, y, 0), AIR_VOXEL_ID);
        }
        assert_ne!(get_level_voxel(&level, 1, 2, 1), AIR_VOXEL_ID);
        assert_eq!(get_level_voxel(&level, 1, 3, 1), AIR_VOXEL_ID);
        // No synthetic ceiling when MAP2 exists.
        assert_eq!(get_level_voxel(&level, 0, 2, 0), AIR_VOXEL_ID);
    }

    #[test]
    fn test_outdoor_dungeon_has_no_ceiling() {
        let mut inf = ParameterTable::default();
        inf.ceiling.outdoor_dungeon = true;
        let tables = LegacyTables::default();
        let ctx = context(&inf, &tables);

        let source = LegacyLevel::new(2, 2);
        assert_eq!(level_height(&source), 3);
        let mut level = create_level_definition(2, 3, 2).expect("dims");
        let mut info = create_level_info(1.0);
        let mut caches = GenerationCaches::default();
        read_level_layers(&source, &ctx, &mut level, &mut info, &mut caches).expect("read");
        assert_eq!(get_level_voxel(&level, 0, 2, 0), AIR_VOXEL_ID);
    }

    #[test]
    fn test_locks_and_triggers_dedup() {
        let mut inf = ParameterTable::default();
        inf.texts.insert(
            0,
            TextData {
                text: "Hello".to_string(),
                displayed_once: false,
            },
        );
        let tables = LegacyTables::default();
        let ctx = context(&inf, &tables);
        let mut level = create_level_definition(8, 3, 8).expect("dims");
        let mut info = create_level_info(1.0);
        let mut caches = GenerationCaches::default();

        let lock = LegacyLock {
            x: 2,
            y: 5,
            lock_level: 3,
        };
        read_lock(&lock, &mut level, &mut info, &mut caches);
        read_lock(&lock, &mut level, &mut info, &mut caches);
        assert_eq!(info.lock_defs.len(), 1);
        assert_eq!(info.lock_defs[0].lock_level, 3);
        assert_eq!(level.locks[0].positions[0], LevelVoxel::new(5, 1, 2));

        let trigger = LegacyTrigger {
            x: 1,
            y: 4,
            text_index: 0,
            sound_index: -1,
        };
        read_trigger(&trigger, &ctx, &mut level, &mut info, &mut caches);
        read_trigger(
            &LegacyTrigger {
                text_index: -1,
                ..trigger
            },
            &ctx,
            &mut level,
            &mut info,
            &mut caches,
        );
        assert_eq!(info.trigger_defs.len(), 2);
        assert_eq!(
            find_placement_at(&level.triggers, LevelVoxel::new(4, 1, 1)),
            Some(0)
        );
    }
}
