//! Building names for *MENU voxels
//!
//! Cities name every tavern, equipment store and temple, avoiding repeated
//! (prefix, suffix) pairs per category. Wilderness chunks name only the first
//! tavern and temple they contain, seeded from the chunk coordinate.

use crate::constants::generation::{
    EQUIPMENT_PREFIX_PICKS, EQUIPMENT_SUFFIX_PICKS, TAVERN_PREFIX_PICKS, TAVERN_SUFFIX_PICKS,
    TEMPLE_MODEL_COUNT, TEMPLE_MODEL_VARIATIONS,
};
use crate::error::EngineResult;
use crate::legacy::{menu_type_from_index, ArenaRandom, LegacyTables, MenuType, NpcNameTables};
use crate::world::core::{LevelVoxel, LevelVoxel2, WorldType};
use crate::world::level::{
    add_building_name, add_building_name_placement, get_level_voxel, get_voxel_def,
    set_building_name_override, LevelDefinition, LevelInfoDefinition,
};
use rustc_hash::{FxHashMap, FxHashSet};

use super::generation_caches::GenerationCaches;

/// Temple name forced by the main quest in a few cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainQuestTempleOverride {
    pub model_index: u32,
    pub suffix_index: u32,
    /// Building name ID the override replaces.
    pub menu_names_index: usize,
}

/// City-specific inputs to name generation.
#[derive(Debug, Clone, Copy)]
pub struct CityNameParams<'a> {
    pub city_seed: u32,
    pub race_id: usize,
    pub coastal: bool,
    /// Substituted for `%ct`, e.g. "City" or "Village".
    pub city_type_name: &'a str,
    pub temple_override: Option<MainQuestTempleOverride>,
}

/// Building names found in one wilderness chunk, by menu type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildChunkBuildingNameInfo {
    pub chunk: LevelVoxel2,
    pub ids: FxHashMap<MenuType, usize>,
}

impl WildChunkBuildingNameInfo {
    pub fn new(chunk: LevelVoxel2) -> Self {
        Self {
            chunk,
            ids: FxHashMap::default(),
        }
    }

    pub fn has_building_names(&self) -> bool {
        !self.ids.is_empty()
    }

    pub fn building_name_id(&self, menu_type: MenuType) -> Option<usize> {
        self.ids.get(&menu_type).copied()
    }
}

/// Seed for the names of one wilderness chunk.
pub fn make_wild_chunk_seed(chunk_x: i32, chunk_z: i32) -> u32 {
    ((chunk_z as u32) << 16).wrapping_add(chunk_x as u32)
}

/// City-local point packed in a city seed.
pub fn local_city_point(city_seed: u32) -> (u32, u32) {
    (city_seed >> 16, city_seed & 0xFFFF)
}

/// NPC name: one pick from each first-name chunk list, then a space and one
/// pick from each last-name chunk list when the race has last names.
pub fn generate_npc_name(race_id: usize, random: &mut ArenaRandom, names: &NpcNameTables) -> String {
    let race = match names.races.get(race_id) {
        Some(race) => race,
        None => {
            log::warn!(
                "[building_names::generate_npc_name] No name chunks for race {}",
                race_id
            );
            return String::new();
        }
    };

    let mut pick_all = |chunks: &[Vec<String>]| -> String {
        chunks
            .iter()
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| chunk[random.next_mod(chunk.len() as u32) as usize].as_str())
            .collect()
    };

    let mut name = pick_all(&race.first_name_chunks);
    if !race.last_name_chunks.is_empty() {
        name.push(' ');
        name.push_str(&pick_all(&race.last_name_chunks));
    }
    name
}

pub fn tavern_name(tables: &LegacyTables, prefix: u32, suffix: u32, coastal: bool) -> String {
    let city_gen = &tables.city_gen;
    let suffixes = if coastal {
        &city_gen.tavern_marine_suffixes
    } else {
        &city_gen.tavern_suffixes
    };
    format!(
        "{} {}",
        city_gen.tavern_prefixes[prefix as usize], suffixes[suffix as usize]
    )
}

pub fn temple_name(tables: &LegacyTables, model: u32, suffix: u32) -> String {
    let city_gen = &tables.city_gen;
    format!(
        "{}{}",
        city_gen.temple_prefixes[model as usize],
        city_gen.temple_suffixes(model)[suffix as usize]
    )
}

/// Equipment store name with `%ct`, `%ef` and `%n` substituted.
/// `(x, z)` is the store's level voxel.
pub fn equipment_name(
    tables: &LegacyTables,
    prefix: u32,
    suffix: u32,
    params: &CityNameParams,
    x: i32,
    z: i32,
) -> String {
    let city_gen = &tables.city_gen;
    let mut name = format!(
        "{} {}",
        city_gen.equipment_prefixes[prefix as usize], city_gen.equipment_suffixes[suffix as usize]
    );

    if name.contains("%ct") {
        name = name.replacen("%ct", params.city_type_name, 1);
    }

    if name.contains("%ef") {
        let mut name_random = ArenaRandom::new(((x as u32) << 16).wrapping_add(z as u32));
        let full = generate_npc_name(params.race_id, &mut name_random, &tables.npc_names);
        let first = full.split_whitespace().next().unwrap_or("");
        name = name.replacen("%ef", first, 1);
    }

    if name.contains("%n") {
        let mut name_random = ArenaRandom::new(((z as u32) << 16).wrapping_add(x as u32));
        let full = generate_npc_name(params.race_id, &mut name_random, &tables.npc_names);
        name = name.replacen("%n", &full, 1);
    }

    name
}

fn menu_type_at(
    level: &LevelDefinition,
    info: &LevelInfoDefinition,
    x: i32,
    z: i32,
    world_type: WorldType,
) -> EngineResult<MenuType> {
    let definition = get_voxel_def(info, get_level_voxel(level, x, 1, z))?;
    Ok(definition
        .menu_id()
        .map(|menu_id| menu_type_from_index(menu_id, world_type))
        .unwrap_or(MenuType::None))
}

fn pool_size(menu_type: MenuType) -> usize {
    match menu_type {
        MenuType::Tavern => (TAVERN_PREFIX_PICKS * TAVERN_SUFFIX_PICKS) as usize,
        MenuType::Equipment => (EQUIPMENT_PREFIX_PICKS * EQUIPMENT_SUFFIX_PICKS) as usize,
        _ => TEMPLE_MODEL_VARIATIONS.iter().sum::<u32>() as usize,
    }
}

/// Draw a temple (model, suffix) pair.
fn draw_temple(random: &mut ArenaRandom) -> (u32, u32) {
    let model = random.next_mod(TEMPLE_MODEL_COUNT);
    let suffix = random.next_mod(TEMPLE_MODEL_VARIATIONS[model as usize]);
    (model, suffix)
}

/// Draws per building before a category counts as exhausted.
const NAME_DRAW_ATTEMPTS: usize = 4096;

/// Draw pairs until one is not in `seen`, hashed as `(first << 8) + second`.
fn draw_unique(
    seen: &FxHashSet<u32>,
    random: &mut ArenaRandom,
    mut draw: impl FnMut(&mut ArenaRandom) -> (u32, u32),
) -> Option<(u32, u32)> {
    (0..NAME_DRAW_ATTEMPTS)
        .map(|_| draw(random))
        .find(|&(first, second)| !seen.contains(&((first << 8) + second)))
}

fn generate_city_names_for(
    menu_type: MenuType,
    params: &CityNameParams,
    random: &mut ArenaRandom,
    tables: &LegacyTables,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
) -> EngineResult<()> {
    if matches!(menu_type, MenuType::Equipment | MenuType::Temple) {
        let (local_x, local_y) = local_city_point(params.city_seed);
        random.srand((local_x << 16).wrapping_add(local_y));
    }

    let mut seen: FxHashSet<u32> = FxHashSet::default();
    let pool = pool_size(menu_type);
    let mut exhausted = false;

    for x in 0..level.width as i32 {
        for z in 0..level.depth as i32 {
            if menu_type_at(level, info, x, z, WorldType::City)? != menu_type {
                continue;
            }

            if exhausted || seen.len() >= pool {
                if !exhausted {
                    log::warn!(
                        "[building_names::generate_city_building_names] {:?} name pool exhausted, leaving the rest unnamed",
                        menu_type
                    );
                    exhausted = true;
                }
                continue;
            }

            let drawn = match menu_type {
                MenuType::Tavern => draw_unique(&seen, random, |r| {
                    (r.next_mod(TAVERN_PREFIX_PICKS), r.next_mod(TAVERN_SUFFIX_PICKS))
                }),
                MenuType::Equipment => draw_unique(&seen, random, |r| {
                    (r.next_mod(EQUIPMENT_PREFIX_PICKS), r.next_mod(EQUIPMENT_SUFFIX_PICKS))
                }),
                _ => draw_unique(&seen, random, draw_temple),
            };
            let (first, second) = match drawn {
                Some(pair) => pair,
                None => {
                    log::warn!(
                        "[building_names::generate_city_building_names] No unused {:?} name after {} draws, leaving the rest unnamed",
                        menu_type,
                        NAME_DRAW_ATTEMPTS
                    );
                    exhausted = true;
                    continue;
                }
            };

            let name = match menu_type {
                MenuType::Tavern => tavern_name(tables, first, second, params.coastal),
                MenuType::Equipment => equipment_name(tables, first, second, params, x, z),
                _ => temple_name(tables, first, second),
            };

            let name_id = add_building_name(info, name);
            add_building_name_placement(level, name_id, LevelVoxel::new(x, 1, z));
            seen.insert((first << 8) + second);
        }
    }

    if menu_type == MenuType::Temple {
        if let Some(temple) = params.temple_override {
            let name = temple_name(tables, temple.model_index, temple.suffix_index);
            set_building_name_override(info, temple.menu_names_index, name);
        }
    }
    Ok(())
}

/// Name every tavern, equipment store and temple in a city level, in that
/// order. Taverns continue from `random`'s current state; equipment stores and
/// temples each reseed from the city's local point first.
pub fn generate_city_building_names(
    params: &CityNameParams,
    random: &mut ArenaRandom,
    tables: &LegacyTables,
    level: &mut LevelDefinition,
    info: &mut LevelInfoDefinition,
) -> EngineResult<()> {
    tables.city_gen.validate_names()?;
    if let Some(temple) = params.temple_override {
        if temple.model_index >= TEMPLE_MODEL_COUNT
            || temple.suffix_index >= TEMPLE_MODEL_VARIATIONS[temple.model_index as usize]
        {
            return Err(crate::world::error::GenerationError::InvalidLayout(format!(
                "main quest temple override ({}, {}) is outside the temple tables",
                temple.model_index, temple.suffix_index
            ))
            .into());
        }
    }

    for menu_type in [MenuType::Tavern, MenuType::Equipment, MenuType::Temple] {
        generate_city_names_for(menu_type, params, random, tables, level, info)?;
    }

    log::debug!(
        "[building_names::generate_city_building_names] {} name(s) placed",
        info.building_names.len()
    );
    Ok(())
}

/// Name the first tavern and the first temple in a wilderness chunk.
/// Identical names across chunks share one building name ID.
pub fn generate_wild_chunk_building_names(
    chunk: LevelVoxel2,
    level: &LevelDefinition,
    tables: &LegacyTables,
    info: &mut LevelInfoDefinition,
    caches: &mut GenerationCaches,
) -> EngineResult<WildChunkBuildingNameInfo> {
    tables.city_gen.validate_names()?;

    let seed = make_wild_chunk_seed(chunk.x, chunk.z);
    let mut name_info = WildChunkBuildingNameInfo::new(chunk);

    for menu_type in [MenuType::Tavern, MenuType::Temple] {
        let found = find_first_menu(level, info, menu_type)?;
        if found.is_none() {
            continue;
        }

        // Every candidate voxel starts from the chunk seed.
        let mut random = ArenaRandom::new(seed);
        let name = if menu_type == MenuType::Tavern {
            let prefix = random.next_mod(TAVERN_PREFIX_PICKS);
            let suffix = random.next_mod(TAVERN_SUFFIX_PICKS);
            tavern_name(tables, prefix, suffix, false)
        } else {
            let (model, suffix) = draw_temple(&mut random);
            temple_name(tables, model, suffix)
        };

        let name_id = match caches.building_names.get(&name) {
            Some(&id) => id,
            None => {
                let id = add_building_name(info, name.clone());
                caches.building_names.insert(name, id);
                id
            }
        };
        name_info.ids.insert(menu_type, name_id);
    }

    Ok(name_info)
}

fn find_first_menu(
    level: &LevelDefinition,
    info: &LevelInfoDefinition,
    menu_type: MenuType,
) -> EngineResult<Option<(i32, i32)>> {
    for x in 0..level.width as i32 {
        for z in 0..level.depth as i32 {
            if menu_type_at(level, info, x, z, WorldType::Wilderness)? == menu_type {
                return Ok(Some((x, z)));
            }
        }
    }
    Ok(None)
}
