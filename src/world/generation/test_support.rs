//! Shared fixtures for generator tests

use crate::legacy::{
    CityGenerationTables, LegacyLevel, LegacyLock, LegacyTables, LegacyTrigger, NpcNameTables,
    ParameterTable, RaceNameChunks, TileLayer, WallHeightTables,
};
use rustc_hash::FxHashMap;

/// Solid wall code for a texture index.
pub fn wall_code(texture: i32) -> u16 {
    let byte = (texture + 1) as u16;
    (byte << 8) | byte
}

fn names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}

/// 32 dungeon chunks of 32x32. Walls avoid the *LEVELUP/*LEVELDOWN textures
/// (6 and 7) the dungeon tests configure.
pub fn dungeon_chunk_pool() -> Vec<LegacyLevel> {
    (0..32)
        .map(|index| {
            let mut chunk = LegacyLevel::new(32, 32);
            chunk.flor.fill(0x0100 + ((index % 4) << 8) as u16);

            let wall = wall_code(index % 3 + 1);
            for i in 4..28 {
                chunk.map1.set(i, 4, wall).expect("in bounds");
                chunk.map1.set(4, i, wall).expect("in bounds");
            }

            if index % 2 == 0 {
                chunk.locks.push(LegacyLock {
                    x: 5,
                    y: 6,
                    lock_level: 1 + index % 3,
                });
            }
            if index % 5 == 0 {
                chunk.triggers.push(LegacyTrigger {
                    x: 7,
                    y: 7,
                    text_index: -1,
                    sound_index: -1,
                });
            }
            chunk
        })
        .collect()
}

/// Generation tables with every name list at its required length.
/// Fragments are disjoint across categories so names never collide.
pub fn legacy_tables() -> LegacyTables {
    LegacyTables {
        wall_heights: WallHeightTables {
            box1a: [0, 16, 32, 48, 64, 80, 96, 112],
            box1b: [0, 8, 16, 24, 32, 40, 48, 56],
            box1c: [0, 4, 8, 12, 16, 20, 24, 28],
            box2a: [8; 16],
            box2b: [16; 16],
        },
        city_gen: CityGenerationTables {
            block_codes: [
                "EQ".to_string(),
                "MG".to_string(),
                "NB".to_string(),
                "TP".to_string(),
                "TV".to_string(),
                "TS".to_string(),
                "BS".to_string(),
            ],
            block_variations: [2, 1, 1, 2, 2, 1, 3],
            block_chances: [10, 5, 5, 10, 10, 10, 50],
            rotations: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            tavern_prefixes: names("Tavern", 23),
            tavern_suffixes: names("Mug", 23),
            tavern_marine_suffixes: names("Anchor", 23),
            equipment_prefixes: names("Forge", 20),
            equipment_suffixes: names("Goods", 10),
            temple_prefixes: vec!["Chapel of ".into(), "Shrine of ".into(), "Temple of ".into()],
            temple1_suffixes: names("Akatosh", 5),
            temple2_suffixes: names("Dibella", 9),
            temple3_suffixes: names("Stendarr", 10),
        },
        npc_names: NpcNameTables {
            races: vec![RaceNameChunks {
                first_name_chunks: vec![
                    vec!["Al".into(), "Be".into(), "Ca".into()],
                    vec!["rin".into(), "dor".into()],
                ],
                last_name_chunks: vec![vec!["Stone".into(), "Wood".into(), "Hill".into()]],
            }],
        },
    }
}

/// Textures 10..=14 are city *MENU walls: tavern, equipment, temple, gate, palace.
pub const CITY_TAVERN_TEXTURE: i32 = 10;
pub const CITY_EQUIPMENT_TEXTURE: i32 = 11;
pub const CITY_TEMPLE_TEXTURE: i32 = 12;
pub const CITY_GATE_TEXTURE: i32 = 13;
pub const CITY_PALACE_TEXTURE: i32 = 14;

pub fn city_inf() -> ParameterTable {
    let mut inf = ParameterTable::default();
    inf.name = "CITY.INF".to_string();
    inf.menu_indices.insert(CITY_TAVERN_TEXTURE, 1);
    inf.menu_indices.insert(CITY_EQUIPMENT_TEXTURE, 0);
    inf.menu_indices.insert(CITY_TEMPLE_TEXTURE, 3);
    inf.menu_indices.insert(CITY_GATE_TEXTURE, 7);
    inf.menu_indices.insert(CITY_PALACE_TEXTURE, 12);
    inf
}

/// Menu wall texture placed in blocks of each procedural type, by type index.
fn block_menu_texture(block_type: usize) -> Option<i32> {
    match block_type {
        0 => Some(CITY_EQUIPMENT_TEXTURE),
        3 => Some(CITY_TEMPLE_TEXTURE),
        4 => Some(CITY_TAVERN_TEXTURE),
        _ => None,
    }
}

/// Every block layout name the tables can produce, each a 20x20 block with a
/// wall ring and, for shops, one *MENU wall.
pub fn city_block_source(tables: &LegacyTables) -> FxHashMap<String, LegacyLevel> {
    let city_gen = &tables.city_gen;
    let mut blocks = FxHashMap::default();
    for (block_type, code) in city_gen.block_codes.iter().enumerate() {
        for variation in 1..=city_gen.block_variations[block_type] {
            for rotation in &city_gen.rotations {
                let mut block = LegacyLevel::new(20, 20);
                block.flor.fill(0x0200);
                let wall = wall_code(block_type as i32 + 1);
                for i in 2..18 {
                    block.map1.set(i, 2, wall).expect("in bounds");
                }
                if let Some(texture) = block_menu_texture(block_type) {
                    block.map1.set(10, 2, wall_code(texture)).expect("in bounds");
                }
                let mut map2 = TileLayer::new(20, 20);
                map2.set(3, 3, 0x0083).expect("in bounds");
                block.map2 = Some(map2);
                blocks.insert(format!("{}BD{}{}.MIF", code, variation, rotation), block);
            }
        }
    }
    blocks
}

/// Blocks per side and block start matching `city_skeleton`.
pub const CITY_BLOCKS_PER_SIDE: usize = 3;
pub const CITY_BLOCK_START: (i32, i32) = (6, 6);

/// City skeleton: room for a 3x3 block interior at (6, 6) inside a walled
/// 72x72 map, with a gate on the north wall and a palace run on the south wall.
pub fn city_skeleton() -> LegacyLevel {
    let size = 72;
    let mut skeleton = LegacyLevel::new(size, size);
    skeleton.flor.fill(0x0100);
    let wall = wall_code(20);
    for i in 0..size {
        skeleton.map1.set(i, 0, wall).expect("in bounds");
        skeleton.map1.set(i, size - 1, wall).expect("in bounds");
        skeleton.map1.set(0, i, wall).expect("in bounds");
        skeleton.map1.set(size - 1, i, wall).expect("in bounds");
    }
    skeleton.map1.set(20, 0, wall_code(CITY_GATE_TEXTURE)).expect("in bounds");

    // Palace gate run on the last row, facing north until revised.
    for x in 30..34 {
        skeleton.map1.set(x, size - 1, 0xA005).expect("in bounds");
    }
    skeleton
}
