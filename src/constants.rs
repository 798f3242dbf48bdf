//! Engine-wide constants
//!
//! Grouped by concern. Anything that is data-file dependent lives in the
//! legacy parameter/executable tables instead.

/// Values fixed by the legacy level formats.
pub mod legacy {
    /// Arena units per voxel edge. Vertical offsets in the tables are in these units.
    pub const ARENA_UNITS: f64 = 128.0;

    /// Ceiling height used when a parameter table does not specify one.
    pub const DEFAULT_CEILING_HEIGHT: i32 = 100;

    /// FLOR top-byte selectors reserved for chasms.
    pub const DRY_CHASM: u16 = 0xC;
    pub const WET_CHASM: u16 = 0xD;
    pub const LAVA_CHASM: u16 = 0xE;

    /// Texture index used for the synthetic ceiling when *CEILING has none.
    pub const DEFAULT_CEILING_TEXTURE: i32 = 1;

    /// Raised platform thickness in the wilderness, before box scaling.
    pub const WILD_BOX_SIZE: i32 = 32;
    pub const DEFAULT_WILD_BOX_SCALE: i32 = 192;

    /// Flat index of the wilderness den entrance.
    pub const WILD_DEN_FLAT_INDEX: i32 = 37;

    /// Item index ranges used to classify flats.
    pub const CREATURE_ITEM_INDEX_FIRST: i32 = 32;
    pub const CREATURE_ITEM_INDEX_LAST: i32 = 54;
    pub const FINAL_BOSS_ITEM_INDEX: i32 = 73;
    pub const FINAL_BOSS_CREATURE_ID: i32 = 24;
    pub const HUMAN_ENEMY_ITEM_INDEX_FIRST: i32 = 55;
    pub const HUMAN_ENEMY_ITEM_INDEX_LAST: i32 = 72;

    pub const ARENA_RANDOM_DEFAULT_SEED: u32 = 12345;
    pub const ARENA_RANDOM_MULTIPLIER: u32 = 7143469;
}

/// Procedural generation layout.
pub mod generation {
    pub const FLOOR_LAYER: usize = 0;
    pub const MAIN_LAYER: usize = 1;
    pub const CEILING_LAYER: usize = 2;

    /// Levels without MAP2 data are floor + main + ceiling.
    pub const DEFAULT_LEVEL_HEIGHT: usize = 3;

    pub const DUNGEON_CHUNK_DIM: usize = 32;
    pub const DUNGEON_TILE_SETS: u32 = 4;
    pub const DUNGEON_CHUNKS_PER_TILE_SET: u32 = 8;
    pub const DUNGEON_CHUNK_POOL_SIZE: usize =
        (DUNGEON_TILE_SETS * DUNGEON_CHUNKS_PER_TILE_SET) as usize;
    static_assertions::const_assert_eq!(DUNGEON_CHUNK_POOL_SIZE, 32);
    static_assertions::const_assert!(CEILING_LAYER < DEFAULT_LEVEL_HEIGHT);
    pub const DUNGEON_PERIMETER_VOXEL: u16 = 0x7800;
    pub const LEVEL_CHANGE_VOXEL_OFFSET: i32 = 10;

    pub const CITY_BLOCK_DIM: usize = 20;
    pub const WILD_CHUNK_DIM: usize = 64;

    /// Wild block IDs that stand in for the player's home city.
    pub const WILD_CITY_BLOCK_FIRST: u16 = 1;
    pub const WILD_CITY_BLOCK_LAST: u16 = 4;

    /// Palace entrance run length along the city wall.
    pub const PALACE_GATE_LENGTH: usize = 4;

    pub const TAVERN_PREFIX_PICKS: u32 = 23;
    pub const TAVERN_SUFFIX_PICKS: u32 = 23;
    pub const EQUIPMENT_PREFIX_PICKS: u32 = 20;
    pub const EQUIPMENT_SUFFIX_PICKS: u32 = 10;
    pub const TEMPLE_MODEL_COUNT: u32 = 3;
    pub const TEMPLE_MODEL_VARIATIONS: [u32; 3] = [5, 9, 10];
}

/// Runtime overlay defaults.
pub mod runtime {
    /// Fraction of a door opened per second.
    pub const DEFAULT_DOOR_SPEED: f64 = 1.3;
    pub const DEFAULT_FADE_SECONDS: f64 = 1.0;
}

/// Software renderer defaults.
pub mod render {
    pub const FOG_COLOR: [f64; 3] = [0.45, 0.75, 1.0];

    /// Painted where texture coordinates fall outside [0, 1).
    pub const DIAGNOSTIC_COLOR: [f64; 3] = [1.0, 0.0, 1.0];

    pub const DEFAULT_RENDER_WIDTH: u32 = 320;
    pub const DEFAULT_RENDER_HEIGHT: u32 = 200;
    pub const MAX_RENDER_DIMENSION: u32 = 16384;
    pub const DEFAULT_VIEW_DISTANCE: f64 = 15.0;
    pub const DEFAULT_FOV_Y_DEGREES: f64 = 60.0;

    pub const PALETTE_SIZE: usize = 256;
}
