//! Legacy data model
//!
//! Read-only views of the original game's data the generators consume:
//! packed 16-bit tile layers, the per-level parameter table, the executable's
//! generation tables, the original pseudo-random generator, and the pure
//! decode functions that turn tile codes into voxel definitions.

pub mod arena_random;
pub mod generation_tables;
pub mod menu;
pub mod parameter_table;
pub mod tile_decoder;
pub mod tile_layer;

pub use arena_random::ArenaRandom;
pub use generation_tables::{
    CityGenerationTables, LegacyTables, NpcNameTables, RaceNameChunks, WallHeightTables,
};
pub use menu::{
    interior_type_from_menu_index, is_city_gate_menu_index, menu_type_from_index, MenuType,
};
pub use parameter_table::{CeilingData, FlatData, ParameterTable, TextData};
pub use tile_decoder::{
    decode_ceiling_tile, decode_floor_tile, decode_wall_tile, make_synthetic_ceiling,
    map2_voxel_height, DecodedFloorTile, DecodedTile,
};
pub use tile_layer::{LegacyLevel, LegacyLock, LegacyTrigger, TileLayer};
