//! Level generation from legacy layers
//!
//! Four entry points share one decoding path:
//! - prefab: fixed layouts, one level per legacy level
//! - dungeon: levels stitched from the 32-layout chunk pool
//! - city: skeleton plus procedural blocks, then building names
//! - wilderness: one level per distinct wild block, names per chunk
//!
//! Each entry point owns a `GenerationCaches` for its call, so identical
//! codes across levels resolve to the same catalog IDs.

pub mod building_names;
pub mod city;
pub mod definition_builders;
pub mod dungeon;
pub mod generation_caches;
pub mod layer_reader;
pub mod prefab;
pub mod wilderness;

#[cfg(test)]
pub(crate) mod test_support;

pub use building_names::{
    generate_city_building_names, generate_npc_name, generate_wild_chunk_building_names,
    make_wild_chunk_seed, CityNameParams, MainQuestTempleOverride, WildChunkBuildingNameInfo,
};
pub use city::{generate_city, plan_city_blocks, revise_palace_graphics, CityBlockSource, CityGenInfo};
pub use dungeon::{generate_dungeon, GeneratedDungeon};
pub use generation_caches::GenerationCaches;
pub use layer_reader::{level_height, read_level_layers, GenerationContext};
pub use prefab::{create_level_for_layout, generate_prefab_levels};
pub use wilderness::{
    generate_wilderness, GeneratedWilderness, WildCityBlockReviser, WildGenInfo, WildLevelGrid,
};
