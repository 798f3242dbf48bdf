//! Generation Caches - Pure DOP
//!
//! NO METHODS. Just data.
//!
//! One `GenerationCaches` lives for exactly one generation call and is
//! threaded through every level that call builds. Identical tile codes always
//! resolve to the definition created the first time they were seen, so the
//! catalogs stay small and repeated runs produce identical IDs.

use crate::legacy::{LegacyLock, LegacyTrigger};
use crate::world::core::{VoxelId, WorldType};
use rustc_hash::FxHashMap;

/// Raw code plus the context that changes what it decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub code: u16,
    pub world_type: WorldType,
}

/// Legacy layer a code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLayer {
    Flor,
    Map1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub layer: SourceLayer,
    pub code: u16,
    pub world_type: WorldType,
}

/// What a MAP1/MAP2 code resolved to the first time it was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachedTile {
    Voxel(VoxelId),
    Entity { flat_index: i32 },
    /// Rejected by the decoder; already logged once.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationCaches {
    pub flor_voxels: FxHashMap<TileKey, VoxelId>,
    pub map1_tiles: FxHashMap<TileKey, CachedTile>,
    pub map2_tiles: FxHashMap<TileKey, CachedTile>,
    /// `None` records a flat that could not be built.
    pub entities: FxHashMap<EntityKey, Option<usize>>,
    /// `None` records a wall code that is not a transition.
    pub transitions: FxHashMap<TileKey, Option<usize>>,
    pub den_transition: Option<usize>,
    pub synthetic_ceiling: Option<VoxelId>,
    pub locks: FxHashMap<LegacyLock, usize>,
    pub triggers: FxHashMap<LegacyTrigger, usize>,
    pub building_names: FxHashMap<String, usize>,
}
