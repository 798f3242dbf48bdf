use serde::{Deserialize, Serialize};

/// Which family of map a level belongs to. Decoding rules branch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldType {
    Interior,
    City,
    Wilderness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteriorType {
    Crypt,
    Dungeon,
    Equipment,
    House,
    MagesGuild,
    Noble,
    Palace,
    Tavern,
    Temple,
    Tower,
}

impl InteriorType {
    /// Interiors loaded from a fixed layout rather than assembled from chunks.
    pub fn is_prefab(&self) -> bool {
        !self.is_procedural()
    }

    pub fn is_procedural(&self) -> bool {
        matches!(self, InteriorType::Dungeon)
    }
}
