use serde::{Deserialize, Serialize};
use std::fmt;

/// Column/row coordinate in a legacy layer. `x` runs west-east across a
/// layer row and `y` counts rows south-north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LegacyVoxel2 {
    pub x: i32,
    pub y: i32,
}

/// Horizontal coordinate in the level grid. Level X follows legacy rows and
/// level Z follows legacy columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LevelVoxel2 {
    pub x: i32,
    pub z: i32,
}

/// Voxel coordinate in the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LevelVoxel {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LevelVoxel {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for LevelVoxel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Legacy (column, row) to level (x, z). The swap is its own inverse.
pub fn legacy_to_level_voxel(voxel: LegacyVoxel2) -> LevelVoxel2 {
    LevelVoxel2 {
        x: voxel.y,
        z: voxel.x,
    }
}

pub fn level_to_legacy_voxel(voxel: LevelVoxel2) -> LegacyVoxel2 {
    LegacyVoxel2 {
        x: voxel.z,
        y: voxel.x,
    }
}
