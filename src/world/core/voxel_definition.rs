use super::ray::FaceAxis;
use cgmath::Vector3;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

/// Index into a level's voxel definition catalog. Zero is always air.
pub type VoxelId = u16;

pub const AIR_VOXEL_ID: VoxelId = 0;

// Legacy tile codes are 16-bit and every decoded catalog must fit the same width.
const_assert_eq!(std::mem::size_of::<VoxelId>(), 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallKind {
    Solid,
    LevelUp,
    LevelDown,
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChasmKind {
    Dry,
    Wet,
    Lava,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorKind {
    Swinging,
    Sliding,
    Raising,
    Splitting,
}

/// Side of a voxel an edge faces. North is -X, south +X, east -Z, west +Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub fn normal(&self) -> Vector3<f64> {
        match self {
            Facing::North => Vector3::new(-1.0, 0.0, 0.0),
            Facing::South => Vector3::new(1.0, 0.0, 0.0),
            Facing::East => Vector3::new(0.0, 0.0, -1.0),
            Facing::West => Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

/// Rendering and collision semantics of one voxel.
///
/// Texture fields index the level-wide texture table. Decoders never build a
/// definition with a negative texture; malformed tiles are rejected instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoxelDefinition {
    Air,
    Wall {
        side_texture: i32,
        floor_texture: i32,
        ceiling_texture: i32,
        menu_id: Option<i32>,
        kind: WallKind,
    },
    Floor {
        texture: i32,
    },
    Ceiling {
        texture: i32,
    },
    Chasm {
        texture: i32,
        kind: ChasmKind,
    },
    Raised {
        side_texture: i32,
        floor_texture: i32,
        ceiling_texture: i32,
        y_offset: f64,
        y_size: f64,
        v_top: f64,
        v_bottom: f64,
    },
    Diagonal {
        texture: i32,
        is_right_facing: bool,
    },
    TransparentWall {
        texture: i32,
        is_collider: bool,
    },
    Edge {
        texture: i32,
        y_offset: f64,
        is_collider: bool,
        is_flipped: bool,
        facing: Facing,
    },
    Door {
        texture: i32,
        kind: DoorKind,
    },
}

impl Default for VoxelDefinition {
    fn default() -> Self {
        VoxelDefinition::Air
    }
}

impl VoxelDefinition {
    pub fn is_air(&self) -> bool {
        matches!(self, VoxelDefinition::Air)
    }

    /// *MENU ID for menu walls.
    pub fn menu_id(&self) -> Option<i32> {
        match self {
            VoxelDefinition::Wall {
                menu_id,
                kind: WallKind::Menu,
                ..
            } => *menu_id,
            _ => None,
        }
    }

    /// Texture shown on a face of the given axis. Y faces show the floor
    /// texture when the ray travels downward and the ceiling texture otherwise.
    pub fn face_texture(&self, axis: FaceAxis, ray_moving_up: bool) -> Option<i32> {
        let pick_y = |floor: i32, ceiling: i32, side: i32| match axis {
            FaceAxis::Y if ray_moving_up => ceiling,
            FaceAxis::Y => floor,
            FaceAxis::X | FaceAxis::Z => side,
        };

        match self {
            VoxelDefinition::Air => None,
            VoxelDefinition::Wall {
                side_texture,
                floor_texture,
                ceiling_texture,
                ..
            }
            | VoxelDefinition::Raised {
                side_texture,
                floor_texture,
                ceiling_texture,
                ..
            } => Some(pick_y(*floor_texture, *ceiling_texture, *side_texture)),
            VoxelDefinition::Floor { texture }
            | VoxelDefinition::Ceiling { texture }
            | VoxelDefinition::Chasm { texture, .. }
            | VoxelDefinition::Diagonal { texture, .. }
            | VoxelDefinition::TransparentWall { texture, .. }
            | VoxelDefinition::Edge { texture, .. }
            | VoxelDefinition::Door { texture, .. } => Some(*texture),
        }
    }

    /// Whether a neighbouring chasm should draw a wall face against this voxel.
    pub fn allows_chasm_face(&self) -> bool {
        match self {
            VoxelDefinition::Air | VoxelDefinition::Chasm { .. } => false,
            VoxelDefinition::Wall { .. }
            | VoxelDefinition::Floor { .. }
            | VoxelDefinition::Ceiling { .. }
            | VoxelDefinition::Raised { .. }
            | VoxelDefinition::Diagonal { .. }
            | VoxelDefinition::TransparentWall { .. }
            | VoxelDefinition::Edge { .. }
            | VoxelDefinition::Door { .. } => true,
        }
    }
}
