//! Legacy tile decoding
//!
//! Pure functions from one packed 16-bit code to a voxel definition. Nothing
//! here fails: missing parameters fall back to index 0 and malformed codes
//! come back as `DecodedTile::Rejected`, each with one warning.

use super::generation_tables::WallHeightTables;
use super::parameter_table::ParameterTable;
use crate::constants::legacy::{
    ARENA_UNITS, DEFAULT_CEILING_TEXTURE, DEFAULT_WILD_BOX_SCALE, DRY_CHASM, LAVA_CHASM,
    WET_CHASM, WILD_BOX_SIZE,
};
use crate::world::core::{ChasmKind, DoorKind, Facing, VoxelDefinition, WallKind, WorldType};

/// Result of decoding a MAP1 or MAP2 code
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedTile {
    /// Code 0: nothing in this cell.
    Empty,
    Voxel(VoxelDefinition),
    /// The code places a flat, not a voxel.
    Entity { flat_index: i32 },
    /// Malformed or unrecognised; the cell stays air.
    Rejected,
}

/// A FLOR code always yields a floor or chasm, and may also place a flat.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFloorTile {
    pub voxel: VoxelDefinition,
    pub flat_index: Option<i32>,
}

fn most_sig_byte(code: u16) -> u8 {
    ((code & 0x7F00) >> 8) as u8
}

fn least_sig_byte(code: u16) -> u8 {
    (code & 0x007F) as u8
}

fn or_default(value: Option<i32>, what: &str) -> i32 {
    value.unwrap_or_else(|| {
        log::warn!("[TileDecoder] Missing {}, using 0", what);
        0
    })
}

pub fn decode_floor_tile(code: u16, inf: &ParameterTable) -> DecodedFloorTile {
    let selector = (code & 0xFF00) >> 8;
    let voxel = match selector {
        DRY_CHASM => VoxelDefinition::Chasm {
            texture: or_default(inf.dry_chasm_index, "*DRYCHASM"),
            kind: ChasmKind::Dry,
        },
        WET_CHASM => VoxelDefinition::Chasm {
            texture: or_default(inf.wet_chasm_index, "*WETCHASM"),
            kind: ChasmKind::Wet,
        },
        LAVA_CHASM => VoxelDefinition::Chasm {
            texture: or_default(inf.lava_chasm_index, "*LAVACHASM"),
            kind: ChasmKind::Lava,
        },
        texture => VoxelDefinition::Floor {
            texture: texture as i32,
        },
    };

    let flat = (code & 0x00FF) as i32;
    DecodedFloorTile {
        voxel,
        flat_index: (flat > 0).then(|| flat - 1),
    }
}

/// Decode a MAP1 code. Raised platform geometry depends on `world_type`.
pub fn decode_wall_tile(
    code: u16,
    world_type: WorldType,
    inf: &ParameterTable,
    wall_heights: &WallHeightTables,
) -> DecodedTile {
    if code == 0 {
        return DecodedTile::Empty;
    }

    if (code & 0x8000) == 0 {
        let most_sig = most_sig_byte(code);
        if most_sig == least_sig_byte(code) {
            return decode_solid_wall(code, most_sig, inf);
        }
        return DecodedTile::Voxel(decode_raised_platform(
            code,
            most_sig,
            world_type,
            inf,
            wall_heights,
        ));
    }

    match (code & 0xF000) >> 12 {
        0x8 => DecodedTile::Entity {
            flat_index: (code & 0x00FF) as i32,
        },
        0x9 => {
            let texture = (code & 0x00FF) as i32 - 1;
            if texture < 0 {
                log::warn!("[TileDecoder] Invalid texture for type 0x9 voxel {:#06X}", code);
                return DecodedTile::Rejected;
            }
            DecodedTile::Voxel(VoxelDefinition::TransparentWall {
                texture,
                is_collider: (code & 0x0100) == 0,
            })
        }
        0xA => decode_edge(code, world_type),
        0xB => {
            let texture = (code & 0x003F) as i32 - 1;
            if texture < 0 {
                log::warn!("[TileDecoder] Invalid texture for door voxel {:#06X}", code);
                return DecodedTile::Rejected;
            }
            let kind = match (code & 0x00C0) >> 4 {
                0x0 => DoorKind::Swinging,
                0x4 => DoorKind::Sliding,
                0x8 => DoorKind::Raising,
                other => {
                    log::warn!(
                        "[TileDecoder] Unrecognized door type {:#X}, treating as splitting",
                        other
                    );
                    DoorKind::Splitting
                }
            };
            DecodedTile::Voxel(VoxelDefinition::Door { texture, kind })
        }
        0xD => {
            let texture = (code & 0x00FF) as i32 - 1;
            if texture < 0 {
                log::warn!("[TileDecoder] Invalid texture for diagonal voxel {:#06X}", code);
                return DecodedTile::Rejected;
            }
            DecodedTile::Voxel(VoxelDefinition::Diagonal {
                texture,
                is_right_facing: (code & 0x0100) == 0,
            })
        }
        nibble => {
            log::warn!(
                "[TileDecoder] Unrecognized voxel type {:#X} in code {:#06X}",
                nibble,
                code
            );
            DecodedTile::Rejected
        }
    }
}

fn decode_solid_wall(code: u16, most_sig: u8, inf: &ParameterTable) -> DecodedTile {
    let texture = most_sig as i32 - 1;
    if texture < 0 {
        log::warn!("[TileDecoder] Invalid wall texture in code {:#06X}", code);
        return DecodedTile::Rejected;
    }

    let menu_id = inf.menu_index(texture);
    let kind = if inf.level_up_index == Some(texture) {
        WallKind::LevelUp
    } else if inf.level_down_index == Some(texture) {
        WallKind::LevelDown
    } else if menu_id.is_some() {
        WallKind::Menu
    } else {
        WallKind::Solid
    };

    DecodedTile::Voxel(VoxelDefinition::Wall {
        side_texture: texture,
        floor_texture: texture,
        ceiling_texture: texture,
        menu_id,
        kind,
    })
}

fn decode_raised_platform(
    code: u16,
    most_sig: u8,
    world_type: WorldType,
    inf: &ParameterTable,
    wall_heights: &WallHeightTables,
) -> VoxelDefinition {
    let side_index = (code & 0x000F) as i32;
    let cap_index = ((code & 0x00F0) >> 4) as i32;

    let side_texture = inf.box_side(side_index).unwrap_or_else(|| {
        log::warn!("[TileDecoder] Missing *BOXSIDE {} for raised platform", side_index);
        0
    });
    let floor_texture = inf.ceiling.texture_index.unwrap_or_else(|| {
        log::warn!("[TileDecoder] Missing *CEILING texture for raised platform floor");
        0
    });
    let ceiling_texture = inf.box_cap(cap_index).unwrap_or_else(|| {
        log::warn!("[TileDecoder] Missing *BOXCAP {} for raised platform", cap_index);
        0
    });

    let height_index = (most_sig & 0x07) as usize;
    let thickness_index = ((most_sig & 0x78) >> 3) as usize;

    let (base_offset, base_size) = match world_type {
        WorldType::Interior => {
            let box_size = wall_heights.box2a[thickness_index];
            let size = match inf.ceiling.box_scale {
                Some(scale) => (box_size * scale) / 256,
                None => box_size,
            };
            (wall_heights.box1a[height_index], size)
        }
        WorldType::City => (
            wall_heights.box1b[height_index],
            wall_heights.box2b[thickness_index],
        ),
        WorldType::Wilderness => {
            let scale = inf.ceiling.box_scale.unwrap_or(DEFAULT_WILD_BOX_SCALE);
            (
                wall_heights.box1c[height_index],
                (WILD_BOX_SIZE * scale) / 256,
            )
        }
    };

    let normalized_scale = inf.ceiling_scale();
    let y_offset = (base_offset as f64 / ARENA_UNITS) / normalized_scale;
    let y_size = (base_size as f64 / ARENA_UNITS) / normalized_scale;
    let v_top = (1.0 - y_offset - y_size).max(0.0);
    let v_bottom = (v_top + y_size).min(1.0);

    VoxelDefinition::Raised {
        side_texture,
        floor_texture,
        ceiling_texture,
        y_offset,
        y_size,
        v_top,
        v_bottom,
    }
}

fn decode_edge(code: u16, world_type: WorldType) -> DecodedTile {
    // A central-province temple tile carries texture 0 here.
    let texture = (code & 0x003F) as i32 - 1;
    if texture < 0 {
        log::warn!(
            "[TileDecoder] Invalid texture index {} for type 0xA voxel, skipping",
            texture
        );
        return DecodedTile::Rejected;
    }

    let base_offset = ((code & 0x0E00) >> 9) as i32;
    let full_offset = match world_type {
        WorldType::Interior => base_offset * 8,
        WorldType::City | WorldType::Wilderness => (base_offset * 32) - 8,
    };

    let is_collider = (code & 0x0100) != 0;
    let facing = match (code & 0x00C0) >> 4 {
        0x0 => Facing::North,
        0x4 => Facing::West,
        0x8 => Facing::South,
        _ => Facing::East,
    };

    DecodedTile::Voxel(VoxelDefinition::Edge {
        texture,
        y_offset: full_offset as f64 / ARENA_UNITS,
        is_collider,
        // Colliding edges are mirrored so their texture lines up with solid walls.
        is_flipped: is_collider,
        facing,
    })
}

/// Number of grid layers a MAP2 code fills, starting at the ceiling layer.
pub fn map2_voxel_height(code: u16) -> usize {
    if (code & 0x8080) == 0x8080 {
        4
    } else if (code & 0x8000) != 0 {
        3
    } else if (code & 0x0080) != 0 {
        2
    } else {
        1
    }
}

/// Decode a MAP2 code. Always a plain solid wall; *MENU never applies.
pub fn decode_ceiling_tile(code: u16) -> DecodedTile {
    if code == 0 {
        return DecodedTile::Empty;
    }

    let texture = (code & 0x007F) as i32 - 1;
    if texture < 0 {
        log::warn!("[TileDecoder] Invalid MAP2 texture in code {:#06X}", code);
        return DecodedTile::Rejected;
    }

    DecodedTile::Voxel(VoxelDefinition::Wall {
        side_texture: texture,
        floor_texture: texture,
        ceiling_texture: texture,
        menu_id: None,
        kind: WallKind::Solid,
    })
}

/// Ceiling block replicated over levels that have no MAP2 layer
pub fn make_synthetic_ceiling(inf: &ParameterTable) -> VoxelDefinition {
    VoxelDefinition::Ceiling {
        texture: inf.ceiling.texture_index.unwrap_or(DEFAULT_CEILING_TEXTURE),
    }
}
