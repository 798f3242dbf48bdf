//! Runtime Overlay Operations - Pure DOP Functions

use super::runtime_data::{ChasmState, DoorAnimation, DoorState, FadeState, LevelRuntimeData};
use crate::constants::legacy::ARENA_UNITS;
use crate::constants::runtime::{DEFAULT_DOOR_SPEED, DEFAULT_FADE_SECONDS};
use crate::error::EngineResult;
use crate::legacy::ParameterTable;
use crate::world::core::{Facing, LevelVoxel, VoxelDefinition};
use crate::world::level::{get_level_voxel, get_voxel_def, LevelDefinition, LevelInfoDefinition};
use crate::world::storage::{create_voxel_grid, VoxelGridData};

// ============================================================================
// DOORS
// ============================================================================

/// Closed door that starts opening
pub fn open_door(voxel: LevelVoxel) -> DoorState {
    DoorState {
        voxel,
        speed: DEFAULT_DOOR_SPEED,
        percent_open: 0.0,
        animation: DoorAnimation::Opening,
    }
}

pub fn close_door(door: &mut DoorState) {
    if door.percent_open > 0.0 {
        door.animation = DoorAnimation::Closing;
    }
}

/// Advance a door by `dt` seconds. Returns false once the door is fully
/// closed and its overlay can be dropped.
pub fn update_door(door: &mut DoorState, dt: f64) -> bool {
    let delta = door.speed * dt;
    match door.animation {
        DoorAnimation::Opening => {
            door.percent_open = (door.percent_open + delta).min(1.0);
            if door.percent_open >= 1.0 {
                door.animation = DoorAnimation::None;
            }
            true
        }
        DoorAnimation::Closing => {
            door.percent_open = (door.percent_open - delta).max(0.0);
            door.percent_open > 0.0
        }
        DoorAnimation::None => true,
    }
}

// ============================================================================
// FADING VOXELS
// ============================================================================

pub fn start_fade(voxel: LevelVoxel) -> FadeState {
    FadeState {
        voxel,
        seconds: 0.0,
        target_seconds: DEFAULT_FADE_SECONDS,
    }
}

pub fn update_fade(fade: &mut FadeState, dt: f64) {
    fade.seconds = (fade.seconds + dt).min(fade.target_seconds);
}

/// 0.0 when the fade starts, 1.0 once the voxel is gone.
pub fn fade_percent(fade: &FadeState) -> f64 {
    if fade.target_seconds > 0.0 {
        fade.seconds / fade.target_seconds
    } else {
        1.0
    }
}

pub fn is_fade_complete(fade: &FadeState) -> bool {
    fade.seconds >= fade.target_seconds
}

// ============================================================================
// CHASMS
// ============================================================================

pub fn chasm_face_visible(state: &ChasmState, facing: Facing) -> bool {
    match facing {
        Facing::North => state.north,
        Facing::South => state.south,
        Facing::East => state.east,
        Facing::West => state.west,
    }
}

/// Visible walls plus the chasm floor.
pub fn chasm_face_count(state: &ChasmState) -> usize {
    1 + [state.north, state.south, state.east, state.west]
        .iter()
        .filter(|&&visible| visible)
        .count()
}

/// Faces of the chasm at `voxel`, or `None` when it is not a chasm. A wall
/// is drawn toward every neighbour that allows a chasm face.
pub fn compute_chasm_state(
    level: &LevelDefinition,
    info: &LevelInfoDefinition,
    voxel: LevelVoxel,
) -> EngineResult<Option<ChasmState>> {
    let own = get_voxel_def(info, get_level_voxel(level, voxel.x, voxel.y, voxel.z))?;
    if !matches!(own, VoxelDefinition::Chasm { .. }) {
        return Ok(None);
    }

    let face = |dx: i32, dz: i32| -> EngineResult<bool> {
        let id = get_level_voxel(level, voxel.x + dx, voxel.y, voxel.z + dz);
        Ok(get_voxel_def(info, id)?.allows_chasm_face())
    };

    Ok(Some(ChasmState {
        north: face(-1, 0)?,
        south: face(1, 0)?,
        east: face(0, -1)?,
        west: face(0, 1)?,
    }))
}

/// Chasm overlays for every chasm voxel on the floor layer.
pub fn build_level_runtime(
    level: &LevelDefinition,
    info: &LevelInfoDefinition,
) -> EngineResult<LevelRuntimeData> {
    let mut runtime = LevelRuntimeData::default();
    for z in 0..level.depth as i32 {
        for x in 0..level.width as i32 {
            let voxel = LevelVoxel::new(x, 0, z);
            if let Some(state) = compute_chasm_state(level, info, voxel)? {
                runtime.chasms.push((voxel, state));
            }
        }
    }

    log::debug!(
        "[runtime::build_level_runtime] {} chasm voxel(s)",
        runtime.chasms.len()
    );
    Ok(runtime)
}

// ============================================================================
// GRID RESOLUTION
// ============================================================================

/// Voxel height of a level in world units: ceiling height over 128.
pub fn ceiling_height(inf: &ParameterTable) -> f64 {
    inf.ceiling.height as f64 / ARENA_UNITS
}

/// Dense renderer grid for a level. Every voxel ID must exist in the
/// catalog.
pub fn build_voxel_grid(
    level: &LevelDefinition,
    info: &LevelInfoDefinition,
    voxel_height: f64,
) -> EngineResult<VoxelGridData> {
    let mut grid = create_voxel_grid(level.width, level.height, level.depth, voxel_height)?;

    if let Some(&bad) = level
        .voxels
        .iter()
        .find(|&&id| id as usize >= info.voxel_defs.len())
    {
        return Err(crate::error::EngineError::DefinitionOutOfRange {
            kind: "voxel".to_string(),
            id: bad as usize,
            count: info.voxel_defs.len(),
        });
    }

    grid.definitions = info.voxel_defs.clone();
    grid.voxels.copy_from_slice(&level.voxels);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::ChasmKind;
    use crate::world::level::{add_voxel_def, create_level_definition, create_level_info, set_level_voxel};
    use crate::world::storage::get_voxel;

    #[test]
    fn test_door_opens_then_closes() {
        let mut door = open_door(LevelVoxel::new(1, 1, 1));
        assert!((door.speed - 1.3).abs() < f64::EPSILON);

        assert!(update_door(&mut door, 0.5));
        assert!((door.percent_open - 0.65).abs() < 1e-12);
        assert!(update_door(&mut door, 1.0));
        assert_eq!(door.percent_open, 1.0);
        assert_eq!(door.animation, DoorAnimation::None);

        close_door(&mut door);
        assert!(update_door(&mut door, 0.5));
        assert!(!update_door(&mut door, 1.0));
        assert_eq!(door.percent_open, 0.0);
    }

    #[test]
    fn test_fade_progress() {
        let mut fade = start_fade(LevelVoxel::new(0, 1, 0));
        update_fade(&mut fade, 0.25);
        assert!((fade_percent(&fade) - 0.25).abs() < 1e-12);
        assert!(!is_fade_complete(&fade));
        update_fade(&mut fade, 5.0);
        assert!(is_fade_complete(&fade));
        assert_eq!(fade_percent(&fade), 1.0);
    }

    #[test]
    fn test_chasm_faces_follow_neighbours() {
        let mut level = create_level_definition(3, 3, 3).expect("dims");
        let mut info = create_level_info(1.0);
        let floor = add_voxel_def(&mut info, VoxelDefinition::Floor { texture: 1 }).expect("room");
        let chasm = add_voxel_def(
            &mut info,
            VoxelDefinition::Chasm {
                texture: 2,
                kind: ChasmKind::Lava,
            },
        )
        .expect("room");

        set_level_voxel(&mut level, 1, 0, 1, chasm).expect("in bounds");
        set_level_voxel(&mut level, 0, 0, 1, floor).expect("in bounds");
        set_level_voxel(&mut level, 2, 0, 1, chasm).expect("in bounds");
        set_level_voxel(&mut level, 1, 0, 2, floor).expect("in bounds");

        let state = compute_chasm_state(&level, &info, LevelVoxel::new(1, 0, 1))
            .expect("defined")
            .expect("is a chasm");
        assert!(state.north);
        assert!(!state.south);
        assert!(!state.east);
        assert!(state.west);
        assert!(chasm_face_visible(&state, Facing::West));
        assert_eq!(chasm_face_count(&state), 3);

        assert_eq!(
            compute_chasm_state(&level, &info, LevelVoxel::new(0, 0, 1)).expect("defined"),
            None
        );

        let runtime = build_level_runtime(&level, &info).expect("runtime");
        assert_eq!(runtime.chasms.len(), 2);
    }

    #[test]
    fn test_build_voxel_grid_copies_level() {
        let mut level = create_level_definition(2, 3, 4).expect("dims");
        let mut info = create_level_info(1.0);
        let wall = add_voxel_def(&mut info, VoxelDefinition::Floor { texture: 0 }).expect("room");
        set_level_voxel(&mut level, 1, 2, 3, wall).expect("in bounds");

        let grid = build_voxel_grid(&level, &info, 0.75).expect("grid");
        assert_eq!((grid.width, grid.height, grid.depth), (2, 3, 4));
        assert_eq!(get_voxel(&grid, 1, 2, 3), wall);
        assert_eq!(grid.definitions.len(), 2);
        assert!((grid.voxel_height - 0.75).abs() < f64::EPSILON);

        level.voxels[0] = 9;
        assert!(build_voxel_grid(&level, &info, 1.0).is_err());
    }

    #[test]
    fn test_ceiling_height_from_table() {
        let mut inf = ParameterTable::default();
        assert!((ceiling_height(&inf) - 100.0 / 128.0).abs() < 1e-12);
        inf.ceiling.height = 192;
        assert!((ceiling_height(&inf) - 1.5).abs() < 1e-12);
    }
}
