//! 3D-DDA ray traversal over a VoxelGridData
//!
//! Amanatides-Woo stepping extended to three axes. The Y axis steps in units
//! of the grid's voxel height. A zero direction component gives an infinite
//! delta distance on that axis so it is never chosen as the next step.

use super::renderer_data::RayCastResult;
use super::texture_cache_data::TextureCacheData;
use super::texture_cache_operations::{get_texture, sample_texture};
use crate::constants::render::DIAGNOSTIC_COLOR;
use crate::world::core::{FaceAxis, LevelVoxel, Ray, AIR_VOXEL_ID};
use crate::world::storage::VoxelGridData;
use cgmath::{Point3, Vector3};

/// Distance covered along the ray per `step` world units on one axis
fn delta_distance(component: f64, step: f64) -> f64 {
    if component == 0.0 {
        f64::INFINITY
    } else {
        step / component.abs()
    }
}

/// Initial side distance. An infinite delta stays infinite even when the
/// eye sits exactly on a cell boundary.
fn side_distance(gap: f64, delta: f64) -> f64 {
    if delta.is_infinite() {
        f64::INFINITY
    } else {
        gap * delta
    }
}

/// Smallest of three side distances, X winning only when strictly smallest
/// and Y only when strictly below Z.
fn nearest_axis(side: [f64; 3]) -> FaceAxis {
    if side[0] < side[1] && side[0] < side[2] {
        FaceAxis::X
    } else if side[1] < side[2] {
        FaceAxis::Y
    } else {
        FaceAxis::Z
    }
}

fn miss(origin: Point3<f64>) -> RayCastResult {
    RayCastResult {
        hit: false,
        voxel_id: AIR_VOXEL_ID,
        voxel: LevelVoxel::new(origin.x.floor() as i32, 0, origin.z.floor() as i32),
        face_axis: FaceAxis::X,
        distance: f64::INFINITY,
        u: 0.0,
        v: 0.0,
        back_face: false,
        ray_moving_up: false,
    }
}

/// Walk `grid` from `origin` along `direction` until a non-air voxel, the
/// grid edge, or `view_distance` stops the ray.
pub fn cast_ray(
    grid: &VoxelGridData,
    origin: Point3<f64>,
    direction: Vector3<f64>,
    view_distance: f64,
) -> RayCastResult {
    let ray = Ray::new(origin, direction);
    let dir = ray.direction;
    if dir.x == 0.0 && dir.y == 0.0 && dir.z == 0.0 {
        return miss(origin);
    }

    let eye = origin;
    let voxel_height = grid.voxel_height;
    let start_cell = [
        eye.x.floor() as i32,
        (eye.y / voxel_height).floor() as i32,
        eye.z.floor() as i32,
    ];
    let start_real = [
        start_cell[0] as f64,
        start_cell[1] as f64,
        start_cell[2] as f64,
    ];
    let eye_y_floor = start_real[1] * voxel_height;

    let delta = [
        delta_distance(dir.x, 1.0),
        delta_distance(dir.y, voxel_height),
        delta_distance(dir.z, 1.0),
    ];
    let non_negative = [dir.x >= 0.0, dir.y >= 0.0, dir.z >= 0.0];
    let step = [
        if non_negative[0] { 1 } else { -1 },
        if non_negative[1] { 1 } else { -1 },
        if non_negative[2] { 1 } else { -1 },
    ];

    // Side gaps in world units; delta[1] already carries the voxel height.
    let gap = |axis: usize, eye_coord: f64, floor: f64, size: f64| {
        if non_negative[axis] {
            (floor + size - eye_coord) / size
        } else {
            (eye_coord - floor) / size
        }
    };
    let mut side = [
        side_distance(gap(0, eye.x, start_real[0], 1.0), delta[0]),
        side_distance(gap(1, eye.y, eye_y_floor, voxel_height), delta[1]),
        side_distance(gap(2, eye.z, start_real[2], 1.0), delta[2]),
    ];
    let initial_side = side;

    // Culling offsets in world units, so the Y axis carries the voxel height.
    let cell_size = [1.0, voxel_height, 1.0];
    let start_floor = [start_real[0], eye_y_floor, start_real[2]];
    let start_with_offset: [f64; 3] = std::array::from_fn(|k| {
        start_floor[k] + (cell_size[k] + step[k] as f64 * cell_size[k]) / 2.0
    });
    let cell_offset: [f64; 3] =
        std::array::from_fn(|k| (cell_size[k] - step[k] as f64 * cell_size[k]) / 2.0);

    let dims = [grid.width as i32, grid.height as i32, grid.depth as i32];
    let mut cell = start_cell;
    let mut valid = (0..3).all(|i| cell[i] >= 0 && cell[i] < dims[i]);
    let mut axis = FaceAxis::X;
    let mut hit_id = AIR_VOXEL_ID;
    let mut cell_dist_sq = 0.0;
    let view_dist_sq = view_distance * view_distance;

    while valid && cell_dist_sq < view_dist_sq {
        let index = cell[0] as usize
            + cell[1] as usize * grid.width
            + cell[2] as usize * grid.width * grid.height;
        let id = grid.voxels[index];
        if id != AIR_VOXEL_ID {
            hit_id = id;
            break;
        }

        axis = nearest_axis(side);
        let i = match axis {
            FaceAxis::X => 0,
            FaceAxis::Y => 1,
            FaceAxis::Z => 2,
        };
        side[i] += delta[i];
        cell[i] += step[i];
        valid &= cell[i] >= 0 && cell[i] < dims[i];

        // Corner offsets keep max-view-distance culling unbiased per direction.
        cell_dist_sq = (0..3)
            .map(|k| {
                let diff = (cell[k] as f64 * cell_size[k] + cell_offset[k]) - start_with_offset[k];
                diff * diff
            })
            .sum();
    }

    if hit_id == AIR_VOXEL_ID {
        return miss(origin);
    }

    let stopped_in_first_voxel = cell == start_cell;
    let distance = if stopped_in_first_voxel {
        axis = nearest_axis(initial_side);
        match axis {
            FaceAxis::X => initial_side[0],
            FaceAxis::Y => initial_side[1],
            FaceAxis::Z => initial_side[2],
        }
    } else {
        match axis {
            FaceAxis::X => (cell[0] as f64 - eye.x + cell_offset[0]) / dir.x,
            FaceAxis::Y => {
                ((cell[1] as f64 * voxel_height) - eye.y + cell_offset[1]) / dir.y
            }
            FaceAxis::Z => (cell[2] as f64 - eye.z + cell_offset[2]) / dir.z,
        }
    };

    let hit_point = ray.point_at(distance);
    let back_face = stopped_in_first_voxel;
    let fract = |value: f64| value - value.floor();
    let (u, v) = match axis {
        FaceAxis::X => {
            let u_val = fract(hit_point.z);
            let u = if non_negative[0] ^ back_face { u_val } else { 1.0 - u_val };
            (u, 1.0 - (hit_point.y % voxel_height) / voxel_height)
        }
        FaceAxis::Y => {
            let v_val = fract(hit_point.x);
            let v = if non_negative[1] ^ back_face { v_val } else { 1.0 - v_val };
            (fract(hit_point.z), v)
        }
        FaceAxis::Z => {
            let u_val = fract(hit_point.x);
            let u = if non_negative[2] ^ back_face { 1.0 - u_val } else { u_val };
            (u, 1.0 - (hit_point.y % voxel_height) / voxel_height)
        }
    };

    RayCastResult {
        hit: true,
        voxel_id: hit_id,
        voxel: LevelVoxel::new(cell[0], cell[1], cell[2]),
        face_axis: axis,
        distance,
        u,
        v,
        back_face,
        ray_moving_up: dir.y > 0.0,
    }
}

fn lerp(from: [f64; 3], to: [f64; 3], t: f64) -> [f64; 3] {
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}

/// Color for a cast result: fog on a miss, the diagnostic color when the
/// texel cannot be sampled, otherwise the texel blended into fog by depth.
pub fn shade_ray_result(
    result: &RayCastResult,
    grid: &VoxelGridData,
    textures: &TextureCacheData,
    view_distance: f64,
    fog_color: [f64; 3],
) -> [f64; 3] {
    if !result.hit || view_distance <= 0.0 {
        return fog_color;
    }

    let texel = grid
        .definitions
        .get(result.voxel_id as usize)
        .and_then(|definition| definition.face_texture(result.face_axis, result.ray_moving_up))
        .and_then(|texture_id| get_texture(textures, texture_id))
        .and_then(|texture| sample_texture(texture, result.u, result.v));

    match texel {
        Some(color) => {
            let depth = result.distance.min(view_distance) / view_distance;
            lerp(color, fog_color, depth)
        }
        None => DIAGNOSTIC_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::render::FOG_COLOR;
    use crate::renderer::texture_cache_operations::{add_texture, create_texture_cache};
    use crate::world::core::VoxelDefinition;
    use crate::world::storage::{add_voxel_definition, create_voxel_grid, set_voxel};

    fn wall(texture: i32) -> VoxelDefinition {
        VoxelDefinition::Wall {
            side_texture: texture,
            floor_texture: texture,
            ceiling_texture: texture,
            menu_id: None,
            kind: crate::world::core::WallKind::Solid,
        }
    }

    /// 3x1x1 corridor with a solid voxel at x = 1
    fn corridor() -> VoxelGridData {
        let mut grid = create_voxel_grid(3, 1, 1, 1.0).expect("dims");
        let id = add_voxel_definition(&mut grid, wall(0)).expect("room");
        set_voxel(&mut grid, 1, 0, 0, id).expect("in bounds");
        grid
    }

    fn white_texture() -> TextureCacheData {
        let mut cache = create_texture_cache();
        add_texture(&mut cache, 0, 4, 4, &[0xFFFFFFFF; 16]).expect("valid texture");
        cache
    }

    #[test]
    fn test_hit_distance_along_x() {
        let grid = corridor();
        let result = cast_ray(&grid, Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 10.0);

        assert!(result.hit);
        assert_eq!(result.face_axis, FaceAxis::X);
        assert!((result.distance - 0.5).abs() < 1e-12);
        assert_eq!(result.voxel, LevelVoxel::new(1, 0, 0));
        assert!(!result.back_face);
        assert!((result.u - 0.5).abs() < 1e-12);
        assert!((result.v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_view_distance_is_fog() {
        let grid = corridor();
        let textures = white_texture();
        let result = cast_ray(&grid, Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 0.0);

        assert!(!result.hit);
        assert_eq!(shade_ray_result(&result, &grid, &textures, 0.0, FOG_COLOR), FOG_COLOR);
    }

    #[test]
    fn test_zero_components_never_nan() {
        let grid = corridor();
        let directions = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(0.0, -1.0, 1.0),
        ];
        // Eye on exact cell boundaries as well as cell centres
        for origin in [Point3::new(0.5, 0.5, 0.5), Point3::new(2.0, 0.0, 0.0)] {
            for direction in directions {
                let result = cast_ray(&grid, origin, direction, 10.0);
                assert!(!result.distance.is_nan());
                assert!(!result.u.is_nan());
                assert!(!result.v.is_nan());
            }
        }
    }

    #[test]
    fn test_zero_direction_misses() {
        let grid = corridor();
        let result = cast_ray(&grid, Point3::new(0.5, 0.5, 0.5), Vector3::new(0.0, 0.0, 0.0), 10.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_view_distance_culls_far_voxels() {
        let mut grid = create_voxel_grid(8, 1, 1, 1.0).expect("dims");
        let id = add_voxel_definition(&mut grid, wall(0)).expect("room");
        set_voxel(&mut grid, 6, 0, 0, id).expect("in bounds");

        let origin = Point3::new(0.5, 0.5, 0.5);
        let direction = Vector3::new(1.0, 0.0, 0.0);
        assert!(!cast_ray(&grid, origin, direction, 2.0).hit);
        assert!(cast_ray(&grid, origin, direction, 10.0).hit);
    }

    #[test]
    fn test_eye_inside_solid_voxel_hits_back_face() {
        let grid = corridor();
        let result = cast_ray(&grid, Point3::new(1.25, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 10.0);

        assert!(result.hit);
        assert!(result.back_face);
        assert_eq!(result.face_axis, FaceAxis::X);
        assert!((result.distance - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_leaving_grid_is_a_miss() {
        let grid = corridor();
        let result = cast_ray(&grid, Point3::new(0.5, 0.5, 0.5), Vector3::new(-1.0, 0.0, 0.0), 10.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_floor_hit_with_tall_voxels() {
        let mut grid = create_voxel_grid(1, 3, 1, 2.0).expect("dims");
        let id = add_voxel_definition(&mut grid, VoxelDefinition::Floor { texture: 0 }).expect("room");
        set_voxel(&mut grid, 0, 0, 0, id).expect("in bounds");

        // Eye in layer 1 (y in [2, 4)), looking straight down onto the floor top at y = 2
        let result = cast_ray(&grid, Point3::new(0.5, 3.0, 0.5), Vector3::new(0.0, -1.0, 0.0), 10.0);
        assert!(result.hit);
        assert_eq!(result.face_axis, FaceAxis::Y);
        assert!((result.distance - 1.0).abs() < 1e-12);
        assert!(!result.ray_moving_up);
    }

    #[test]
    fn test_view_distance_culls_tall_voxels() {
        let mut grid = create_voxel_grid(1, 5, 1, 2.0).expect("dims");
        let id = add_voxel_definition(&mut grid, wall(0)).expect("room");
        // Layer 3 spans y in [6, 8), so its bottom face is 5 units above the eye
        set_voxel(&mut grid, 0, 3, 0, id).expect("in bounds");

        let origin = Point3::new(0.5, 1.0, 0.5);
        let up = Vector3::new(0.0, 1.0, 0.0);
        assert!(!cast_ray(&grid, origin, up, 3.0).hit);

        let result = cast_ray(&grid, origin, up, 10.0);
        assert!(result.hit);
        assert_eq!(result.voxel, LevelVoxel::new(0, 3, 0));
        assert!((result.distance - 5.0).abs() < 1e-12);
        assert!(result.ray_moving_up);
    }

    #[test]
    fn test_x_face_texture_coordinates() {
        let grid = corridor();

        let east = cast_ray(&grid, Point3::new(0.5, 0.25, 0.2), Vector3::new(1.0, 0.0, 0.0), 10.0);
        assert!(east.hit);
        assert_eq!(east.face_axis, FaceAxis::X);
        assert!((east.u - 0.2).abs() < 1e-12);
        assert!((east.v - 0.75).abs() < 1e-12);

        // Approaching from the other side mirrors U
        let west = cast_ray(&grid, Point3::new(2.5, 0.25, 0.2), Vector3::new(-1.0, 0.0, 0.0), 10.0);
        assert!(west.hit);
        assert_eq!(west.voxel, LevelVoxel::new(1, 0, 0));
        assert!((west.distance - 0.5).abs() < 1e-12);
        assert!((west.u - 0.8).abs() < 1e-12);
        assert!((west.v - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_back_face_mirrors_u() {
        let grid = corridor();
        let result = cast_ray(&grid, Point3::new(1.25, 0.5, 0.2), Vector3::new(1.0, 0.0, 0.0), 10.0);

        assert!(result.back_face);
        assert!((result.u - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_z_face_texture_coordinates() {
        let mut grid = create_voxel_grid(1, 1, 3, 1.0).expect("dims");
        let id = add_voxel_definition(&mut grid, wall(0)).expect("room");
        set_voxel(&mut grid, 0, 0, 1, id).expect("in bounds");

        let south = cast_ray(&grid, Point3::new(0.3, 0.5, 0.5), Vector3::new(0.0, 0.0, 1.0), 10.0);
        assert!(south.hit);
        assert_eq!(south.face_axis, FaceAxis::Z);
        assert!((south.distance - 0.5).abs() < 1e-12);
        assert!((south.u - 0.7).abs() < 1e-12);

        let north = cast_ray(&grid, Point3::new(0.3, 0.5, 2.5), Vector3::new(0.0, 0.0, -1.0), 10.0);
        assert!(north.hit);
        assert_eq!(north.face_axis, FaceAxis::Z);
        assert!((north.u - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_y_face_texture_coordinates() {
        let mut grid = create_voxel_grid(1, 3, 1, 2.0).expect("dims");
        let id = add_voxel_definition(&mut grid, VoxelDefinition::Floor { texture: 0 }).expect("room");
        set_voxel(&mut grid, 0, 0, 0, id).expect("in bounds");

        let result = cast_ray(&grid, Point3::new(0.3, 3.0, 0.6), Vector3::new(0.0, -1.0, 0.0), 10.0);
        assert!(result.hit);
        assert_eq!(result.face_axis, FaceAxis::Y);
        assert!((result.u - 0.6).abs() < 1e-12);
        assert!((result.v - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_shading_blends_into_fog() {
        let grid = corridor();
        let textures = white_texture();
        let result = cast_ray(&grid, Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 2.0);
        let color = shade_ray_result(&result, &grid, &textures, 2.0, FOG_COLOR);

        // depth 0.25 of the way from white to fog
        for channel in 0..3 {
            let expected = 1.0 + (FOG_COLOR[channel] - 1.0) * 0.25;
            assert!((color[channel] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_missing_texture_is_diagnostic() {
        let grid = corridor();
        let result = cast_ray(&grid, Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 10.0);
        let color = shade_ray_result(&result, &grid, &create_texture_cache(), 10.0, FOG_COLOR);
        assert_eq!(color, DIAGNOSTIC_COLOR);
    }
}
