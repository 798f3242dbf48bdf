//! Generate levels from legacy layers, resolve them into voxel grids and
//! render them with the software renderer.

use arena_engine::camera::{init_camera, set_forward, set_view_distance};
use arena_engine::legacy::{ArenaRandom, LegacyLevel, LegacyTables, ParameterTable};
use arena_engine::renderer::{
    add_renderer_texture, cast_ray, create_software_renderer, pack_color, pixels, render,
    resize_renderer, set_renderer_camera,
};
use arena_engine::world::core::{InteriorType, WorldType};
use arena_engine::world::generation::{generate_dungeon, generate_prefab_levels, GenerationContext};
use arena_engine::world::runtime::{build_voxel_grid, ceiling_height};
use arena_engine::EngineConfig;
use cgmath::{Point3, Vector3};

const ROOM_SIZE: usize = 8;

fn wall_code(texture: u16) -> u16 {
    let byte = texture + 1;
    (byte << 8) | byte
}

/// Closed room: floor texture 1, walls texture 2 on the border, no MAP2 so
/// the generator adds a synthetic ceiling.
fn closed_room() -> LegacyLevel {
    let mut level = LegacyLevel::new(ROOM_SIZE, ROOM_SIZE);
    level.flor.fill(0x0100);
    for i in 0..ROOM_SIZE {
        level.map1.set(i, 0, wall_code(2)).expect("in bounds");
        level.map1.set(i, ROOM_SIZE - 1, wall_code(2)).expect("in bounds");
        level.map1.set(0, i, wall_code(2)).expect("in bounds");
        level.map1.set(ROOM_SIZE - 1, i, wall_code(2)).expect("in bounds");
    }
    level
}

fn interior_context<'a>(
    inf: &'a ParameterTable,
    tables: &'a LegacyTables,
    interior_type: InteriorType,
) -> GenerationContext<'a> {
    GenerationContext {
        world_type: WorldType::Interior,
        interior_type: Some(interior_type),
        ruler_is_male: None,
        inf,
        tables,
    }
}

#[test]
fn test_prefab_room_renders_without_fog() {
    let _ = env_logger::builder().is_test(true).try_init();

    let inf = ParameterTable::default();
    let tables = LegacyTables::default();
    let ctx = interior_context(&inf, &tables, InteriorType::House);
    let (levels, info) = generate_prefab_levels(&[closed_room()], &ctx).expect("generate");
    let voxel_height = ceiling_height(&inf);
    let grid = build_voxel_grid(&levels[0], &info, voxel_height).expect("grid");
    assert_eq!((grid.width, grid.height, grid.depth), (ROOM_SIZE, 3, ROOM_SIZE));

    let config = EngineConfig {
        render_width: 48,
        render_height: 30,
        render_threads: Some(3),
        ..EngineConfig::default()
    };
    let mut renderer = create_software_renderer(&config).expect("renderer");
    for (texture, color) in [(0, 0xFF808080u32), (1, 0xFFAA5500), (2, 0xFF2040C0), (3, 0xFF00FF00)] {
        add_renderer_texture(&mut renderer, texture, 1, 1, &[color]).expect("texture");
    }

    let eye = Point3::new(3.5, voxel_height * 1.5, 3.5);
    let camera = set_forward(&init_camera(eye), Vector3::new(1.0, 0.1, 0.4)).expect("forward");
    set_renderer_camera(&mut renderer, camera);
    render(&mut renderer, &grid).expect("render");

    // Every ray inside a sealed room ends on a floor, wall or ceiling.
    let fog = pack_color(config.fog_color);
    assert_eq!(pixels(&renderer).len(), 48 * 30);
    assert!(pixels(&renderer).iter().all(|&pixel| pixel != fog));

    // No view distance: the whole frame is fog.
    let camera = set_view_distance(&camera, 0.0).expect("zero view distance");
    set_renderer_camera(&mut renderer, camera);
    resize_renderer(&mut renderer, 17, 9).expect("resize");
    render(&mut renderer, &grid).expect("render");
    assert_eq!(pixels(&renderer).len(), 17 * 9);
    assert!(pixels(&renderer).iter().all(|&pixel| pixel == fog));
}

fn dungeon_chunk_pool() -> Vec<LegacyLevel> {
    (0..32u16)
        .map(|index| {
            let mut chunk = LegacyLevel::new(32, 32);
            chunk.flor.fill(0x0100 + ((index % 4) << 8));
            for i in 3..29 {
                chunk.map1.set(i, 3, wall_code(index % 3 + 1)).expect("in bounds");
            }
            chunk
        })
        .collect()
}

#[test]
fn test_dungeon_levels_resolve_to_grids() {
    let mut inf = ParameterTable::default();
    inf.level_up_index = Some(6);
    inf.level_down_index = Some(7);
    let tables = LegacyTables::default();
    let ctx = interior_context(&inf, &tables, InteriorType::Dungeon);

    let mut random = ArenaRandom::new(2024);
    let dungeon =
        generate_dungeon(&dungeon_chunk_pool(), 3, 2, 2, &mut random, &ctx).expect("generate");
    assert_eq!(dungeon.levels.len(), 3);

    let voxel_height = ceiling_height(&inf);
    let start = dungeon.start_point;
    for level in &dungeon.levels {
        let grid = build_voxel_grid(level, &dungeon.info, voxel_height).expect("grid");
        assert_eq!((grid.width, grid.depth), (64, 64));

        // A downward ray from the entry column stops at or above the floor layer.
        let eye = Point3::new(start.x as f64 + 0.5, voxel_height * 1.5, start.z as f64 + 0.5);
        let result = cast_ray(&grid, eye, Vector3::new(0.0, -1.0, 0.0), 10.0);
        assert!(result.hit);
        assert!(result.voxel.y <= 1);
    }
}
