use tilebound_engine::systems::tile_collision::slope_height;
use tilebound_engine::{
    Body, BodyClass, BodyHandle, Collider, PhysicsCore, PhysicsObject, Rect, TileGrid, TileType,
    Transform, Vec2,
};

/// Power-of-two step so test displacements stay exact in f32.
const DT: f32 = 1.0 / 64.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tiles(rows: &[&str]) -> TileGrid {
    TileGrid::from_ascii(Vec2::new(16.0, 16.0), rows).unwrap()
}

fn add_box(core: &mut PhysicsCore, x: f32, y: f32, w: f32, h: f32) -> BodyHandle {
    core.register_body(
        PhysicsObject::new("box", Body::new(1.0))
            .with_transform(Transform::new(Vec2::new(x, y)))
            .with_collider(Collider::new_box(Vec2::new(w, h))),
    )
}

fn add_floating_box(core: &mut PhysicsCore, x: f32, y: f32, w: f32, h: f32, velocity: Vec2) -> BodyHandle {
    let handle = add_box(core, x, y, w, h);
    let body = core.body_mut(handle).unwrap();
    body.set_use_gravity(false);
    body.set_velocity(velocity);
    handle
}

fn pos(core: &PhysicsCore, handle: BodyHandle) -> Vec2 {
    core.position(handle).unwrap()
}

#[test]
fn gravity_integrates_velocity_and_clears_force() {
    init_logging();
    let mut core = PhysicsCore::new();
    let light = add_box(&mut core, 0.0, 0.0, 8.0, 8.0);
    let heavy = core.register_body(
        PhysicsObject::new("heavy", Body::new(50.0))
            .with_transform(Transform::new(Vec2::new(100.0, 0.0)))
            .with_collider(Collider::new_box(Vec2::new(8.0, 8.0))),
    );

    core.update(1.0 / 60.0);

    for handle in [light, heavy] {
        let body = core.body(handle).unwrap();
        assert!((body.velocity().y - 980.0 / 60.0).abs() < 1e-3);
        assert_eq!(body.velocity().x, 0.0);
        assert_eq!(body.force(), Vec2::ZERO);
    }
}

#[test]
fn velocity_is_clamped_per_axis() {
    let mut core = PhysicsCore::new();
    let handle = add_box(&mut core, 0.0, 0.0, 8.0, 8.0);

    for force in [Vec2::new(1.0e6, -1.0e6), Vec2::new(-3.0e5, 2.0e5), Vec2::new(10.0, 10.0)] {
        core.body_mut(handle).unwrap().add_force(force);
        core.update(0.1);
        let v = core.body(handle).unwrap().velocity();
        assert!(v.x.abs() <= 500.0 && v.y.abs() <= 500.0, "{:?}", v);
    }

    core.set_max_speed(100.0);
    core.body_mut(handle).unwrap().add_force(Vec2::new(1.0e6, 0.0));
    core.update(0.1);
    assert_eq!(core.body(handle).unwrap().velocity().x, 100.0);
}

#[test]
fn solid_wall_stops_body_flush() {
    let mut core = PhysicsCore::new();
    core.register_tile_grid(tiles(&[
        "........#",
        "........#",
        "........#",
    ]));
    let handle = add_floating_box(&mut core, 100.0, 16.0, 16.0, 16.0, Vec2::new(256.0, 0.0));

    let mut stopped = false;
    for _ in 0..10 {
        core.update(DT);
        if core.body(handle).unwrap().collided_right() {
            stopped = true;
            break;
        }
    }

    assert!(stopped);
    let body = core.body(handle).unwrap();
    assert_eq!(body.velocity().x, 0.0);
    let aabb = core.world_aabb(handle).unwrap();
    assert_eq!(aabb.right(), 128.0);
}

#[test]
fn slope_height_is_monotonic_for_rising_slope() {
    let tile = Vec2::new(16.0, 16.0);
    assert_eq!(slope_height(TileType::Slope0_1, 0.0, tile), 0.0);
    assert_eq!(slope_height(TileType::Slope0_1, 16.0, tile), 16.0);

    let mut last = -1.0;
    for i in 0..=100 {
        let h = slope_height(TileType::Slope0_1, 16.0 * i as f32 / 100.0, tile);
        assert!(h >= last);
        last = h;
    }
}

#[test]
fn blocked_axis_does_not_veto_the_other() {
    let mut core = PhysicsCore::new();
    core.register_tile_grid(tiles(&[
        "....#....",
        "....#....",
        "....#....",
        "....#....",
    ]));
    let handle = add_floating_box(&mut core, 48.0, 8.0, 16.0, 16.0, Vec2::new(256.0, 256.0));

    core.update(DT);

    assert_eq!(pos(&core, handle), Vec2::new(48.0, 12.0));
    let body = core.body(handle).unwrap();
    assert!(body.collided_right());
    assert!(!body.collided_below());
    assert_eq!(body.velocity().y, 256.0);
}

#[test]
fn ladder_top_holds_walkers_but_not_climbers() {
    let rows = [".....", ".HH..", ".HH..", "#####"];

    let mut core = PhysicsCore::new();
    core.register_tile_grid(tiles(&rows));
    let walker = add_box(&mut core, 16.0, 0.0, 16.0, 16.0);
    core.update(DT);
    let body = core.body(walker).unwrap();
    assert!(body.collided_ladder_top());
    assert!(body.collided_below());
    assert_eq!(body.velocity().y, 0.0);
    assert_eq!(pos(&core, walker), Vec2::new(16.0, 0.0));

    let mut core = PhysicsCore::new();
    core.register_tile_grid(tiles(&rows));
    let climber = add_floating_box(&mut core, 16.0, 0.0, 16.0, 16.0, Vec2::new(0.0, 64.0));
    core.update(DT);
    let body = core.body(climber).unwrap();
    assert!(!body.collided_ladder_top());
    assert!(!body.collided_below());
    assert!(body.collided_ladder());
    assert_eq!(pos(&core, climber), Vec2::new(16.0, 1.0));
}

#[test]
fn dynamic_overlap_is_reported_not_resolved() {
    let mut core = PhysicsCore::new();
    let a = add_floating_box(&mut core, 0.0, 0.0, 16.0, 16.0, Vec2::ZERO);
    let b = add_floating_box(&mut core, 8.0, 8.0, 16.0, 16.0, Vec2::ZERO);

    let events = core.update(DT);
    assert_eq!(events.pairs().len(), 1);
    assert_eq!(events.pairs()[0].a, a);
    assert_eq!(events.pairs()[0].b, b);

    assert_eq!(pos(&core, a), Vec2::new(0.0, 0.0));
    assert_eq!(pos(&core, b), Vec2::new(8.0, 8.0));
}

#[test]
fn solid_body_pushes_dynamic_out() {
    let mut core = PhysicsCore::new();
    let ground = core.register_body(
        PhysicsObject::new("ground", {
            let mut body = Body::new(1.0);
            body.set_use_gravity(false);
            body
        })
        .with_class(BodyClass::Solid)
        .with_transform(Transform::new(Vec2::new(0.0, 20.0)))
        .with_collider(Collider::new_box(Vec2::new(64.0, 16.0))),
    );
    let player = add_box(&mut core, 10.0, 10.0, 16.0, 16.0);

    core.update(DT);

    assert!(core.collision_pairs().is_empty());
    let p = pos(&core, player);
    assert_eq!(p.x, 10.0);
    assert!((p.y - 4.0).abs() < 1e-4, "{:?}", p);

    let body = core.body(player).unwrap();
    assert!(body.collided_below());
    assert_eq!(body.velocity().y, 0.0);
    assert_eq!(pos(&core, ground), Vec2::new(0.0, 20.0));
}

#[test]
fn world_bounds_clamp_left_top_right_only() {
    let mut core = PhysicsCore::new();
    core.set_world_bounds(Some(Rect::new(0.0, 0.0, 320.0, 240.0)));

    let left = add_floating_box(&mut core, 2.0, 100.0, 16.0, 16.0, Vec2::new(-256.0, 0.0));
    let top = add_floating_box(&mut core, 100.0, 2.0, 16.0, 16.0, Vec2::new(0.0, -256.0));
    let right = add_floating_box(&mut core, 302.0, 100.0, 16.0, 16.0, Vec2::new(256.0, 0.0));
    let bottom = add_floating_box(&mut core, 200.0, 230.0, 16.0, 16.0, Vec2::new(0.0, 256.0));

    core.update(DT);

    assert_eq!(pos(&core, left).x, 0.0);
    assert!(core.body(left).unwrap().collided_left());
    assert_eq!(core.body(left).unwrap().velocity().x, 0.0);

    assert_eq!(pos(&core, top).y, 0.0);
    assert!(core.body(top).unwrap().collided_above());

    assert_eq!(pos(&core, right).x, 304.0);
    assert!(core.body(right).unwrap().collided_right());

    // Falling off the bottom is allowed
    for _ in 0..8 {
        core.update(DT);
    }
    assert_eq!(pos(&core, bottom).y, 266.0);
    assert!(!core.body(bottom).unwrap().collided_below());
    assert_eq!(core.body(bottom).unwrap().velocity().y, 256.0);
    assert_eq!(pos(&core, left).x, 0.0);
}

#[test]
fn hazard_spanning_four_cells_fires_once() {
    let mut core = PhysicsCore::new();
    core.register_tile_grid(tiles(&[
        "....",
        ".^^.",
        ".^^.",
        "....",
    ]));
    let handle = add_floating_box(&mut core, 20.0, 20.0, 24.0, 24.0, Vec2::ZERO);

    for _ in 0..3 {
        let events = core.update(DT);
        assert_eq!(events.tile_triggers().len(), 1);
        assert_eq!(events.tile_triggers()[0].body, handle);
        assert_eq!(events.tile_triggers()[0].tile_type, TileType::Hazard);
    }
}

#[test]
fn hazards_on_two_grids_still_fire_once() {
    let mut core = PhysicsCore::new();
    core.register_tile_grid(tiles(&["^.", ".."]));
    core.register_tile_grid(tiles(&["..", ".^"]));
    add_floating_box(&mut core, 8.0, 8.0, 16.0, 16.0, Vec2::ZERO);

    core.update(DT);
    assert_eq!(core.tile_trigger_events().len(), 1);
}

#[test]
fn events_are_rebuilt_every_frame() {
    let mut core = PhysicsCore::new();
    let a = add_floating_box(&mut core, 0.0, 0.0, 16.0, 16.0, Vec2::ZERO);
    add_floating_box(&mut core, 8.0, 0.0, 16.0, 16.0, Vec2::ZERO);

    assert_eq!(core.update(DT).pairs().len(), 1);

    // Move `a` away: the pair must disappear on the next tick
    core.body_mut(a).unwrap().set_velocity(Vec2::new(-64.0 * 40.0, 0.0));
    core.update(DT);
    assert!(core.collision_pairs().is_empty());
}

#[test]
fn falling_body_lands_on_floor_and_rests() {
    let mut core = PhysicsCore::new();
    core.register_tile_grid(tiles(&[
        "......",
        "......",
        "......",
        "######",
    ]));
    let handle = add_box(&mut core, 20.0, 0.0, 12.0, 12.0);

    for _ in 0..120 {
        core.update(DT);
    }

    let body = core.body(handle).unwrap();
    assert!(body.collided_below());
    assert_eq!(pos(&core, handle).y, 48.0 - 12.0);
}
