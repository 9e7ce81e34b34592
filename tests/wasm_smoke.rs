#![cfg(target_arch = "wasm32")]

use tilebound_engine::{flag_below, tile_solid, PhysicsWorld};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_box_lands_on_floor() {
    let mut world = PhysicsWorld::new();
    let mut tiles = vec![0u8; 4 * 4];
    for x in 0..4 {
        tiles[3 * 4 + x] = tile_solid();
    }
    world.add_tile_grid(4, 4, 16.0, 16.0, &tiles).unwrap();
    let id = world.add_box_body(20.0, 0.0, 12.0, 12.0, 1.0, false);

    for _ in 0..120 {
        world.update(1.0 / 60.0);
    }

    assert_eq!(world.position_y(id), 36.0);
    assert_ne!(world.flags(id) & flag_below(), 0);
}

#[wasm_bindgen_test]
fn facade_reports_pairs_as_json() {
    let mut world = PhysicsWorld::new();
    world.set_gravity(0.0, 0.0);
    let a = world.add_box_body(0.0, 0.0, 16.0, 16.0, 1.0, false);
    let b = world.add_box_body(8.0, 8.0, 16.0, 16.0, 1.0, false);

    world.update(1.0 / 60.0);

    let json = world.collision_pairs_json().unwrap();
    assert_eq!(json, format!("[{{\"a\":{},\"b\":{}}}]", a, b));
}

#[wasm_bindgen_test]
fn facade_rejects_malformed_config() {
    assert!(PhysicsWorld::from_config_json("{ nope").is_err());
}
