use tilebound_engine::{PhysicsConfig, PhysicsCore, Rect, Vec2};

const LEVEL_CONFIG: &str = r#"{
    "gravity": { "x": 0.0, "y": 1200.0 },
    "max_speed": 350.0,
    "world_bounds": { "position": { "x": 0.0, "y": 0.0 }, "size": { "x": 960.0, "y": 540.0 } }
}"#;

#[test]
fn config_smoke_parses_and_applies() {
    let config = PhysicsConfig::from_json(LEVEL_CONFIG).expect("level config should parse");
    let core = PhysicsCore::with_config(config.clone());

    assert_eq!(core.gravity(), Vec2::new(0.0, 1200.0));
    assert_eq!(core.max_speed(), 350.0);
    assert_eq!(core.world_bounds(), Some(Rect::new(0.0, 0.0, 960.0, 540.0)));
    assert_eq!(core.config(), config);
}

#[test]
fn config_round_trips_through_json() {
    let config = PhysicsConfig::from_json(LEVEL_CONFIG).unwrap();
    let json = config.to_json().unwrap();
    assert_eq!(PhysicsConfig::from_json(&json).unwrap(), config);
}

#[test]
fn defaults_match_engine_defaults() {
    let core = PhysicsCore::new();
    assert_eq!(core.config(), PhysicsConfig::default());
    assert_eq!(core.gravity(), Vec2::new(0.0, 980.0));
    assert_eq!(core.max_speed(), 500.0);
    assert_eq!(core.world_bounds(), None);
}

#[test]
fn runtime_setters_reject_invalid_values() {
    let mut core = PhysicsCore::new();
    core.set_max_speed(0.0);
    assert_eq!(core.max_speed(), 500.0);

    core.set_gravity(Vec2::new(f32::NAN, 0.0));
    assert_eq!(core.gravity(), Vec2::new(0.0, 980.0));

    core.set_world_bounds(Some(Rect::new(0.0, 0.0, -10.0, 100.0)));
    assert_eq!(core.world_bounds(), None);

    core.set_gravity(Vec2::new(0.0, -50.0));
    assert_eq!(core.gravity(), Vec2::new(0.0, -50.0));
}
