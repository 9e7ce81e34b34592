use crate::core::math::{Rect, Vec2};

use super::config::{sanitize_gravity, sanitize_max_speed, sanitize_world_bounds, PhysicsConfig};
use super::perf_stats::PerfStats;
use super::PhysicsCore;

pub(super) fn enable_perf_metrics(world: &mut PhysicsCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &PhysicsCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut PhysicsCore, gravity: Vec2) {
    world.gravity = sanitize_gravity(gravity);
}

pub(super) fn set_max_speed(world: &mut PhysicsCore, max_speed: f32) {
    world.max_speed = sanitize_max_speed(max_speed);
}

pub(super) fn set_world_bounds(world: &mut PhysicsCore, bounds: Option<Rect>) {
    world.world_bounds = sanitize_world_bounds(bounds);
}

pub(super) fn config(world: &PhysicsCore) -> PhysicsConfig {
    PhysicsConfig {
        gravity: world.gravity,
        max_speed: world.max_speed,
        world_bounds: world.world_bounds,
    }
}
