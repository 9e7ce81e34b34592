use super::config::PhysicsConfig;
use super::events::FrameEvents;
use super::perf_stats::PerfStats;
use super::PhysicsCore;
use crate::spatial::arena::Arena;

pub(super) fn create_physics_core(config: PhysicsConfig) -> PhysicsCore {
    let config = config.sanitized();
    log::debug!(
        "new physics engine: gravity ({}, {}), max speed {}",
        config.gravity.x,
        config.gravity.y,
        config.max_speed
    );
    PhysicsCore {
        objects: Arena::new(),
        grids: Arena::new(),
        gravity: config.gravity,
        max_speed: config.max_speed,
        world_bounds: config.world_bounds,
        events: FrameEvents::default(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
