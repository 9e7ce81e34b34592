//! Simulation - the physics engine instance and its per-frame pipeline
//!
//! `PhysicsCore` owns every registered object and tile grid and runs the whole
//! pipeline inside one `update(dt)` call:
//! - motion: reset flags, gravity, integration, tile sweep, world bounds
//! - contacts: pairwise push-out against solids, pair reporting otherwise
//! - triggers: hazard events and ladder contact against final positions
//!
//! The event buffer is owned by the instance, so several engines can run
//! side by side (e.g. in tests).

use crate::core::math::{Rect, Vec2};
use crate::spatial::arena::Arena;
use crate::spatial::grid::TileSource;
use crate::systems::rigid_body::{Body, Collider};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "object/handles.rs"]
mod handles;
#[path = "object/object.rs"]
mod object;
#[path = "events/events.rs"]
mod events;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/motion.rs"]
mod motion;
#[path = "step/contacts.rs"]
mod contacts;
#[path = "step/triggers.rs"]
mod triggers;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use config::{PhysicsConfig, DEFAULT_GRAVITY, DEFAULT_MAX_SPEED};
pub use events::{CollisionPair, FrameEvents, TileTriggerEvent};
pub use facade::PhysicsWorld;
pub use handles::{BodyHandle, GridHandle};
pub use object::{Capability, PhysicsObject};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The physics engine
pub struct PhysicsCore {
    objects: Arena<PhysicsObject>,
    grids: Arena<Box<dyn TileSource>>,

    // Settings
    gravity: Vec2,
    max_speed: f32,
    world_bounds: Option<Rect>,

    // State
    events: FrameEvents,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl PhysicsCore {
    /// Engine with default settings: gravity (0, 980), max speed 500, no bounds.
    pub fn new() -> Self {
        init::create_physics_core(PhysicsConfig::default())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        init::create_physics_core(config)
    }

    pub fn config(&self) -> PhysicsConfig {
        settings::config(self)
    }

    // === REGISTRATION ===

    pub fn register_body(&mut self, object: PhysicsObject) -> BodyHandle {
        commands::register_body(self, object)
    }

    /// Remove a body, handing it back. `None` for a stale handle.
    pub fn unregister_body(&mut self, handle: BodyHandle) -> Option<PhysicsObject> {
        commands::unregister_body(self, handle)
    }

    pub fn register_tile_grid<G: TileSource + 'static>(&mut self, grid: G) -> GridHandle {
        commands::register_tile_grid(self, Box::new(grid))
    }

    pub fn unregister_tile_grid(&mut self, handle: GridHandle) -> bool {
        commands::unregister_tile_grid(self, handle)
    }

    /// Drop every body and grid.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, gravity: Vec2) {
        settings::set_gravity(self, gravity);
    }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        settings::set_max_speed(self, max_speed);
    }

    pub fn max_speed(&self) -> f32 { self.max_speed }

    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        settings::set_world_bounds(self, bounds);
    }

    pub fn world_bounds(&self) -> Option<Rect> { self.world_bounds }

    /// Enable or disable per-update perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last update's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === STEP ===

    /// Run the full pipeline for one tick. `dt` is in seconds and is not
    /// clamped: a large step can carry a body through a thin wall.
    pub fn update(&mut self, dt: f32) -> &FrameEvents {
        step::update(self, dt);
        &self.events
    }

    /// Events of the tick just completed.
    pub fn events(&self) -> &FrameEvents { &self.events }

    pub fn collision_pairs(&self) -> &[CollisionPair] {
        self.events.pairs()
    }

    pub fn tile_trigger_events(&self) -> &[TileTriggerEvent] {
        self.events.tile_triggers()
    }

    // === QUERIES ===

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.objects.len() }

    pub fn grid_count(&self) -> usize { self.grids.len() }

    pub fn contains_body(&self, handle: BodyHandle) -> bool {
        self.objects.contains(handle.0)
    }

    pub fn object(&self, handle: BodyHandle) -> Option<&PhysicsObject> {
        self.objects.get(handle.0)
    }

    pub fn object_mut(&mut self, handle: BodyHandle) -> Option<&mut PhysicsObject> {
        self.objects.get_mut(handle.0)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.object(handle).map(|o| o.body())
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.object_mut(handle).map(|o| o.body_mut())
    }

    pub fn collider(&self, handle: BodyHandle) -> Option<&Collider> {
        self.object(handle).and_then(|o| o.collider())
    }

    pub fn collider_mut(&mut self, handle: BodyHandle) -> Option<&mut Collider> {
        self.object_mut(handle).and_then(|o| o.collider_mut())
    }

    /// Transform position of a body, if it has a transform.
    pub fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.object(handle)?.transform().map(|t| t.position())
    }

    /// World-space collider box of a body.
    pub fn world_aabb(&self, handle: BodyHandle) -> Option<Rect> {
        self.object(handle)?.world_aabb()
    }

    pub fn tile_grid(&self, handle: GridHandle) -> Option<&dyn TileSource> {
        self.grids.get(handle.0).map(|g| g.as_ref())
    }

    /// Live body handles in processing order.
    pub fn body_handles(&self) -> Vec<BodyHandle> {
        self.objects.handles().into_iter().map(BodyHandle).collect()
    }
}

impl Default for PhysicsCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
