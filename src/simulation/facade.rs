use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::math::{Rect, Vec2};
use crate::domain::tiles::TileType;
use crate::spatial::grid::TileGrid;
use crate::systems::collision::BodyClass;
use crate::systems::rigid_body::{Body, Collider, Transform};

use super::perf_stats::PerfStats;
use super::{BodyHandle, GridHandle, PhysicsConfig, PhysicsCore, PhysicsObject};

#[derive(Serialize)]
struct JsPair {
    a: u32,
    b: u32,
}

#[derive(Serialize)]
struct JsTrigger {
    body: u32,
    tile: u8,
}

/// JS-facing engine. Bodies and grids are addressed by small integer ids.
#[wasm_bindgen]
pub struct PhysicsWorld {
    core: PhysicsCore,
    bodies: HashMap<u32, BodyHandle>,
    body_ids: HashMap<BodyHandle, u32>,
    grids: HashMap<u32, GridHandle>,
    next_id: u32,
}

impl PhysicsWorld {
    fn wrap(core: PhysicsCore) -> Self {
        Self {
            core,
            bodies: HashMap::new(),
            body_ids: HashMap::new(),
            grids: HashMap::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn add_body(&mut self, x: f32, y: f32, collider: Collider, mass: f32, solid: bool) -> u32 {
        let class = if solid { BodyClass::Solid } else { BodyClass::Dynamic };
        let mut body = Body::new(mass);
        if solid {
            body.set_use_gravity(false);
        }
        let id = self.alloc_id();
        let object = PhysicsObject::new(format!("body-{}", id), body)
            .with_transform(Transform::new(Vec2::new(x, y)))
            .with_collider(collider)
            .with_class(class);
        let handle = self.core.register_body(object);
        self.bodies.insert(id, handle);
        self.body_ids.insert(handle, id);
        id
    }

    fn body_ref(&self, id: u32) -> Option<&Body> {
        self.bodies.get(&id).and_then(|h| self.core.body(*h))
    }

    fn body_mut(&mut self, id: u32) -> Option<&mut Body> {
        let handle = *self.bodies.get(&id)?;
        self.core.body_mut(handle)
    }

    fn collider_mut(&mut self, id: u32) -> Option<&mut Collider> {
        let handle = *self.bodies.get(&id)?;
        self.core.collider_mut(handle)
    }

    fn position(&self, id: u32) -> Vec2 {
        self.bodies
            .get(&id)
            .and_then(|h| self.core.position(*h))
            .unwrap_or(Vec2::ZERO)
    }

    fn id_of(&self, handle: BodyHandle) -> u32 {
        self.body_ids.get(&handle).copied().unwrap_or(0)
    }
}

#[wasm_bindgen]
impl PhysicsWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::wrap(PhysicsCore::new())
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<PhysicsWorld, JsValue> {
        let config = PhysicsConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::wrap(PhysicsCore::with_config(config)))
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn grid_count(&self) -> u32 { self.core.grid_count() as u32 }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(Vec2::new(x, y));
    }

    pub fn gravity_x(&self) -> f32 { self.core.gravity().x }

    pub fn gravity_y(&self) -> f32 { self.core.gravity().y }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.core.set_max_speed(max_speed);
    }

    pub fn max_speed(&self) -> f32 { self.core.max_speed() }

    pub fn set_world_bounds(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.core.set_world_bounds(Some(Rect::new(x, y, w, h)));
    }

    pub fn clear_world_bounds(&mut self) {
        self.core.set_world_bounds(None);
    }

    // === BODIES ===

    /// Add a box body with its top-left at (x, y). Returns the body id.
    pub fn add_box_body(&mut self, x: f32, y: f32, w: f32, h: f32, mass: f32, solid: bool) -> u32 {
        self.add_body(x, y, Collider::new_box(Vec2::new(w, h)), mass, solid)
    }

    /// Add a circle body whose bounding box starts at (x, y).
    pub fn add_circle_body(&mut self, x: f32, y: f32, radius: f32, mass: f32, solid: bool) -> u32 {
        self.add_body(x, y, Collider::new_circle(radius), mass, solid)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        let Some(handle) = self.bodies.remove(&id) else {
            return false;
        };
        self.body_ids.remove(&handle);
        self.core.unregister_body(handle).is_some()
    }

    pub fn set_velocity(&mut self, id: u32, vx: f32, vy: f32) {
        if let Some(body) = self.body_mut(id) {
            body.set_velocity(Vec2::new(vx, vy));
        }
    }

    pub fn velocity_x(&self, id: u32) -> f32 {
        self.body_ref(id).map(|b| b.velocity().x).unwrap_or(0.0)
    }

    pub fn velocity_y(&self, id: u32) -> f32 {
        self.body_ref(id).map(|b| b.velocity().y).unwrap_or(0.0)
    }

    pub fn add_force(&mut self, id: u32, fx: f32, fy: f32) {
        if let Some(body) = self.body_mut(id) {
            body.add_force(Vec2::new(fx, fy));
        }
    }

    pub fn set_mass(&mut self, id: u32, mass: f32) {
        if let Some(body) = self.body_mut(id) {
            body.set_mass(mass);
        }
    }

    pub fn set_use_gravity(&mut self, id: u32, use_gravity: bool) {
        if let Some(body) = self.body_mut(id) {
            body.set_use_gravity(use_gravity);
        }
    }

    pub fn set_enabled(&mut self, id: u32, enabled: bool) {
        if let Some(body) = self.body_mut(id) {
            body.set_enabled(enabled);
        }
    }

    pub fn set_trigger(&mut self, id: u32, is_trigger: bool) {
        if let Some(collider) = self.collider_mut(id) {
            collider.set_trigger(is_trigger);
        }
    }

    pub fn set_collider_active(&mut self, id: u32, active: bool) {
        if let Some(collider) = self.collider_mut(id) {
            collider.set_active(active);
        }
    }

    pub fn position_x(&self, id: u32) -> f32 { self.position(id).x }

    pub fn position_y(&self, id: u32) -> f32 { self.position(id).y }

    /// Collision flags as a bitmask (see `flag_*` exports).
    pub fn flags(&self, id: u32) -> u32 {
        self.body_ref(id).map(|b| b.flags().bits()).unwrap_or(0)
    }

    // === TILE GRIDS ===

    /// Register a row-major grid of tile ids. Unknown ids become Empty; a
    /// short buffer is padded with Empty, a long one truncated.
    pub fn add_tile_grid(
        &mut self,
        width: u32,
        height: u32,
        tile_w: f32,
        tile_h: f32,
        tiles: &[u8],
    ) -> Result<u32, JsValue> {
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            log::warn!("tile buffer has {} cells, expected {}", tiles.len(), expected);
        }
        let cells: Vec<TileType> = (0..expected)
            .map(|i| {
                let id = tiles.get(i).copied().unwrap_or(0);
                TileType::from_u8(id).unwrap_or_else(|| {
                    log::warn!("unknown tile id {} at cell {}, using empty", id, i);
                    TileType::Empty
                })
            })
            .collect();

        let grid = TileGrid::from_tiles(width, height, Vec2::new(tile_w, tile_h), cells)
            .map_err(|e| JsValue::from_str(&e))?;
        let handle = self.core.register_tile_grid(grid);
        let id = self.alloc_id();
        self.grids.insert(id, handle);
        Ok(id)
    }

    pub fn remove_tile_grid(&mut self, id: u32) -> bool {
        match self.grids.remove(&id) {
            Some(handle) => self.core.unregister_tile_grid(handle),
            None => false,
        }
    }

    // === STEP ===

    pub fn update(&mut self, dt: f32) {
        self.core.update(dt);
    }

    /// `[{"a": id, "b": id}, ...]` for the last update.
    pub fn collision_pairs_json(&self) -> Result<String, JsValue> {
        let pairs: Vec<JsPair> = self
            .core
            .collision_pairs()
            .iter()
            .map(|p| JsPair { a: self.id_of(p.a), b: self.id_of(p.b) })
            .collect();
        serde_json::to_string(&pairs).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `[{"body": id, "tile": tileId}, ...]` for the last update.
    pub fn tile_trigger_events_json(&self) -> Result<String, JsValue> {
        let events: Vec<JsTrigger> = self
            .core
            .tile_trigger_events()
            .iter()
            .map(|e| JsTrigger { body: self.id_of(e.body), tile: e.tile_type.as_u8() })
            .collect();
        serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove every body and grid.
    pub fn clear(&mut self) {
        self.core.clear();
        self.bodies.clear();
        self.body_ids.clear();
        self.grids.clear();
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
