//! Tilebound Engine - tile collision and body physics for 2D platformers
//!
//! Architecture:
//! - core/        - math primitives, safety macros
//! - domain/      - tile classification, collider anchors
//! - spatial/     - generational arena, tile grids
//! - systems/     - integration, tile sweep, body collision, world bounds
//! - simulation/  - `PhysicsCore` pipeline and the `PhysicsWorld` JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Tilebound physics engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Rect, Vec2};
pub use domain::alignment::Alignment;
pub use domain::tiles::{TileType, TileTypeSet};
pub use simulation::{
    BodyHandle, Capability, CollisionPair, FrameEvents, GridHandle, PerfStats, PhysicsConfig,
    PhysicsCore, PhysicsObject, PhysicsWorld, TileTriggerEvent,
};
pub use spatial::grid::{TileGrid, TileSource};
pub use systems::collision::BodyClass;
pub use systems::rigid_body::{Body, Collider, ColliderShape, CollisionFlags, Transform, Transform2D};

// Export tile ids for JS
#[wasm_bindgen]
pub fn tile_empty() -> u8 { TileType::Empty.as_u8() }
#[wasm_bindgen]
pub fn tile_normal() -> u8 { TileType::Normal.as_u8() }
#[wasm_bindgen]
pub fn tile_solid() -> u8 { TileType::Solid.as_u8() }
#[wasm_bindgen]
pub fn tile_uni_solid() -> u8 { TileType::UniSolid.as_u8() }
#[wasm_bindgen]
pub fn tile_slope_0_1() -> u8 { TileType::Slope0_1.as_u8() }
#[wasm_bindgen]
pub fn tile_slope_1_0() -> u8 { TileType::Slope1_0.as_u8() }
#[wasm_bindgen]
pub fn tile_slope_0_2() -> u8 { TileType::Slope0_2.as_u8() }
#[wasm_bindgen]
pub fn tile_slope_2_1() -> u8 { TileType::Slope2_1.as_u8() }
#[wasm_bindgen]
pub fn tile_slope_1_2() -> u8 { TileType::Slope1_2.as_u8() }
#[wasm_bindgen]
pub fn tile_slope_2_0() -> u8 { TileType::Slope2_0.as_u8() }
#[wasm_bindgen]
pub fn tile_hazard() -> u8 { TileType::Hazard.as_u8() }
#[wasm_bindgen]
pub fn tile_ladder() -> u8 { TileType::Ladder.as_u8() }

// Collision flag bits, see `PhysicsWorld::flags`
#[wasm_bindgen]
pub fn flag_below() -> u32 { CollisionFlags::BELOW }
#[wasm_bindgen]
pub fn flag_above() -> u32 { CollisionFlags::ABOVE }
#[wasm_bindgen]
pub fn flag_left() -> u32 { CollisionFlags::LEFT }
#[wasm_bindgen]
pub fn flag_right() -> u32 { CollisionFlags::RIGHT }
#[wasm_bindgen]
pub fn flag_ladder() -> u32 { CollisionFlags::LADDER }
#[wasm_bindgen]
pub fn flag_ladder_top() -> u32 { CollisionFlags::LADDER_TOP }
