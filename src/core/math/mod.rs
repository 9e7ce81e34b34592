//! Geometry primitives: 2D vectors, axis-aligned rectangles, scalar helpers.

mod rect;
mod scalar;
mod vec2;

pub use rect::Rect;
pub use scalar::{clamp, floor_mod, lerp, world_to_cell};
pub use vec2::Vec2;
