//! Systems - the per-frame physics passes
//!
//! Each pass works on plain values (bodies, boxes, grids) and reports what it
//! changed; the simulation layer owns the objects and applies translations.

pub mod bounds;
pub mod collision;
pub mod integration;
pub mod rigid_body;
pub mod tile_collision;
