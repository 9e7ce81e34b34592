//! World bounds - keep a body's box inside the world on left, top and right
//!
//! The bottom edge is never enforced so bodies can fall out of the world.

use crate::core::math::{Rect, Vec2};
use crate::systems::rigid_body::Body;

/// Clamp `aabb` into `bounds`, zeroing the velocity component of every
/// violated side and setting its flag. Returns the translation to apply.
pub fn clamp_to_bounds(body: &mut Body, aabb: &Rect, bounds: &Rect) -> Vec2 {
    let mut pos = aabb.position;

    if pos.x < bounds.left() {
        body.zero_velocity_x();
        pos.x = bounds.left();
        body.flags_mut().left = true;
    }
    if pos.y < bounds.top() {
        body.zero_velocity_y();
        pos.y = bounds.top();
        body.flags_mut().above = true;
    }
    if pos.x + aabb.size.x > bounds.right() {
        body.zero_velocity_x();
        pos.x = bounds.right() - aabb.size.x;
        body.flags_mut().right = true;
    }

    pos - aabb.position
}
