//! Integration - gravity and semi-implicit Euler velocity update

use crate::core::math::Vec2;
use crate::systems::rigid_body::Body;

/// Add gravity (as a force, `g * m`) when the body uses it, integrate
/// `v += F / m * dt`, then clear the accumulator.
///
/// Position is not touched here; the tile resolver turns the new velocity
/// into a displacement.
pub fn integrate(body: &mut Body, gravity: Vec2, dt: f32) {
    if body.use_gravity() {
        body.add_force(gravity * body.mass());
    }
    let accel = body.force() * (1.0 / body.mass());
    body.set_velocity(body.velocity() + accel * dt);
    body.clear_force();
}
