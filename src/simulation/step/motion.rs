use crate::core::math::Vec2;
use crate::spatial::arena::Arena;
use crate::spatial::grid::TileSource;
use crate::systems::bounds::clamp_to_bounds;
use crate::systems::integration::integrate;
use crate::systems::rigid_body::{Body, Collider, Transform2D};
use crate::systems::tile_collision::TileSweep;

use super::{PhysicsCore, PhysicsObject};

/// Returns the number of bodies that moved this frame.
pub(super) fn move_bodies(world: &mut PhysicsCore, dt: f32) -> u32 {
    let gravity = world.gravity;
    let max_speed = world.max_speed;
    let bounds = world.world_bounds;
    let grids = &world.grids;
    let mut simulated = 0;

    for (handle, object) in world.objects.iter_mut() {
        let PhysicsObject { name, body, transform, collider, .. } = object;
        if !body.is_enabled() {
            continue;
        }

        body.reset_flags();

        let Some(transform) = transform.as_deref_mut() else {
            log::error!("body {:?} '{}' has no transform, skipped this frame", handle, name);
            continue;
        };

        integrate(body, gravity, dt);
        move_through_tiles(body, transform, collider.as_ref(), grids, dt, max_speed);

        if let (Some(bounds), Some(collider)) = (bounds, collider.as_ref()) {
            let aabb = collider.world_aabb(transform);
            let delta = clamp_to_bounds(body, &aabb, &bounds);
            transform.translate(delta);
        }

        simulated += 1;
    }

    simulated
}

/// Turn this frame's velocity into a displacement, letting every grid pull
/// the target back, then translate once and clamp velocity.
fn move_through_tiles(
    body: &mut Body,
    transform: &mut dyn Transform2D,
    collider: Option<&Collider>,
    grids: &Arena<Box<dyn TileSource>>,
    dt: f32,
    max_speed: f32,
) {
    let ds = body.velocity() * dt;

    let delta = match collider {
        Some(collider) if collider.is_active() && !collider.is_trigger() => {
            let origin = collider.world_aabb(transform);
            if origin.is_degenerate() {
                ds
            } else {
                let mut sweep = TileSweep::new(origin, ds);
                for (_, grid) in grids.iter() {
                    sweep.resolve(body, grid.as_ref());
                }
                sweep.displacement()
            }
        }
        _ => ds,
    };

    if delta != Vec2::ZERO {
        transform.translate(delta);
    }
    body.clamp_velocity(max_speed);
}
