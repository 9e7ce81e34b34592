use crate::spatial::grid::TileSource;

use super::{BodyHandle, GridHandle, PhysicsCore, PhysicsObject};

// Registration must happen between updates; `update` holds `&mut self`, so the
// borrow checker already rules out mutation mid-frame.

pub(super) fn register_body(world: &mut PhysicsCore, object: PhysicsObject) -> BodyHandle {
    if object.transform.is_none() {
        log::warn!("registering body '{}' without a transform; it will not move", object.name);
    }
    let handle = BodyHandle(world.objects.insert(object));
    log::debug!("register body {:?}", handle);
    handle
}

pub(super) fn unregister_body(world: &mut PhysicsCore, handle: BodyHandle) -> Option<PhysicsObject> {
    let removed = world.objects.remove(handle.0);
    if removed.is_some() {
        log::debug!("unregister body {:?}", handle);
    }
    removed
}

pub(super) fn register_tile_grid(world: &mut PhysicsCore, grid: Box<dyn TileSource>) -> GridHandle {
    let handle = GridHandle(world.grids.insert(grid));
    log::debug!("register tile grid {:?}", handle);
    handle
}

pub(super) fn unregister_tile_grid(world: &mut PhysicsCore, handle: GridHandle) -> bool {
    let removed = world.grids.remove(handle.0).is_some();
    if removed {
        log::debug!("unregister tile grid {:?}", handle);
    }
    removed
}

pub(super) fn clear(world: &mut PhysicsCore) {
    log::debug!(
        "clear physics engine ({} bodies, {} grids)",
        world.objects.len(),
        world.grids.len()
    );
    world.objects.clear();
    world.grids.clear();
    world.events.clear();
}
