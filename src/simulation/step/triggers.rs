use crate::systems::tile_collision::{scan_tile_contacts, TileContacts};

use super::{BodyHandle, PhysicsCore};

/// Collect trigger tiles per body (once per type, in tile-id order across
/// every grid) and flag ladder contact on the body itself.
pub(super) fn scan_triggers(world: &mut PhysicsCore) {
    let grids = &world.grids;
    let events = &mut world.events;

    for (handle, object) in world.objects.iter_mut() {
        if !object.body.is_enabled() {
            continue;
        }
        let Some(collider) = object.collider.as_ref() else {
            continue;
        };
        // A trigger collider is itself a sensor; it does not sense tiles
        if !collider.is_active() || collider.is_trigger() {
            continue;
        }
        let Some(transform) = object.transform.as_deref() else {
            continue;
        };

        let aabb = collider.world_aabb(transform);
        let mut contacts = TileContacts::default();
        for (_, grid) in grids.iter() {
            scan_tile_contacts(&aabb, grid.as_ref(), &mut contacts);
        }

        if contacts.ladder {
            object.body.flags_mut().ladder = true;
        }
        for tile in contacts.triggers.iter() {
            events.push_trigger(BodyHandle(handle), tile);
        }
    }
}
