use crate::core::math::Rect;
use crate::spatial::arena::{Arena, Handle};
use crate::systems::collision::{push_out, resolution_for, shapes_overlap, BodyClass, PairResolution};
use crate::systems::rigid_body::ColliderShape;

use super::{BodyHandle, PhysicsCore, PhysicsObject};

/// What the pair scan needs from one object, read fresh for every pair since
/// an earlier push-out may have moved it.
struct ContactView {
    class: BodyClass,
    shape: ColliderShape,
    aabb: Rect,
    is_trigger: bool,
}

fn contact_view(objects: &Arena<PhysicsObject>, handle: Handle) -> Option<ContactView> {
    let object = objects.get(handle)?;
    if !object.body.is_enabled() {
        return None;
    }
    let collider = object.collider.as_ref().filter(|c| c.is_active())?;
    let transform = object.transform.as_deref()?;
    Some(ContactView {
        class: object.class,
        shape: collider.shape(),
        aabb: collider.world_aabb(transform),
        is_trigger: collider.is_trigger(),
    })
}

/// Pairwise scan in slot order (`i < j`). Returns the number of push-outs.
pub(super) fn resolve_pairs(world: &mut PhysicsCore) -> u32 {
    let handles = world.objects.handles();
    let mut push_outs = 0;

    for (i, &ha) in handles.iter().enumerate() {
        for &hb in &handles[i + 1..] {
            let Some(a) = contact_view(&world.objects, ha) else {
                break;
            };
            let Some(b) = contact_view(&world.objects, hb) else {
                continue;
            };
            if !shapes_overlap(a.shape, &a.aabb, b.shape, &b.aabb) {
                continue;
            }

            match resolution_for(a.class, a.is_trigger, b.class, b.is_trigger) {
                PairResolution::PushOutFirst => {
                    if separate(&mut world.objects, ha, &a.aabb, &b.aabb) {
                        push_outs += 1;
                    }
                }
                PairResolution::PushOutSecond => {
                    if separate(&mut world.objects, hb, &b.aabb, &a.aabb) {
                        push_outs += 1;
                    }
                }
                PairResolution::Report => {
                    world.events.push_pair(BodyHandle(ha), BodyHandle(hb));
                }
            }
        }
    }

    push_outs
}

fn separate(objects: &mut Arena<PhysicsObject>, moving: Handle, moving_box: &Rect, solid_box: &Rect) -> bool {
    let Some(object) = objects.get_mut(moving) else {
        return false;
    };
    let PhysicsObject { body, transform, .. } = object;
    let Some(transform) = transform.as_deref_mut() else {
        return false;
    };
    match push_out(body, moving_box, solid_box) {
        Some(delta) => {
            transform.translate(delta);
            true
        }
        None => false,
    }
}
