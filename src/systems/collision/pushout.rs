use crate::core::math::{Rect, Vec2};
use crate::systems::rigid_body::Body;

/// Overlaps smaller than this on both axes are ignored.
pub const PUSH_OUT_EPSILON: f32 = 0.1;

/// Minimum-translation push of `moving` out of `solid`.
///
/// Works on the boxes as they are after this frame's motion (there is no
/// previous position to axis-separate against). Pushes along the axis of
/// smaller overlap; velocity on that axis is zeroed, and the matching flag
/// set, only when the body is heading further into the solid. Returns the
/// translation the caller must apply to the moving body's transform.
pub fn push_out(moving: &mut Body, moving_box: &Rect, solid_box: &Rect) -> Option<Vec2> {
    let moving_center = moving_box.center();
    let solid_center = solid_box.center();
    let overlap = moving_box.half_extents() + solid_box.half_extents()
        - moving_center.abs_diff(solid_center);

    if overlap.x < PUSH_OUT_EPSILON && overlap.y < PUSH_OUT_EPSILON {
        return None;
    }

    let velocity = moving.velocity();
    let delta = if overlap.x < overlap.y {
        if moving_center.x < solid_center.x {
            if velocity.x > 0.0 {
                moving.zero_velocity_x();
                moving.flags_mut().right = true;
            }
            Vec2::new(-overlap.x, 0.0)
        } else {
            if velocity.x < 0.0 {
                moving.zero_velocity_x();
                moving.flags_mut().left = true;
            }
            Vec2::new(overlap.x, 0.0)
        }
    } else if moving_center.y < solid_center.y {
        if velocity.y > 0.0 {
            moving.zero_velocity_y();
            moving.flags_mut().below = true;
        }
        Vec2::new(0.0, -overlap.y)
    } else {
        if velocity.y < 0.0 {
            moving.zero_velocity_y();
            moving.flags_mut().above = true;
        }
        Vec2::new(0.0, overlap.y)
    };

    Some(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lands_on_top_of_solid() {
        let mut body = Body::default();
        body.set_velocity(Vec2::new(30.0, 120.0));

        let moving = Rect::new(10.0, 6.0, 10.0, 10.0);
        let solid = Rect::new(0.0, 14.0, 50.0, 10.0);
        let delta = push_out(&mut body, &moving, &solid).unwrap();

        assert_eq!(delta, Vec2::new(0.0, -2.0));
        assert_eq!(body.velocity(), Vec2::new(30.0, 0.0));
        assert!(body.collided_below());
    }

    #[test]
    fn test_side_push_keeps_velocity_when_moving_away() {
        let mut body = Body::default();
        body.set_velocity(Vec2::new(-40.0, 0.0));

        // Body overlaps the solid's left side by 3px, already heading left
        let moving = Rect::new(0.0, 0.0, 10.0, 20.0);
        let solid = Rect::new(7.0, 0.0, 10.0, 20.0);
        let delta = push_out(&mut body, &moving, &solid).unwrap();

        assert_eq!(delta, Vec2::new(-3.0, 0.0));
        assert_eq!(body.velocity().x, -40.0);
        assert!(!body.collided_right());
    }

    #[test]
    fn test_hitting_underside_sets_above() {
        let mut body = Body::default();
        body.set_velocity(Vec2::new(0.0, -50.0));

        let moving = Rect::new(0.0, 18.0, 10.0, 10.0);
        let solid = Rect::new(-20.0, 0.0, 50.0, 20.0);
        let delta = push_out(&mut body, &moving, &solid).unwrap();

        assert_eq!(delta, Vec2::new(0.0, 2.0));
        assert!(body.collided_above());
    }

    #[test]
    fn test_grazing_overlap_is_ignored() {
        let mut body = Body::default();
        let moving = Rect::new(0.0, 0.0, 10.0, 10.0);
        let solid = Rect::new(9.95, 9.95, 10.0, 10.0);
        assert_eq!(push_out(&mut body, &moving, &solid), None);
    }
}
