use crate::core::math::Rect;
use crate::systems::rigid_body::ColliderShape;

/// Exact overlap test on two world-space colliders.
///
/// The boxes are tested first (strict, touching edges do not count). Boxes
/// are their own bounding boxes; circles use half the scaled box width as
/// radius and the box center as center.
pub fn shapes_overlap(a: ColliderShape, a_box: &Rect, b: ColliderShape, b_box: &Rect) -> bool {
    if !a_box.overlaps(b_box) {
        return false;
    }

    match (a, b) {
        (ColliderShape::Box { .. }, ColliderShape::Box { .. }) => true,
        (ColliderShape::Circle { .. }, ColliderShape::Circle { .. }) => {
            let reach = a_box.size.x * 0.5 + b_box.size.x * 0.5;
            a_box.center().distance(b_box.center()) <= reach
        }
        (ColliderShape::Box { .. }, ColliderShape::Circle { .. }) => box_touches_circle(a_box, b_box),
        (ColliderShape::Circle { .. }, ColliderShape::Box { .. }) => box_touches_circle(b_box, a_box),
    }
}

fn box_touches_circle(rect: &Rect, circle_box: &Rect) -> bool {
    let center = circle_box.center();
    let closest = rect.clamp_point(center);
    closest.distance(center) <= circle_box.size.x * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;

    fn square() -> ColliderShape {
        ColliderShape::Box { size: Vec2::splat(10.0) }
    }

    fn circle() -> ColliderShape {
        ColliderShape::Circle { radius: 5.0 }
    }

    #[test]
    fn test_boxes_accept_on_box_overlap_only() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(shapes_overlap(square(), &a, square(), &Rect::new(9.0, 9.0, 10.0, 10.0)));
        // Touching edges
        assert!(!shapes_overlap(square(), &a, square(), &Rect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_circles_reject_box_corner_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Boxes overlap at the corner, centers ~11.3 apart > 10
        let b = Rect::new(8.0, 8.0, 10.0, 10.0);
        assert!(!shapes_overlap(circle(), &a, circle(), &b));

        let c = Rect::new(6.0, 0.0, 10.0, 10.0);
        assert!(shapes_overlap(circle(), &a, circle(), &c));
    }

    #[test]
    fn test_box_circle_is_symmetric() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Circle centered at (13, 13): closest box point (10, 10), distance ~4.24 < 5
        let near = Rect::new(8.0, 8.0, 10.0, 10.0);
        assert!(shapes_overlap(square(), &rect, circle(), &near));
        assert!(shapes_overlap(circle(), &near, square(), &rect));

        // Circle centered at (14, 14): distance ~5.66 > 5
        let far = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(!shapes_overlap(square(), &rect, circle(), &far));
        assert!(!shapes_overlap(circle(), &far, square(), &rect));
    }
}
