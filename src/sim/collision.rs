//! Overlap tests between the avatar and falling items
//!
//! The avatar is a circle; word bubbles are axis-aligned rounded rects
//! (treated as plain rects for gameplay) and pickups are circles. Standard
//! closest-point containment tests, nothing clever.

use glam::Vec2;

/// Circle vs axis-aligned rect, rect given by its top-left corner
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_pos: Vec2, w: f32, h: f32) -> bool {
    let closest = Vec2::new(
        center.x.clamp(rect_pos.x, rect_pos.x + w),
        center.y.clamp(rect_pos.y, rect_pos.y + h),
    );
    center.distance_squared(closest) <= radius * radius
}

/// Circle vs circle
pub fn circle_circle_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let rr = a_radius + b_radius;
    a.distance_squared(b) <= rr * rr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_rect_overlap() {
        let rect_pos = Vec2::new(100.0, 100.0);

        // Circle centered inside the rect
        assert!(circle_rect_overlap(
            Vec2::new(120.0, 110.0),
            5.0,
            rect_pos,
            60.0,
            38.0
        ));

        // Circle touching the left edge
        assert!(circle_rect_overlap(
            Vec2::new(92.0, 120.0),
            8.0,
            rect_pos,
            60.0,
            38.0
        ));

        // Circle clearly away
        assert!(!circle_rect_overlap(
            Vec2::new(50.0, 50.0),
            8.0,
            rect_pos,
            60.0,
            38.0
        ));
    }

    #[test]
    fn test_circle_rect_corner() {
        // Near a corner, diagonal distance matters
        let rect_pos = Vec2::new(0.0, 0.0);
        assert!(!circle_rect_overlap(
            Vec2::new(-8.0, -8.0),
            10.0,
            rect_pos,
            20.0,
            20.0
        ));
        assert!(circle_rect_overlap(
            Vec2::new(-6.0, -6.0),
            10.0,
            rect_pos,
            20.0,
            20.0
        ));
    }

    #[test]
    fn test_circle_circle_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circle_circle_overlap(a, 10.0, Vec2::new(15.0, 0.0), 6.0));
        assert!(!circle_circle_overlap(a, 10.0, Vec2::new(17.0, 0.0), 6.0));
        // Exactly touching counts
        assert!(circle_circle_overlap(a, 10.0, Vec2::new(16.0, 0.0), 6.0));
    }
}
