//! Collision tests for the launched ball
//!
//! Two questions per tick: did the ball touch the target rectangle, and did
//! it reach an edge of the surface.

use glam::Vec2;

use super::tuning::BorderRules;

/// Surface edge the ball crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Closest point on an axis-aligned rectangle to `point`
///
/// Returns `point` itself when it lies inside the rectangle.
#[inline]
pub fn closest_point_on_rect(point: Vec2, rect_pos: Vec2, rect_size: Vec2) -> Vec2 {
    point.clamp(rect_pos, rect_pos + rect_size)
}

/// Circle vs axis-aligned rectangle overlap
///
/// A center inside the rectangle has distance zero to its closest point and
/// therefore always hits.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    let closest = closest_point_on_rect(ball_pos, rect_pos, rect_size);
    ball_pos.distance_squared(closest) < ball_radius * ball_radius
}

/// First enabled edge the ball touches, checked left, right, top, bottom
pub fn ball_border_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    surface: Vec2,
    rules: &BorderRules,
) -> Option<Edge> {
    if rules.left && ball_pos.x - ball_radius <= 0.0 {
        Some(Edge::Left)
    } else if rules.right && ball_pos.x + ball_radius >= surface.x {
        Some(Edge::Right)
    } else if rules.top && ball_pos.y - ball_radius <= 0.0 {
        Some(Edge::Top)
    } else if rules.bottom && ball_pos.y + ball_radius >= surface.y {
        Some(Edge::Bottom)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RECT_POS: Vec2 = Vec2::new(900.0, 200.0);
    const RECT_SIZE: Vec2 = Vec2::new(60.0, 60.0);

    #[test]
    fn test_rect_hit_from_side() {
        // 10px left of the rectangle with radius 12
        assert!(ball_rect_collision(Vec2::new(890.0, 230.0), 12.0, RECT_POS, RECT_SIZE));
        assert!(!ball_rect_collision(Vec2::new(880.0, 230.0), 12.0, RECT_POS, RECT_SIZE));
    }

    #[test]
    fn test_rect_corner_uses_distance_not_box() {
        // Inside the expanded bounding box but outside the rounded corner
        let pos = Vec2::new(900.0 - 9.0, 200.0 - 9.0);
        assert!(!ball_rect_collision(pos, 12.0, RECT_POS, RECT_SIZE));
        let pos = Vec2::new(900.0 - 8.0, 200.0 - 8.0);
        assert!(ball_rect_collision(pos, 12.0, RECT_POS, RECT_SIZE));
    }

    #[test]
    fn test_touching_exactly_is_not_a_hit() {
        assert!(!ball_rect_collision(Vec2::new(888.0, 230.0), 12.0, RECT_POS, RECT_SIZE));
    }

    #[test]
    fn test_border_each_edge() {
        let surface = Vec2::new(1280.0, 720.0);
        let rules = BorderRules::all();
        let r = 24.0;
        assert_eq!(ball_border_collision(Vec2::new(24.0, 300.0), r, surface, &rules), Some(Edge::Left));
        assert_eq!(ball_border_collision(Vec2::new(1256.0, 300.0), r, surface, &rules), Some(Edge::Right));
        assert_eq!(ball_border_collision(Vec2::new(600.0, 24.0), r, surface, &rules), Some(Edge::Top));
        assert_eq!(ball_border_collision(Vec2::new(600.0, 696.0), r, surface, &rules), Some(Edge::Bottom));
        assert_eq!(ball_border_collision(Vec2::new(600.0, 300.0), r, surface, &rules), None);
    }

    #[test]
    fn test_open_floor_ignores_bottom() {
        let surface = Vec2::new(1280.0, 720.0);
        let rules = BorderRules::open_floor();
        assert_eq!(ball_border_collision(Vec2::new(600.0, 900.0), 24.0, surface, &rules), None);
        assert_eq!(ball_border_collision(Vec2::new(10.0, 900.0), 24.0, surface, &rules), Some(Edge::Left));
    }

    proptest! {
        #[test]
        fn prop_center_inside_always_hits(
            fx in 0.001f32..0.999,
            fy in 0.001f32..0.999,
            radius in 0.5f32..80.0,
            w in 1.0f32..300.0,
            h in 1.0f32..300.0,
        ) {
            let rect_pos = Vec2::new(100.0, 50.0);
            let size = Vec2::new(w, h);
            let center = rect_pos + size * Vec2::new(fx, fy);
            prop_assert!(ball_rect_collision(center, radius, rect_pos, size));
        }

        #[test]
        fn prop_far_away_never_hits(angle in 0.0f32..std::f32::consts::TAU, radius in 0.5f32..80.0) {
            let rect_pos = Vec2::new(0.0, 0.0);
            let size = Vec2::new(50.0, 50.0);
            let center = Vec2::splat(25.0) + Vec2::from_angle(angle) * (radius + 40.0);
            prop_assert!(!ball_rect_collision(center, radius, rect_pos, size));
        }
    }
}
