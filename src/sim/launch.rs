//! Slingshot mechanics: aiming, release impulse, and the per-tick Euler step

use glam::Vec2;

use super::tuning::{PhysicsScale, Tuning};

/// Where the held ball sits for a given pointer position
///
/// The pull is clamped to `max_stretch` from the anchor, keeping the
/// direction of the raw pointer displacement.
pub fn project_aim(pointer: Vec2, anchor: Vec2, max_stretch: f32) -> Vec2 {
    let displacement = pointer - anchor;
    if displacement.length() > max_stretch {
        anchor + displacement.clamp_length_max(max_stretch)
    } else {
        pointer
    }
}

/// Whether a pointer-down at `pointer` grabs a ball resting on `anchor`
#[inline]
pub fn can_grab(pointer: Vec2, anchor: Vec2, ball_radius: f32, grab_radius_factor: f32) -> bool {
    pointer.distance(anchor) < ball_radius * grab_radius_factor
}

/// Initial velocity when releasing the ball at `ball_pos`
///
/// The ball flies back toward and through the anchor.
pub fn launch_velocity(anchor: Vec2, ball_pos: Vec2, tuning: &Tuning, scale: PhysicsScale) -> Vec2 {
    let launch_vector = anchor - ball_pos;
    launch_vector * tuning.elastic_force * scale.launch_multiplier(tuning)
}

/// One explicit Euler step: gravity, velocity, friction, position
///
/// Acceleration is consumed and left at zero.
pub fn integrate(pos: &mut Vec2, vel: &mut Vec2, acc: &mut Vec2, gravity: Vec2, friction: f32) {
    *acc += gravity;
    *vel += *acc;
    *vel *= friction;
    *pos += *vel;
    *acc = Vec2::ZERO;
}

/// How far the band is pulled, as a fraction of the maximum
pub fn stretch_ratio(ball_pos: Vec2, anchor: Vec2, max_stretch: f32) -> f32 {
    (ball_pos.distance(anchor) / max_stretch).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_aim_within_reach_follows_pointer() {
        let anchor = Vec2::new(144.0, 504.0);
        let pointer = Vec2::new(100.0, 540.0);
        assert_eq!(project_aim(pointer, anchor, 140.0), pointer);
    }

    #[test]
    fn test_aim_clamped_along_pointer_direction() {
        let anchor = Vec2::new(200.0, 500.0);
        let pointer = anchor + Vec2::new(-300.0, 400.0); // 500px away
        let ball = project_aim(pointer, anchor, 160.0);

        assert!((ball.distance(anchor) - 160.0).abs() < 1e-3);
        let dir = (ball - anchor).normalize();
        let raw = (pointer - anchor).normalize();
        assert!(dir.abs_diff_eq(raw, 1e-5));
    }

    #[test]
    fn test_grab_radius() {
        let anchor = Vec2::new(100.0, 100.0);
        assert!(can_grab(Vec2::new(160.0, 100.0), anchor, 20.0, 3.5));
        assert!(!can_grab(Vec2::new(170.0, 100.0), anchor, 20.0, 3.5));
    }

    #[test]
    fn test_launch_points_back_through_anchor() {
        let tuning = Tuning::default();
        let anchor = Vec2::new(200.0, 500.0);
        let ball = Vec2::new(100.0, 600.0);
        let vel = launch_velocity(anchor, ball, &tuning, PhysicsScale(1.0));

        // (100, -100) * 0.4 * 0.7
        assert!(vel.abs_diff_eq(Vec2::new(28.0, -28.0), 1e-4));
    }

    #[test]
    fn test_launch_power_is_scale_invariant() {
        // Same pull in reference units gives the same launch velocity
        let tuning = Tuning::default();
        let anchor = Vec2::ZERO;
        let small = launch_velocity(anchor, Vec2::new(-50.0, 50.0), &tuning, PhysicsScale(1.0));
        let big = launch_velocity(anchor, Vec2::new(-100.0, 100.0), &tuning, PhysicsScale(2.0));
        assert!(small.abs_diff_eq(big, 1e-4));
    }

    #[test]
    fn test_integration_order() {
        let gravity = Vec2::new(0.0, 0.6);
        let friction = 0.988;
        let v0 = Vec2::new(10.0, -15.0);
        let p0 = Vec2::new(300.0, 400.0);

        let mut pos = p0;
        let mut vel = v0;
        let mut acc = Vec2::ZERO;
        integrate(&mut pos, &mut vel, &mut acc, gravity, friction);

        let expected_vel = (v0 + gravity) * friction;
        assert!(vel.abs_diff_eq(expected_vel, 1e-5));
        assert!(pos.abs_diff_eq(p0 + expected_vel, 1e-4));
        assert_eq!(acc, Vec2::ZERO);
    }

    #[test]
    fn test_stretch_ratio_clamped() {
        let anchor = Vec2::ZERO;
        assert_eq!(stretch_ratio(anchor, anchor, 140.0), 0.0);
        assert!((stretch_ratio(Vec2::new(70.0, 0.0), anchor, 140.0) - 0.5).abs() < 1e-6);
        assert_eq!(stretch_ratio(Vec2::new(500.0, 0.0), anchor, 140.0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_aim_never_exceeds_stretch(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
            max_stretch in 1.0f32..400.0,
        ) {
            let anchor = Vec2::new(144.0, 504.0);
            let ball = project_aim(Vec2::new(px, py), anchor, max_stretch);
            prop_assert!(ball.distance(anchor) <= max_stretch + 1e-3);
        }
    }
}
