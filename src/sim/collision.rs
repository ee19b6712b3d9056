//! Wall collision: axis-aligned clamp and bounce
//!
//! Each edge is checked independently against the ball's current position, so
//! a corner hit resolves both axes in the same pass. Resolution is a
//! single-step clamp: the ball is snapped back to the radius-inset edge and
//! the velocity on that axis is reflected and damped. A ball fast enough to
//! cross the whole box in one frame still lands on the far edge (no swept
//! test).

use super::state::{Ball, BoxBounds};

/// Which edges fired during a collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    #[inline]
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Clamp the ball inside `bounds`, reflecting and damping velocity on each
/// breached axis.
///
/// Checks run in a fixed order (left, right, top, bottom), each against the
/// position as left by the previous check.
pub fn collide_walls(ball: &mut Ball, bounds: &BoxBounds, restitution: f32) -> WallHits {
    let mut hits = WallHits::default();
    let r = ball.radius;

    if ball.pos.x - r < bounds.left() {
        ball.pos.x = bounds.left() + r;
        ball.vel.x = -ball.vel.x * restitution;
        hits.left = true;
    }
    if ball.pos.x + r > bounds.right() {
        ball.pos.x = bounds.right() - r;
        ball.vel.x = -ball.vel.x * restitution;
        hits.right = true;
    }
    if ball.pos.y - r < bounds.top() {
        ball.pos.y = bounds.top() + r;
        ball.vel.y = -ball.vel.y * restitution;
        hits.top = true;
    }
    if ball.pos.y + r > bounds.bottom() {
        ball.pos.y = bounds.bottom() - r;
        ball.vel.y = -ball.vel.y * restitution;
        hits.bottom = true;
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RESTITUTION;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 20.0,
        }
    }

    #[test]
    fn test_left_wall_reflects_and_damps() {
        let bounds = BoxBounds::default();
        let mut ball = ball_at(60.0, 300.0, -10.0, 0.0);

        let hits = collide_walls(&mut ball, &bounds, RESTITUTION);
        assert!(hits.left && !hits.right && !hits.top && !hits.bottom);
        assert_eq!(ball.pos.x, 70.0);
        assert!((ball.vel.x - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_right_wall_reflects_and_damps() {
        let bounds = BoxBounds::default();
        let mut ball = ball_at(745.0, 300.0, 10.0, 0.0);

        let hits = collide_walls(&mut ball, &bounds, RESTITUTION);
        assert!(hits.right);
        assert_eq!(ball.pos.x, 730.0);
        assert!((ball.vel.x - (-8.0)).abs() < 1e-4);
    }

    #[test]
    fn test_top_wall_reflects_and_damps() {
        let bounds = BoxBounds::default();
        let mut ball = ball_at(400.0, 65.0, 0.0, -8.0);

        let hits = collide_walls(&mut ball, &bounds, RESTITUTION);
        assert!(hits.top);
        assert_eq!(ball.pos.y, 70.0);
        assert!((ball.vel.y - 6.4).abs() < 1e-4);
    }

    #[test]
    fn test_bottom_wall_reflects_and_damps() {
        let bounds = BoxBounds::default();
        let mut ball = ball_at(400.0, 540.0, 0.0, 5.0);

        let hits = collide_walls(&mut ball, &bounds, RESTITUTION);
        assert!(hits.bottom);
        assert_eq!(ball.pos.y, 530.0);
        assert!((ball.vel.y - (-4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_corner_fires_both_axes() {
        let bounds = BoxBounds::default();
        let mut ball = ball_at(55.0, 545.0, -6.0, 6.0);

        let hits = collide_walls(&mut ball, &bounds, RESTITUTION);
        assert!(hits.left && hits.bottom);
        assert_eq!(ball.pos, Vec2::new(70.0, 530.0));
        assert!(ball.vel.x > 0.0 && ball.vel.y < 0.0);
    }

    #[test]
    fn test_interior_ball_untouched() {
        let bounds = BoxBounds::default();
        let mut ball = ball_at(400.0, 300.0, 3.0, -2.0);
        let before = ball;

        let hits = collide_walls(&mut ball, &bounds, RESTITUTION);
        assert!(!hits.any());
        assert_eq!(ball, before);
    }

    proptest! {
        /// After a pass the ball center is always within the radius-inset box,
        /// wherever it started.
        #[test]
        fn prop_pass_restores_containment(
            x in -400.0f32..1200.0,
            y in -400.0f32..1000.0,
            vx in -200.0f32..200.0,
            vy in -200.0f32..200.0,
        ) {
            let bounds = BoxBounds::default();
            let mut ball = ball_at(x, y, vx, vy);

            collide_walls(&mut ball, &bounds, RESTITUTION);
            prop_assert!(bounds.contains_ball(ball.pos, ball.radius));
        }

        /// A single-edge breach leaves the other axis alone and scales the hit
        /// axis by exactly -restitution.
        #[test]
        fn prop_bounce_damps_hit_axis_only(
            pen in 0.1f32..40.0,
            vx in -50.0f32..-0.1,
            vy in -50.0f32..50.0,
        ) {
            let bounds = BoxBounds::default();
            let mut ball = ball_at(bounds.left() + 20.0 - pen, 300.0, vx, vy);

            let hits = collide_walls(&mut ball, &bounds, RESTITUTION);
            prop_assert!(hits.left);
            prop_assert!((ball.vel.x - (-vx * RESTITUTION)).abs() < 1e-3);
            prop_assert_eq!(ball.vel.y, vy);
        }
    }
}
