//! Collision checks between the ball, the rails, and the paddles
//!
//! Paddle contact is deliberately one-sided: only the leading edge of each
//! paddle is tested against the ball's near edge, and the ball's center y
//! against the paddle's vertical extent. That is how the game has always
//! played; a full AABB-vs-circle test would change rally feel.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::config::FieldConfig;

/// Reflect the ball off the top/bottom rails if its edge crossed one
///
/// Returns true when a bounce occurred. Position is clamped back inside the
/// rail so the ball never tunnels through in a single tick.
pub fn wall_bounce(ball: &mut Ball, field: &FieldConfig) -> bool {
    let top = field.wall_margin + ball.radius;
    let bottom = field.height - field.wall_margin - ball.radius;
    if ball.pos.y <= top || ball.pos.y >= bottom {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(top, bottom);
        true
    } else {
        false
    }
}

/// Leading-edge contact test for one paddle
///
/// On contact, returns the normalized hit offset in [-1, 1]: 0 at the paddle
/// center, ±1 at the tips. `None` means no contact this tick.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> Option<f32> {
    let near_edge = match side {
        Side::Player => ball.pos.x - ball.radius,
        Side::Opponent => ball.pos.x + ball.radius,
    };
    let within_depth = near_edge >= paddle.x && near_edge <= paddle.x + paddle.width;
    let within_height = ball.pos.y >= paddle.y && ball.pos.y <= paddle.y + paddle.height;
    if !(within_depth && within_height) {
        return None;
    }
    Some((ball.pos.y - paddle.center_y()) / (paddle.height / 2.0))
}

/// Compute the outbound velocity after a paddle hit
///
/// The hit offset maps linearly to a bounce angle capped at
/// `max_bounce_angle`. Speed only ever grows: it restarts from `base_speed`
/// if it had decayed below it, multiplies by `growth_factor`, and is capped
/// at `max_speed`. The horizontal sign is forced away from the hit paddle so
/// a near-vertical bounce can never fail to clear it.
pub fn bounce_off_paddle(ball: &mut Ball, hit_offset: f32, side: Side, max_bounce_angle: f32) {
    let angle = hit_offset * max_bounce_angle;
    let prev_speed = ball.speed().max(ball.base_speed);
    let speed = (prev_speed * ball.growth_factor).min(ball.max_speed);
    let vx = (angle.cos() * speed).abs();
    let vy = angle.sin() * speed;
    ball.vel = match side {
        Side::Player => Vec2::new(vx, vy),
        Side::Opponent => Vec2::new(-vx, vy),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BallTuning, GameConfig, PaddleTuning};
    use proptest::prelude::*;

    fn test_ball() -> Ball {
        Ball::new(&BallTuning::default(), &FieldConfig::default())
    }

    fn test_paddle(side: Side) -> Paddle {
        let config = GameConfig::default();
        let x = match side {
            Side::Player => config.player_x(),
            Side::Opponent => config.opponent_x(),
        };
        Paddle::new(x, &PaddleTuning::default(), &config.field)
    }

    #[test]
    fn test_wall_bounce_top() {
        let field = FieldConfig::default();
        let mut ball = test_ball();
        ball.pos = Vec2::new(400.0, 20.0); // edge at 8, above the 15 margin
        ball.vel = Vec2::new(1.0, -2.0);
        assert!(wall_bounce(&mut ball, &field));
        assert_eq!(ball.vel.y, 2.0);
        assert_eq!(ball.pos.y, field.wall_margin + ball.radius);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let field = FieldConfig::default();
        let mut ball = test_ball();
        ball.pos = Vec2::new(400.0, 480.0);
        ball.vel = Vec2::new(1.0, 2.0);
        assert!(wall_bounce(&mut ball, &field));
        assert_eq!(ball.vel.y, -2.0);
        assert_eq!(ball.pos.y, field.height - field.wall_margin - ball.radius);
    }

    #[test]
    fn test_wall_bounce_miss() {
        let field = FieldConfig::default();
        let mut ball = test_ball();
        ball.vel = Vec2::new(1.0, 1.0);
        assert!(!wall_bounce(&mut ball, &field));
        assert_eq!(ball.vel.y, 1.0);
    }

    #[test]
    fn test_paddle_contact_center_hit() {
        let paddle = test_paddle(Side::Player);
        let mut ball = test_ball();
        ball.pos = Vec2::new(paddle.x + paddle.width + ball.radius, paddle.center_y());
        let offset = paddle_contact(&ball, &paddle, Side::Player).expect("contact");
        assert!(offset.abs() < 1e-6);
    }

    #[test]
    fn test_paddle_contact_tip_hit() {
        let paddle = test_paddle(Side::Player);
        let mut ball = test_ball();
        ball.pos = Vec2::new(paddle.x + paddle.width + ball.radius, paddle.y);
        let offset = paddle_contact(&ball, &paddle, Side::Player).expect("contact");
        assert!((offset + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_contact_only_leading_edge() {
        // Ball approaching the player paddle from behind (near edge past the
        // paddle's back face) is not a contact
        let paddle = test_paddle(Side::Player);
        let mut ball = test_ball();
        ball.pos = Vec2::new(paddle.x - 1.0, paddle.center_y());
        assert!(paddle_contact(&ball, &paddle, Side::Player).is_none());
    }

    #[test]
    fn test_paddle_contact_misses_above() {
        let paddle = test_paddle(Side::Opponent);
        let mut ball = test_ball();
        ball.pos = Vec2::new(paddle.x - ball.radius, paddle.y - 1.0);
        assert!(paddle_contact(&ball, &paddle, Side::Opponent).is_none());
    }

    #[test]
    fn test_bounce_direction_forced_away() {
        let mut ball = test_ball();
        // Incoming velocity pointed into the player paddle
        ball.vel = Vec2::new(-2.0, 0.5);
        bounce_off_paddle(&mut ball, 0.9, Side::Player, crate::consts::MAX_BOUNCE_ANGLE);
        assert!(ball.vel.x > 0.0);

        ball.vel = Vec2::new(2.0, -0.5);
        bounce_off_paddle(&mut ball, -0.9, Side::Opponent, crate::consts::MAX_BOUNCE_ANGLE);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_bounce_speed_grows_from_base() {
        let mut ball = test_ball();
        // Slower than base: the hit restarts the ramp from base_speed
        ball.vel = Vec2::new(0.5, 0.0);
        bounce_off_paddle(&mut ball, 0.0, Side::Player, crate::consts::MAX_BOUNCE_ANGLE);
        let expected = ball.base_speed * ball.growth_factor;
        assert!((ball.speed() - expected).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_paddle_clamp_stays_in_range(y in -10_000.0f32..10_000.0) {
            let field = FieldConfig::default();
            let mut paddle = test_paddle(Side::Player);
            paddle.y = y;
            paddle.clamp_to_field(&field);
            prop_assert!(paddle.y >= field.paddle_min_y());
            prop_assert!(paddle.y <= field.paddle_max_y(paddle.height));
        }

        #[test]
        fn prop_speed_capped_over_hit_sequences(
            offsets in proptest::collection::vec(-1.0f32..1.0, 1..64)
        ) {
            let mut ball = test_ball();
            ball.vel = Vec2::new(ball.base_speed, 0.0);
            for (i, offset) in offsets.iter().enumerate() {
                let side = if i % 2 == 0 { Side::Player } else { Side::Opponent };
                bounce_off_paddle(&mut ball, *offset, side, crate::consts::MAX_BOUNCE_ANGLE);
                prop_assert!(ball.speed() <= ball.max_speed + 1e-3);
            }
        }

        #[test]
        fn prop_bounce_never_shrinks_speed(
            speed in 0.0f32..5.2,
            offset in -1.0f32..1.0,
        ) {
            let mut ball = test_ball();
            ball.vel = Vec2::new(speed, 0.0);
            let before = ball.speed().max(ball.base_speed);
            bounce_off_paddle(&mut ball, offset, Side::Player, crate::consts::MAX_BOUNCE_ANGLE);
            prop_assert!(ball.speed() >= before.min(ball.max_speed) - 1e-3);
        }
    }
}
