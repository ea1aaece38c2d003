//! One simulation tick
//!
//! The external driver (frame callback, timer, or a test) calls [`tick`]
//! once per logical frame. A tick fully completes before anything renders;
//! there is no real-time assumption inside the core.

use super::collision::{bounce_off_paddle, paddle_contact, wall_bounce};
use super::state::{MatchState, Mode, Side};

/// Advance the match by one tick
///
/// No-op unless the match is running and unfinished; pausing (including the
/// trivia interruption) is a data-flag gate, not a scheduler concern.
pub fn tick(state: &mut MatchState) {
    if !state.running || state.finished {
        return;
    }

    // Player paddle follows its derived key direction
    state.player.apply_movement(&state.config.field);

    // Opponent: reactive CPU tracking in cpu mode, key-derived in pvp.
    // The CPU policy is stateless and recomputed every tick.
    match state.mode {
        Mode::Cpu => {
            let delta = state.ball.pos.y - state.opponent.center_y();
            state.opponent.direction = if delta.abs() <= state.config.cpu_dead_zone {
                0
            } else if delta < 0.0 {
                -1
            } else {
                1
            };
        }
        Mode::Pvp => {
            state.opponent.direction = state.input.direction(Side::Opponent);
        }
    }
    state.opponent.apply_movement(&state.config.field);

    // Ball: explicit Euler, one unit tick
    state.ball.pos += state.ball.vel;
    wall_bounce(&mut state.ball, &state.config.field);

    if let Some(offset) = paddle_contact(&state.ball, &state.player, Side::Player) {
        bounce_off_paddle(
            &mut state.ball,
            offset,
            Side::Player,
            state.config.max_bounce_angle,
        );
    }
    if let Some(offset) = paddle_contact(&state.ball, &state.opponent, Side::Opponent) {
        bounce_off_paddle(
            &mut state.ball,
            offset,
            Side::Opponent,
            state.config.max_bounce_angle,
        );
    }

    // Scoring: ball fully past either goal line
    if state.ball.pos.x + state.ball.radius < 0.0 {
        state.score_point(Side::Opponent);
    } else if state.ball.pos.x - state.ball.radius > state.config.field.width {
        state.score_point(Side::Player);
    }
}
