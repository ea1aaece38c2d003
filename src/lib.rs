//! Trivia Pong - classic two-paddle Pong with quiz interruptions
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, match control)
//! - `quiz`: Trivia question bank and the modal interruption state machine
//! - `config`: Data-driven field geometry and tuning
//! - `view`: Render-sink snapshot and the view capability trait
//!
//! The simulation is driven by an external caller invoking [`sim::tick`]
//! once per frame; the core makes no assumption about real time.

pub mod config;
pub mod quiz;
pub mod sim;
pub mod view;

pub use config::GameConfig;
pub use quiz::{AnswerFeedback, Interruption, QuizBank, QuizItem};
pub use sim::{MatchState, Mode, Side, tick};
pub use view::{GameView, Snapshot};

/// Default game tuning constants
///
/// All of these are overridable through [`config::GameConfig`]; the values
/// here are the stock balance the game ships with.
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    /// Top/bottom rail inset the ball reflects off
    pub const WALL_MARGIN: f32 = 15.0;
    /// Vertical travel limit for paddles
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Horizontal distance from each side wall to its paddle
    pub const PADDLE_INSET: f32 = 30.0;
    pub const PADDLE_SPEED_BASE: f32 = 1.5;
    pub const PADDLE_SPEED_MAX: f32 = 3.8;
    /// Per-tick speed ramp while a movement key is held
    pub const PLAYER_ACCELERATION: f32 = 1.06;
    /// The CPU paddle ramps slightly slower than the player
    pub const OPPONENT_ACCELERATION: f32 = 1.05;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_BASE_SPEED: f32 = 1.6;
    /// Hard ceiling on ball speed magnitude
    pub const BALL_MAX_SPEED: f32 = 5.2;
    /// Speed multiplier applied on every paddle hit
    pub const BALL_GROWTH_FACTOR: f32 = 1.07;

    /// CPU tolerance band around the ball's y before it starts moving
    pub const CPU_DEAD_ZONE: f32 = 12.0;
    /// Maximum bounce angle off a paddle (radians, ±60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Serve angle is drawn uniformly from ±(this fraction of π)
    pub const SERVE_ANGLE_SPREAD: f32 = 0.35;
    /// Serve speed multiplier range
    pub const SERVE_SPEED_MIN: f32 = 0.85;
    pub const SERVE_SPEED_MAX: f32 = 1.15;

    /// First side to reach this score wins the match
    pub const TARGET_SCORE: u32 = 5;
}
