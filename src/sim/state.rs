//! Match state and the control surface exposed to the UI shell
//!
//! Everything the match owns lives in one [`MatchState`] aggregate: paddles,
//! ball, scores, mode, raw input, the quiz interruption, and the seeded RNG.
//! No ambient globals; the tick function and every event handler receive it
//! by reference.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{Edge, InputState};
use crate::config::{BallTuning, FieldConfig, GameConfig, PaddleTuning};
use crate::consts::{SERVE_ANGLE_SPREAD, SERVE_SPEED_MAX, SERVE_SPEED_MIN};
use crate::quiz::{AnswerFeedback, Interruption, QuizBank};
use crate::view::{BallView, Rect, Snapshot};

/// The two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

/// Play mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scripted opponent
    #[default]
    Cpu,
    /// Two humans
    Pvp,
}

impl Mode {
    /// Normalize an external mode string; anything unrecognized is `Cpu`
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "pvp" => Mode::Pvp,
            _ => Mode::Cpu,
        }
    }
}

/// One paddle: fixed x, mutable y, movement ramp, and its side's score
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Discrete movement direction: -1 (up), 0, or 1 (down)
    pub direction: i8,
    pub speed_base: f32,
    /// Current ramped speed; 0 whenever the paddle is not moving
    pub speed_current: f32,
    pub speed_max: f32,
    pub acceleration: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(x: f32, tuning: &PaddleTuning, field: &FieldConfig) -> Self {
        Self {
            x,
            y: field.height / 2.0 - tuning.height / 2.0,
            width: tuning.width,
            height: tuning.height,
            direction: 0,
            speed_base: tuning.speed_base,
            speed_current: 0.0,
            speed_max: tuning.speed_max,
            acceleration: tuning.acceleration,
            score: 0,
        }
    }

    /// Vertical center of the paddle face
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Force y into the legal vertical range
    pub fn clamp_to_field(&mut self, field: &FieldConfig) {
        self.y = self
            .y
            .clamp(field.paddle_min_y(), field.paddle_max_y(self.height));
    }

    /// Advance one tick of paddle motion
    ///
    /// While a direction is held the speed ramps multiplicatively from
    /// `speed_base` up to `speed_max`; releasing stops instantly (no
    /// coasting).
    pub fn apply_movement(&mut self, field: &FieldConfig) {
        if self.direction != 0 {
            self.speed_current = if self.speed_current == 0.0 {
                self.speed_base
            } else {
                (self.speed_current * self.acceleration).min(self.speed_max)
            };
            self.y += f32::from(self.direction) * self.speed_current;
        } else {
            self.speed_current = 0.0;
        }
        self.clamp_to_field(field);
    }

    /// Zero direction and ramped speed
    pub fn halt(&mut self) {
        self.direction = 0;
        self.speed_current = 0.0;
    }

    /// Bounding rectangle for the render snapshot
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub growth_factor: f32,
}

impl Ball {
    pub fn new(tuning: &BallTuning, field: &FieldConfig) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
            radius: tuning.radius,
            base_speed: tuning.base_speed,
            max_speed: tuning.max_speed,
            growth_factor: tuning.growth_factor,
        }
    }

    /// Current speed magnitude
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// True only in the pre-launch idle state
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// Complete match state and control surface
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: GameConfig,
    pub running: bool,
    pub finished: bool,
    pub winner: Option<Side>,
    pub mode: Mode,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub input: InputState,
    /// Trivia interruption in progress, if any
    pub interruption: Option<Interruption>,
    bank: QuizBank,
    rng: Pcg32,
}

impl MatchState {
    /// Create a match with the given configuration, question bank, and seed
    ///
    /// The match starts in the reset-game state: score 0-0, ball served but
    /// paused, awaiting an explicit run.
    pub fn new(config: GameConfig, bank: QuizBank, seed: u64) -> Self {
        let player = Paddle::new(config.player_x(), &config.player, &config.field);
        let opponent = Paddle::new(config.opponent_x(), &config.opponent, &config.field);
        let ball = Ball::new(&config.ball, &config.field);
        let mut state = Self {
            config,
            running: false,
            finished: false,
            winner: None,
            mode: Mode::Cpu,
            player,
            opponent,
            ball,
            input: InputState::default(),
            interruption: None,
            bank,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_game();
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Record a key press/release for one of the four movement controls
    ///
    /// Ignored while a trivia interruption is active: the interruption owns
    /// input focus. Directions are re-derived immediately; the opponent's
    /// direction only follows key state in pvp mode (the CPU policy owns it
    /// in cpu mode).
    pub fn set_hold(&mut self, side: Side, edge: Edge, pressed: bool) {
        if self.interruption.is_some() {
            return;
        }
        self.input.set_hold(side, edge, pressed);
        self.rederive_directions();
    }

    fn rederive_directions(&mut self) {
        self.player.direction = self.input.direction(Side::Player);
        if self.mode == Mode::Pvp {
            self.opponent.direction = self.input.direction(Side::Opponent);
        }
    }

    /// Start/resume or pause the match
    ///
    /// No-op while an interruption is active or after the match finished.
    /// Entering the running state with an idle ball serves it first.
    pub fn toggle_run(&mut self) {
        if self.interruption.is_some() || self.finished {
            return;
        }
        if !self.running {
            self.running = true;
            if self.ball.is_idle() {
                self.reset_ball(None);
            }
        } else {
            self.running = false;
        }
    }

    /// Zero scores and serve fresh; does not touch mode or the running flag
    pub fn reset_match(&mut self) {
        self.player.score = 0;
        self.opponent.score = 0;
        self.finished = false;
        self.winner = None;
        self.input.clear();
        self.player.halt();
        self.opponent.halt();
        self.reset_ball(None);
        log::debug!("match reset");
    }

    /// Full restart: close any interruption, reset the match, start paused
    pub fn reset_game(&mut self) {
        self.interruption = None;
        self.reset_match();
        self.running = false;
    }

    /// Switch play mode; a real change always restarts the match paused
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        log::info!("mode switched to {mode:?}");
        self.reset_game();
    }

    /// Recenter and re-serve the ball
    ///
    /// `direction` is the horizontal serve sign (toward the side that just
    /// lost the point); `None` draws a random side, 50/50.
    pub fn reset_ball(&mut self, direction: Option<f32>) {
        let direction = direction
            .unwrap_or_else(|| if self.rng.random_bool(0.5) { 1.0 } else { -1.0 });
        let angle =
            self.rng.random_range(-SERVE_ANGLE_SPREAD..SERVE_ANGLE_SPREAD) * std::f32::consts::PI;
        let variation = self.rng.random_range(SERVE_SPEED_MIN..SERVE_SPEED_MAX);
        let speed = self.ball.base_speed * variation;
        self.ball.pos = self.config.field.center();
        self.ball.vel = Vec2::new(angle.cos() * speed * direction, angle.sin() * speed);
    }

    /// Award a point and handle everything that follows
    ///
    /// Pauses the match, checks for a finish, clears all key-hold state,
    /// serves toward the loser, and triggers the trivia interruption when the
    /// human scored against the CPU in an unfinished match.
    pub fn score_point(&mut self, scorer: Side) {
        self.paddle_mut(scorer).score += 1;
        self.running = false;
        if self.paddle(scorer).score >= self.config.target_score {
            self.finished = true;
            self.winner = Some(scorer);
            log::info!("match finished, winner {scorer:?}");
        }

        self.input.clear();
        self.rederive_directions();
        self.player.speed_current = 0.0;
        self.opponent.halt();

        let serve_direction = match scorer {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        };
        self.reset_ball(Some(serve_direction));
        log::info!(
            "point for {scorer:?}: {}-{}",
            self.player.score,
            self.opponent.score
        );

        if scorer == Side::Player && self.mode == Mode::Cpu && !self.finished {
            self.trigger_interruption();
        }
    }

    /// Begin a trivia interruption with a random question from the bank
    fn trigger_interruption(&mut self) {
        if self.mode != Mode::Cpu {
            return;
        }
        let Some(item) = self.bank.pick(&mut self.rng).cloned() else {
            return;
        };
        log::debug!("quiz interruption: {}", item.question);
        self.interruption = Some(Interruption::new(item));
        // No residual motion may survive the pause
        self.input.clear();
        self.rederive_directions();
        self.player.speed_current = 0.0;
        self.opponent.halt();
    }

    /// Record the answer for the active interruption
    ///
    /// Returns feedback on the first valid selection; duplicate or
    /// out-of-range selections (or no active interruption) are ignored.
    pub fn answer(&mut self, index: usize) -> Option<AnswerFeedback> {
        self.interruption.as_mut()?.select(index)
    }

    /// Close an answered interruption and resume play
    ///
    /// Only valid once an answer was recorded; the current question is
    /// discarded. Resumes `running` unless the match is finished.
    pub fn continue_after_quiz(&mut self) {
        let Some(quiz) = &self.interruption else {
            return;
        };
        if !quiz.answered() {
            return;
        }
        self.interruption = None;
        if !self.finished {
            self.running = true;
        }
    }

    /// Render-sink snapshot of everything a shell needs to draw a frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.rect(),
            opponent: self.opponent.rect(),
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius,
            },
            player_score: self.player.score,
            opponent_score: self.opponent.score,
            running: self.running,
            finished: self.finished,
            winner: self.winner,
            mode: self.mode,
        }
    }
}
