//! Data-driven field geometry and game tuning
//!
//! The simulation's collision math is parameterized by a [`GameConfig`]
//! supplied at match construction; nothing in `sim` hardcodes geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playfield geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    /// Inset of the top/bottom rails the ball reflects off
    pub wall_margin: f32,
    /// Vertical margin paddles are clamped inside
    pub paddle_margin: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            wall_margin: WALL_MARGIN,
            paddle_margin: PADDLE_MARGIN,
        }
    }
}

impl FieldConfig {
    /// Center of the playfield (serve position)
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Highest legal paddle y for a paddle of the given height
    #[inline]
    pub fn paddle_min_y(&self) -> f32 {
        self.paddle_margin
    }

    /// Lowest legal paddle y for a paddle of the given height
    #[inline]
    pub fn paddle_max_y(&self, paddle_height: f32) -> f32 {
        self.height - paddle_height - self.paddle_margin
    }
}

/// Per-paddle movement tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    pub width: f32,
    pub height: f32,
    pub speed_base: f32,
    pub speed_max: f32,
    /// Multiplicative per-tick ramp while moving
    pub acceleration: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed_base: PADDLE_SPEED_BASE,
            speed_max: PADDLE_SPEED_MAX,
            acceleration: PLAYER_ACCELERATION,
        }
    }
}

/// Ball physics tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallTuning {
    pub radius: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    /// Speed multiplier per paddle hit (>1)
    pub growth_factor: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
            max_speed: BALL_MAX_SPEED,
            growth_factor: BALL_GROWTH_FACTOR,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub player: PaddleTuning,
    pub opponent: PaddleTuning,
    pub ball: BallTuning,
    /// First side to reach this score wins
    pub target_score: u32,
    /// Horizontal distance from each side wall to its paddle face
    pub paddle_inset: f32,
    /// CPU paddle tolerance band around the ball's y
    pub cpu_dead_zone: f32,
    /// Maximum bounce angle off a paddle (radians)
    pub max_bounce_angle: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            player: PaddleTuning::default(),
            opponent: PaddleTuning {
                acceleration: OPPONENT_ACCELERATION,
                ..PaddleTuning::default()
            },
            ball: BallTuning::default(),
            target_score: TARGET_SCORE,
            paddle_inset: PADDLE_INSET,
            cpu_dead_zone: CPU_DEAD_ZONE,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
        }
    }
}

impl GameConfig {
    /// Fixed x of the player paddle (left side)
    #[inline]
    pub fn player_x(&self) -> f32 {
        self.paddle_inset
    }

    /// Fixed x of the opponent paddle (right side, mirrored)
    #[inline]
    pub fn opponent_x(&self) -> f32 {
        self.field.width - self.paddle_inset - self.opponent.width
    }

    /// Parse a configuration from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid game config, using defaults: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paddle_positions_mirror() {
        let config = GameConfig::default();
        assert_eq!(config.player_x(), 30.0);
        // Opponent face sits the same inset from the right wall
        assert_eq!(
            config.field.width - (config.opponent_x() + config.opponent.width),
            config.paddle_inset
        );
    }

    #[test]
    fn test_from_json_overrides() {
        let config = GameConfig::from_json(r#"{"target_score": 11, "field": {"width": 640.0}}"#);
        assert_eq!(config.target_score, 11);
        assert_eq!(config.field.width, 640.0);
        // Untouched values keep their defaults
        assert_eq!(config.ball.max_speed, 5.2);
    }

    #[test]
    fn test_from_json_garbage_falls_back() {
        let config = GameConfig::from_json("not json at all");
        assert_eq!(config.target_score, 5);
        assert_eq!(config.field.height, 500.0);
    }

    #[test]
    fn test_field_paddle_range() {
        let field = FieldConfig::default();
        assert_eq!(field.paddle_min_y(), 20.0);
        assert_eq!(field.paddle_max_y(90.0), 500.0 - 90.0 - 20.0);
    }
}
