//! Render-sink snapshot and the view capability boundary
//!
//! The core never touches presentation state. Each frame the driver takes a
//! [`Snapshot`] and hands it to whatever implements [`GameView`]; quiz
//! presentation flows through the same trait. Styling, overlays, and
//! mode-appropriate winner wording are entirely the shell's business.

use serde::Serialize;

use crate::quiz::{AnswerFeedback, QuizItem};
use crate::sim::{Mode, Side};

/// Axis-aligned rectangle (paddle geometry for drawing)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Ball geometry for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: Rect,
    pub opponent: Rect,
    pub ball: BallView,
    pub player_score: u32,
    pub opponent_score: u32,
    pub running: bool,
    pub finished: bool,
    pub winner: Option<Side>,
    pub mode: Mode,
}

/// Capability interface implemented by the platform shell
pub trait GameView {
    /// Present one frame
    fn present(&mut self, snapshot: &Snapshot);
    /// Present a trivia question at the start of an interruption
    fn present_question(&mut self, item: &QuizItem);
    /// Present answer feedback (correct/selected indices plus explanation)
    fn present_feedback(&mut self, feedback: &AnswerFeedback, explanation: &str);
}
