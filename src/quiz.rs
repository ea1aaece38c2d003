//! Trivia question bank and the modal interruption state machine
//!
//! After each point the human wins against the CPU, the match pauses and a
//! question from the bank is presented. The interruption owns input focus
//! until the player answers and explicitly continues.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One trivia question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    /// Ordered answer options
    pub options: Vec<String>,
    /// Index of the correct option
    pub answer: usize,
    /// Shown after answering, right or wrong
    pub explanation: String,
}

/// Read-only collection of quiz items
///
/// The core only ever picks uniformly at random; an empty bank means the
/// interruption never triggers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizBank {
    items: Vec<QuizItem>,
}

impl QuizBank {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self { items }
    }

    /// Parse a bank from JSON, falling back to an empty bank on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<QuizItem>>(json) {
            Ok(items) => Self { items },
            Err(err) => {
                log::warn!("invalid quiz bank, quizzes disabled: {err}");
                Self::default()
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pick one question uniformly at random
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&QuizItem> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.items.len());
        Some(&self.items[index])
    }
}

/// Outcome of the one answer recorded for an interruption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    /// Option index the player selected
    pub selected: usize,
    /// Index of the correct option
    pub correct_index: usize,
    pub correct: bool,
}

/// A trivia interruption in progress
///
/// State machine: unanswered -> answered. Created when a qualifying point is
/// scored, dropped on explicit continuation; `MatchState` holds it as an
/// `Option` so "idle" is simply `None`.
#[derive(Debug, Clone)]
pub struct Interruption {
    item: QuizItem,
    feedback: Option<AnswerFeedback>,
}

impl Interruption {
    pub fn new(item: QuizItem) -> Self {
        Self { item, feedback: None }
    }

    /// The question being presented
    #[inline]
    pub fn item(&self) -> &QuizItem {
        &self.item
    }

    #[inline]
    pub fn answered(&self) -> bool {
        self.feedback.is_some()
    }

    /// Feedback for the recorded answer, if one was recorded
    #[inline]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        self.feedback
    }

    /// Explanation text for display alongside the feedback
    #[inline]
    pub fn explanation(&self) -> &str {
        &self.item.explanation
    }

    /// Record an answer
    ///
    /// Exactly one selection is accepted per question instance. Duplicate
    /// or out-of-range selections are ignored and return `None`.
    pub fn select(&mut self, index: usize) -> Option<AnswerFeedback> {
        if self.feedback.is_some() || index >= self.item.options.len() {
            return None;
        }
        let feedback = AnswerFeedback {
            selected: index,
            correct_index: self.item.answer,
            correct: index == self.item.answer,
        };
        self.feedback = Some(feedback);
        Some(feedback)
    }
}
