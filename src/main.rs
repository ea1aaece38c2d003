//! Headless demo driver
//!
//! Plays a full CPU-mode match in the terminal with a scripted "human":
//! the player paddle is driven through the real key-hold interface, quizzes
//! are answered automatically, and every point is logged. Stands in for the
//! browser/canvas shell, which is out of scope for the core.

use trivia_pong::sim::{Edge, Side, tick};
use trivia_pong::{AnswerFeedback, GameConfig, GameView, MatchState, QuizBank, QuizItem, Snapshot};

/// Terminal implementation of the view capability
struct ConsoleView {
    last_scores: (u32, u32),
}

impl ConsoleView {
    fn new() -> Self {
        Self { last_scores: (0, 0) }
    }
}

impl GameView for ConsoleView {
    fn present(&mut self, snapshot: &Snapshot) {
        let scores = (snapshot.player_score, snapshot.opponent_score);
        if scores != self.last_scores {
            println!("score: {} - {}", scores.0, scores.1);
            self.last_scores = scores;
        }
        if snapshot.finished {
            match snapshot.winner {
                Some(Side::Player) => println!("you win!"),
                Some(Side::Opponent) => println!("the CPU wins..."),
                None => {}
            }
        }
    }

    fn present_question(&mut self, item: &QuizItem) {
        println!("quiz: {}", item.question);
        for (i, option) in item.options.iter().enumerate() {
            println!("  [{i}] {option}");
        }
    }

    fn present_feedback(&mut self, feedback: &AnswerFeedback, explanation: &str) {
        if feedback.correct {
            println!("correct! {explanation}");
        } else {
            println!(
                "wrong (answer was [{}]). {explanation}",
                feedback.correct_index
            );
        }
    }
}

/// Drive the player paddle toward the ball through the key-hold interface
fn scripted_player_input(state: &mut MatchState) {
    let delta = state.ball.pos.y - state.player.center_y();
    let follow_band = 16.0;
    state.set_hold(Side::Player, Edge::Up, delta < -follow_band);
    state.set_hold(Side::Player, Edge::Down, delta > follow_band);
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let config = GameConfig::default();
    let bank = QuizBank::from_json(include_str!("../data/quiz_bank.json"));
    log::info!("starting demo match, seed {seed}, {} quiz items", bank.len());

    let mut state = MatchState::new(config, bank, seed);
    let mut view = ConsoleView::new();
    let mut ticks: u64 = 0;
    state.toggle_run();

    // Safety bound so a degenerate rally cannot spin forever
    while !state.finished && ticks < 1_000_000 {
        if let Some(item) = state.interruption.as_ref().map(|q| q.item().clone()) {
            view.present_question(&item);
            // Rotate through the options so both outcomes show up
            let guess = (ticks as usize) % item.options.len();
            if let Some(feedback) = state.answer(guess) {
                view.present_feedback(&feedback, &item.explanation);
            }
            state.continue_after_quiz();
        } else if !state.running {
            // Between points; serve the next rally
            state.toggle_run();
        }

        scripted_player_input(&mut state);
        tick(&mut state);
        view.present(&state.snapshot());
        ticks += 1;
    }

    let final_snapshot = state.snapshot();
    match serde_json::to_string_pretty(&final_snapshot) {
        Ok(json) => println!("final state:\n{json}"),
        Err(err) => log::error!("failed to serialize final snapshot: {err}"),
    }
    log::info!("demo finished after {ticks} ticks");
}
