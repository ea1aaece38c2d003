//! Deterministic match simulation
//!
//! All gameplay logic lives here. The module is pure and deterministic:
//! - Unit timestep only (one tick = one call)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_paddle, paddle_contact, wall_bounce};
pub use input::{Edge, InputState};
pub use state::{Ball, MatchState, Mode, Paddle, Side};
pub use tick::tick;
