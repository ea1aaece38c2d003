//! Key-hold tracking and discrete direction derivation
//!
//! Four independent hold flags (up/down per side) feed each paddle's
//! direction: both or neither flag set means 0, otherwise ±1. The flags are
//! force-cleared at discrete state boundaries (point scored, match reset,
//! interruption trigger) so keys never "stick" across them.

use super::state::Side;

/// Which edge of a side's movement pair a key event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Up,
    Down,
}

/// Raw hold state for the four logical movement controls
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    player_up: bool,
    player_down: bool,
    opponent_up: bool,
    opponent_down: bool,
}

impl InputState {
    /// Record a key press or release
    pub fn set_hold(&mut self, side: Side, edge: Edge, pressed: bool) {
        match (side, edge) {
            (Side::Player, Edge::Up) => self.player_up = pressed,
            (Side::Player, Edge::Down) => self.player_down = pressed,
            (Side::Opponent, Edge::Up) => self.opponent_up = pressed,
            (Side::Opponent, Edge::Down) => self.opponent_down = pressed,
        }
    }

    /// Derive a side's movement direction from its two hold flags
    ///
    /// Up is negative y. Both-or-neither held yields 0.
    pub fn direction(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Player => (self.player_up, self.player_down),
            Side::Opponent => (self.opponent_up, self.opponent_down),
        };
        if up == down {
            0
        } else if up {
            -1
        } else {
            1
        }
    }

    /// Force-clear all four hold flags
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neither_held_is_zero() {
        let input = InputState::default();
        assert_eq!(input.direction(Side::Player), 0);
        assert_eq!(input.direction(Side::Opponent), 0);
    }

    #[test]
    fn test_single_hold_direction() {
        let mut input = InputState::default();
        input.set_hold(Side::Player, Edge::Up, true);
        assert_eq!(input.direction(Side::Player), -1);
        // Other side unaffected
        assert_eq!(input.direction(Side::Opponent), 0);

        input.set_hold(Side::Player, Edge::Up, false);
        input.set_hold(Side::Player, Edge::Down, true);
        assert_eq!(input.direction(Side::Player), 1);
    }

    #[test]
    fn test_both_held_cancel_out() {
        let mut input = InputState::default();
        input.set_hold(Side::Opponent, Edge::Up, true);
        input.set_hold(Side::Opponent, Edge::Down, true);
        assert_eq!(input.direction(Side::Opponent), 0);

        // Releasing one resolves the conflict
        input.set_hold(Side::Opponent, Edge::Down, false);
        assert_eq!(input.direction(Side::Opponent), -1);
    }

    #[test]
    fn test_clear_drops_all_holds() {
        let mut input = InputState::default();
        input.set_hold(Side::Player, Edge::Down, true);
        input.set_hold(Side::Opponent, Edge::Up, true);
        input.clear();
        assert_eq!(input.direction(Side::Player), 0);
        assert_eq!(input.direction(Side::Opponent), 0);
    }
}
