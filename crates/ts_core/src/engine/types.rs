//! Scoring Types
//!
//! Shared identifiers and tallies used across the scoring engine.

use serde::{Deserialize, Serialize};

/// Competitor identifier (first-listed side = true, second = false)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Side(pub bool);

impl Side {
    pub const FIRST: Self = Self(true);
    pub const SECOND: Self = Self(false);

    pub fn is_first(self) -> bool {
        self.0
    }

    pub fn opponent(self) -> Self {
        Self(!self.0)
    }

    /// Stable lowercase name for logs and host-facing payloads
    pub fn name(self) -> &'static str {
        if self.0 {
            "first"
        } else {
            "second"
        }
    }
}

/// Games won by each side within one set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetScore {
    pub first: u16,
    pub second: u16,
}

impl SetScore {
    pub fn new(first: u16, second: u16) -> Self {
        Self { first, second }
    }

    /// Games won by `side`
    pub fn games(self, side: Side) -> u16 {
        if side.is_first() {
            self.first
        } else {
            self.second
        }
    }

    pub fn add_game(&mut self, side: Side) {
        if side.is_first() {
            self.first += 1;
        } else {
            self.second += 1;
        }
    }

    /// Set-winning condition: at least 6 games and a 2-game lead.
    /// Applies at any score, so a set level at 6-6 continues until one
    /// side pulls 2 games clear (advantage set, no tie-break).
    pub fn is_won_by(self, side: Side) -> bool {
        self.games(side) >= 6 && self.games(side).abs_diff(self.games(side.opponent())) >= 2
    }

    pub fn is_blank(self) -> bool {
        self.first == 0 && self.second == 0
    }
}
