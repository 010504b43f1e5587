//! Point Ladder
//!
//! The within-game scoring ladder: love, 15, 30, 40, advantage. Awarding a
//! point walks the winner one rung up; walking off the top ends the game.

use super::types::Side;

/// Point tally for one side of the game in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointValue {
    #[default]
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
}

impl PointValue {
    /// Scoreboard label ("0", "15", "30", "40", "A")
    pub fn label(self) -> &'static str {
        match self {
            PointValue::Love => "0",
            PointValue::Fifteen => "15",
            PointValue::Thirty => "30",
            PointValue::Forty => "40",
            PointValue::Advantage => "A",
        }
    }
}

/// Result of awarding one point.
///
/// Winning from forty (opponent below forty) or from advantage ends the
/// game. That event is its own variant rather than a reset point value,
/// so it can never be confused with a genuine love-love start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Game continues
    Continuing,
    /// The point decided the game
    GameWon,
}

/// Point values for the game in progress (one per side).
///
/// Invariant: at most one side is at advantage. The only rung above forty
/// is reached from deuce, and losing the advantage point drops both sides
/// back to forty before the opponent can climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GamePoints {
    first: PointValue,
    second: PointValue,
}

impl GamePoints {
    /// Current point value for `side`
    pub fn value(self, side: Side) -> PointValue {
        if side.is_first() {
            self.first
        } else {
            self.second
        }
    }

    fn set_value(&mut self, side: Side, value: PointValue) {
        if side.is_first() {
            self.first = value;
        } else {
            self.second = value;
        }
    }

    /// Both sides still at love (nothing to show on the scoreboard)
    pub fn is_love_all(self) -> bool {
        self.first == PointValue::Love && self.second == PointValue::Love
    }

    /// Award one point to `winner` and report whether the game ended.
    ///
    /// Total over every (winner, opponent) value pair:
    /// - below forty the winner climbs one rung,
    /// - forty vs forty goes to advantage,
    /// - forty vs advantage cancels the advantage (back to deuce),
    /// - forty vs below-forty and advantage-vs-anything win the game.
    pub fn award(&mut self, winner: Side) -> PointOutcome {
        use PointValue::*;

        let next = match (self.value(winner), self.value(winner.opponent())) {
            (Love, _) => Fifteen,
            (Fifteen, _) => Thirty,
            (Thirty, _) => Forty,
            (Forty, Advantage) => {
                self.set_value(winner.opponent(), Forty);
                Forty
            }
            (Forty, Forty) => Advantage,
            (Forty, _) | (Advantage, _) => return PointOutcome::GameWon,
        };
        self.set_value(winner, next);
        PointOutcome::Continuing
    }
}
