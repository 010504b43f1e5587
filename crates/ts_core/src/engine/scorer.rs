//! Match Scorer
//!
//! One `MatchScorer` instance scores one recorded match. It consumes point
//! symbols left to right and keeps the full bookkeeping: the game in
//! progress, the set in progress, completed sets, and the serving side.

use super::point_ladder::{GamePoints, PointOutcome};
use super::types::{SetScore, Side};

/// Canonical marker for a point won by the first-listed side
pub const FIRST_SIDE_MARKER: char = 'A';

/// Per-match scoring state machine.
///
/// Constructed fresh for every recorded match and discarded after the
/// score line is produced; there is no cross-match state.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    completed_sets: Vec<SetScore>,
    current_set: SetScore,
    game: GamePoints,
    server: Side,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    /// Fresh match: no sets played, love all, first side to serve
    pub fn new() -> Self {
        Self {
            completed_sets: Vec::new(),
            current_set: SetScore::default(),
            game: GamePoints::default(),
            server: Side::FIRST,
        }
    }

    /// Score a whole recorded match in one call
    pub fn score(points: &str) -> String {
        let mut scorer = Self::new();
        scorer.feed(points);
        scorer.summary()
    }

    /// Classify one recorded symbol. The first-side marker is matched
    /// exactly; every other symbol counts for the second side. Recorded
    /// inputs rely on this fallback, so it must not tighten.
    pub fn classify(symbol: char) -> Side {
        if symbol == FIRST_SIDE_MARKER {
            Side::FIRST
        } else {
            Side::SECOND
        }
    }

    /// Consume a sequence of point symbols, left to right
    pub fn feed(&mut self, points: &str) {
        for symbol in points.chars() {
            self.award_point(Self::classify(symbol));
        }
    }

    /// Award a single point to `winner` and run the game/set lifecycle
    pub fn award_point(&mut self, winner: Side) {
        if self.game.award(winner) == PointOutcome::GameWon {
            self.complete_game(winner);
        }
    }

    fn complete_game(&mut self, winner: Side) {
        self.current_set.add_game(winner);
        self.game = GamePoints::default();
        self.server = self.server.opponent();
        log::debug!(
            "game to {}: current set {}-{}, {} to serve",
            winner.name(),
            self.current_set.first,
            self.current_set.second,
            self.server.name()
        );

        if self.current_set.is_won_by(winner) {
            self.complete_set(winner);
        }
    }

    fn complete_set(&mut self, winner: Side) {
        log::debug!(
            "set to {}: {}-{} ({} sets completed)",
            winner.name(),
            self.current_set.first,
            self.current_set.second,
            self.completed_sets.len() + 1
        );
        self.completed_sets.push(self.current_set);
        self.current_set = SetScore::default();
    }

    /// Sets already decided, in playing order
    pub fn completed_sets(&self) -> &[SetScore] {
        &self.completed_sets
    }

    /// Game tally of the set in progress
    pub fn current_set(&self) -> SetScore {
        self.current_set
    }

    /// Point values of the game in progress
    pub fn game(&self) -> GamePoints {
        self.game
    }

    /// Side currently serving
    pub fn server(&self) -> Side {
        self.server
    }
}
