//! Score Line Rendering
//!
//! Formatting methods for `MatchScorer`, kept out of scorer.rs so the
//! state machine stays free of presentation concerns.
//!
//! The line is rendered from the serving side's perspective: in every
//! token the server's tally comes first.

use std::fmt::Write;

use super::scorer::MatchScorer;

impl MatchScorer {
    /// Render the live score line: completed sets in playing order, then
    /// the set in progress (always shown), then the game in progress
    /// (omitted while both sides are at love). Single-space separated,
    /// no trailing whitespace.
    pub fn summary(&self) -> String {
        let server = self.server();
        let receiver = server.opponent();
        let mut line = String::new();

        for set in self.completed_sets() {
            if set.is_blank() {
                continue;
            }
            let _ = write!(line, "{}-{} ", set.games(server), set.games(receiver));
        }

        let current = self.current_set();
        let _ = write!(line, "{}-{}", current.games(server), current.games(receiver));

        let game = self.game();
        if !game.is_love_all() {
            let _ = write!(
                line,
                " {}-{}",
                game.value(server).label(),
                game.value(receiver).label()
            );
        }

        line
    }
}
