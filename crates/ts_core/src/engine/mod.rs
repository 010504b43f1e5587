//! Match Scoring Engine
//!
//! The scoring state machine for one recorded tennis match: point ladder,
//! game and set lifecycle, serve alternation, and score line rendering.

pub mod point_ladder;
pub mod scorer;
pub mod summary;
pub mod types;


pub use point_ladder::{GamePoints, PointOutcome, PointValue};
pub use scorer::{MatchScorer, FIRST_SIDE_MARKER};
pub use types::{SetScore, Side};
