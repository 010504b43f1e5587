//! JSON API
//!
//! Host-facing request/response layer over the scoring engine. Hosts hand
//! in one recorded match per request and get the score line back together
//! with the raw state, so they can render their own scoreboard.

use serde::{Deserialize, Serialize};

use crate::engine::types::SetScore;
use crate::engine::MatchScorer;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    /// Recorded point symbols, one per point, in playing order
    pub points: String,
}

/// Point labels of the game in progress, server's side first
#[derive(Debug, Serialize)]
pub struct GameLine {
    pub server: &'static str,
    pub receiver: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    /// Formatted score line, rendered from the server's perspective
    pub score_line: String,
    /// Completed sets in playing order, first-side games first
    pub completed_sets: Vec<SetScore>,
    /// Set in progress, first-side games first
    pub current_set: SetScore,
    /// Game in progress; absent while both sides are at love
    pub game: Option<GameLine>,
    /// Side currently serving ("first" or "second")
    pub server: &'static str,
}

/// Score one recorded match from a JSON request.
///
/// Request: `{"schema_version": 1, "points": "AABB..."}`
pub fn score_match_json(request_json: &str) -> Result<String, String> {
    // Parse request
    let request: MatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    // Validate schema version
    if request.schema_version != 1 {
        return Err(format!(
            "Unsupported schema version: {}",
            request.schema_version
        ));
    }

    let mut scorer = MatchScorer::new();
    scorer.feed(&request.points);

    let server = scorer.server();
    let game = scorer.game();
    let response = MatchResponse {
        schema_version: 1,
        score_line: scorer.summary(),
        completed_sets: scorer.completed_sets().to_vec(),
        current_set: scorer.current_set(),
        game: (!game.is_love_all()).then(|| GameLine {
            server: game.value(server).label(),
            receiver: game.value(server.opponent()).label(),
        }),
        server: server.name(),
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_match_json_roundtrip() {
        let response = score_match_json(r#"{"schema_version":1,"points":"AAAB"}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["score_line"], "0-0 40-15");
        assert_eq!(value["server"], "first");
        assert_eq!(value["current_set"]["first"], 0);
        assert_eq!(value["game"]["server"], "40");
        assert_eq!(value["game"]["receiver"], "15");
    }

    #[test]
    fn test_game_field_absent_at_love_all() {
        let response = score_match_json(r#"{"schema_version":1,"points":""}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["score_line"], "0-0");
        assert!(value["game"].is_null());
    }

    #[test]
    fn test_completed_sets_stay_first_side_first() {
        let points = "AAAA".repeat(6);
        let request = format!(r#"{{"schema_version":1,"points":"{}"}}"#, points);
        let value: serde_json::Value =
            serde_json::from_str(&score_match_json(&request).unwrap()).unwrap();

        // Raw state is side-indexed; only score_line is perspective-aware.
        assert_eq!(value["completed_sets"][0]["first"], 6);
        assert_eq!(value["completed_sets"][0]["second"], 0);
        assert_eq!(value["score_line"], "6-0 0-0");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = score_match_json("{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request:"));
    }

    #[test]
    fn test_unsupported_schema_version() {
        let err = score_match_json(r#"{"schema_version":2,"points":""}"#).unwrap_err();
        assert_eq!(err, "Unsupported schema version: 2");
    }
}
