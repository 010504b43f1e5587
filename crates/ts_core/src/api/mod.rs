pub mod json_api;

pub use json_api::{score_match_json, GameLine, MatchRequest, MatchResponse};
