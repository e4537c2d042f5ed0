use crate::games::models::GameMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoresResponse {
    pub error: bool,
    pub scores: Vec<HighScoreRow>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreRow {
    pub player_name: String,
    pub score: u64,
    pub mode: GameMode,
    pub rounds: u32,
    pub created_at_unix_secs: u64,
}
