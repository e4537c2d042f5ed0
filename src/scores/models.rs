use crate::games::models::{GameMode, GuessRecord};
use serde::Serialize;

/// One archived game, written exactly once when a session reaches game over.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub player_name: String,
    pub score: u64,
    pub mode: GameMode,
    pub rounds: u32,
    pub created_at_unix_secs: u64,
    pub guesses: Vec<GuessRecord>,
}
