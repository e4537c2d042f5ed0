use crate::games::models::GameMode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub player_name: String,
    pub mode: GameMode,
    #[serde(default)]
    pub filter: GameFilterRequest,
    #[serde(default)]
    pub total_rounds: Option<u32>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFilterRequest {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub min_population: Option<u64>,
}

/// A guess is either a concrete city id (dropdown or autocomplete input) or
/// free text to be resolved by exact name match.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    #[serde(default)]
    pub city_id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}
