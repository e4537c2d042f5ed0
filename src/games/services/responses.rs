use crate::cities::models::City;
use crate::games::models::{GameMode, GuessRecord};
use serde::Serialize;

/// Where the current target is, without giving away which city it is.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPreview {
    pub latitude: f64,
    pub longitude: f64,
}

impl TargetPreview {
    pub fn of(city: &City) -> Self {
        Self {
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<StartGameError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_round: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rounds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetPreview>,
}

impl StartGameResponse {
    pub fn failed(error_code: StartGameError) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            game_id: None,
            current_round: None,
            total_rounds: None,
            target: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StartGameError {
    PlayerNameRequired,
    PlayerNameTooLong,
    InvalidRoundCount,
    NoEligibleCity,
    CatalogUnavailable,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameStateError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameStateBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStateError {
    GameNotFound,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateBody {
    pub player_name: String,
    pub mode: GameMode,
    pub status: GamePhase,
    pub current_round: u32,
    pub total_rounds: u32,
    pub score: u64,
    /// Present only while a round is in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetPreview>,
    /// Present from the moment a guess lands until the next round starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_city: Option<City>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_guess: Option<GuessRecord>,
    /// Full history, exposed once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guesses: Option<Vec<GuessRecord>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    NotStarted,
    InRound,
    ShowingResult,
    GameOver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SubmitGuessError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitGuessError {
    GameNotFound,
    CityNotFound,
    NoActiveRound,
    CatalogUnavailable,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round: u32,
    pub actual_city: City,
    pub guessed_city: City,
    pub distance_km: f64,
    pub points: u64,
    pub score: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<AdvanceRoundError>,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_round: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guesses: Option<Vec<GuessRecord>>,
}

impl AdvanceRoundResponse {
    pub fn failed(error_code: AdvanceRoundError) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            game_over: false,
            current_round: None,
            target: None,
            final_score: None,
            guesses: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AdvanceRoundError {
    GameNotFound,
    NoRoundToAdvance,
    NoEligibleCity,
    CatalogUnavailable,
}
