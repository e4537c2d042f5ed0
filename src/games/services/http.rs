use crate::app_context::AppContext;
use crate::cities::models::{City, CityFilter};
use crate::games::consts::{DEFAULT_ROUNDS_PER_GAME, MAX_PLAYER_NAME_LENGTH};
use crate::games::errors::GameFlowError;
use crate::games::models::{Game, GameStatus};
use crate::games::requests::{GuessRequest, StartGameRequest};
use crate::games::services::responses::{
    AdvanceRoundError, AdvanceRoundResponse, GamePhase, GameStateBody, GameStateError,
    GameStateResponse, RoundResult, StartGameError, StartGameResponse, SubmitGuessError,
    SubmitGuessResponse, TargetPreview,
};
use crate::scores::models::ScoreEntry;
use crate::storage::interface::{
    GameFlowRepo, GameRepo, ICityCatalog, IGameStorage, IScoreArchive,
};
use std::time::{SystemTime, UNIX_EPOCH};
use unicode_segmentation::UnicodeSegmentation;

pub struct CreateGameHttpHandler<CS: ICityCatalog, GS: IGameStorage> {
    app_context: AppContext<CS, GS>,
}

impl<CS, GS> CreateGameHttpHandler<CS, GS>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<CS, GS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self, request: StartGameRequest) -> StartGameResponse {
        let player_name = request.player_name.trim();
        if player_name.is_empty() {
            return StartGameResponse::failed(StartGameError::PlayerNameRequired);
        }
        if player_name.graphemes(true).count() > MAX_PLAYER_NAME_LENGTH {
            tracing::warn!(
                "Rejecting a new game because the player name is too long: \
                {} symbols when at most {} is allowed.",
                player_name.len(),
                MAX_PLAYER_NAME_LENGTH,
            );
            return StartGameResponse::failed(StartGameError::PlayerNameTooLong);
        }
        let total_rounds = request.total_rounds.unwrap_or(DEFAULT_ROUNDS_PER_GAME);
        if total_rounds == 0 {
            return StartGameResponse::failed(StartGameError::InvalidRoundCount);
        }
        let filter = CityFilter {
            countries: request.filter.countries,
            min_population: request.filter.min_population,
            exclude: Vec::new(),
        };
        let target = match self.app_context.cities.find_random(&filter).await {
            Ok(Some(city)) => city,
            Ok(None) => return StartGameResponse::failed(StartGameError::NoEligibleCity),
            Err(err) => {
                tracing::error!("Target selection for a new game failed: {err}.");
                return StartGameResponse::failed(StartGameError::CatalogUnavailable);
            }
        };
        let mut game = Game::new(player_name.to_string(), request.mode, filter, total_rounds);
        let preview = TargetPreview::of(&target);
        game.begin_round(target)
            .expect("A brand new game always accepts its first round.");
        let game_id = self.app_context.games.create(game).await;
        StartGameResponse {
            error: false,
            error_code: None,
            game_id: Some(game_id),
            current_round: Some(1),
            total_rounds: Some(total_rounds),
            target: Some(preview),
        }
    }
}

pub struct GamesHttpHandler<CS: ICityCatalog, GS: IGameStorage> {
    app_context: AppContext<CS, GS>,
    game_id: String,
}

impl<CS, GS> GamesHttpHandler<CS, GS>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<CS, GS>, game_id: String) -> Self {
        Self {
            app_context,
            game_id,
        }
    }

    pub async fn state(&self) -> GameStateResponse {
        let Some(game) = self.app_context.games.game(&self.game_id).await else {
            return GameStateResponse {
                error: true,
                error_code: Some(GameStateError::GameNotFound),
                state: None,
            };
        };
        let (status, target, actual_city) = match &game.status {
            GameStatus::NotStarted => (GamePhase::NotStarted, None, None),
            GameStatus::InRound { target } => {
                (GamePhase::InRound, Some(TargetPreview::of(target)), None)
            }
            GameStatus::ShowingResult { target } => {
                (GamePhase::ShowingResult, None, Some(target.clone()))
            }
            GameStatus::GameOver => (GamePhase::GameOver, None, None),
        };
        let last_guess = match status {
            GamePhase::ShowingResult => game.guesses.last().cloned(),
            _ => None,
        };
        let guesses = match status {
            GamePhase::GameOver => Some(game.guesses.clone()),
            _ => None,
        };
        GameStateResponse {
            error: false,
            error_code: None,
            state: Some(GameStateBody {
                player_name: game.player_name.clone(),
                mode: game.mode,
                status,
                current_round: game.current_round,
                total_rounds: game.total_rounds,
                score: game.score,
                target,
                actual_city,
                last_guess,
                guesses,
            }),
        }
    }

    pub async fn submit_guess(&self, request: GuessRequest) -> SubmitGuessResponse {
        let guessed = match self.resolve_guess(&request).await {
            Ok(city) => city,
            Err(error_code) => {
                return SubmitGuessResponse {
                    error: true,
                    error_code: Some(error_code),
                    result: None,
                }
            }
        };
        match self
            .app_context
            .games
            .record_guess(&self.game_id, &guessed)
            .await
        {
            Ok(outcome) => SubmitGuessResponse {
                error: false,
                error_code: None,
                result: Some(RoundResult {
                    round: outcome.record.round,
                    actual_city: outcome.actual_city,
                    guessed_city: outcome.guessed_city,
                    distance_km: outcome.record.distance_km,
                    points: outcome.record.points,
                    score: outcome.total_score,
                }),
            },
            Err(GameFlowError::GameNotFound) => SubmitGuessResponse {
                error: true,
                error_code: Some(SubmitGuessError::GameNotFound),
                result: None,
            },
            Err(_) => SubmitGuessResponse {
                error: true,
                error_code: Some(SubmitGuessError::NoActiveRound),
                result: None,
            },
        }
    }

    /// Turns a guess request into a concrete city before any session state
    /// is touched.
    async fn resolve_guess(&self, request: &GuessRequest) -> Result<City, SubmitGuessError> {
        let lookup = match (request.city_id, &request.name) {
            (Some(city_id), _) => self.app_context.cities.find_by_id(city_id).await,
            (None, Some(name)) => self.app_context.cities.find_by_name(name).await,
            (None, None) => return Err(SubmitGuessError::CityNotFound),
        };
        match lookup {
            Ok(Some(city)) => Ok(city),
            Ok(None) => Err(SubmitGuessError::CityNotFound),
            Err(err) => {
                tracing::error!("Guess resolution failed: {err}.");
                Err(SubmitGuessError::CatalogUnavailable)
            }
        }
    }

    pub async fn advance_round(&self) -> AdvanceRoundResponse {
        let Some(game) = self.app_context.games.game(&self.game_id).await else {
            return AdvanceRoundResponse::failed(AdvanceRoundError::GameNotFound);
        };
        if !matches!(game.status, GameStatus::ShowingResult { .. }) {
            return AdvanceRoundResponse::failed(AdvanceRoundError::NoRoundToAdvance);
        }
        if !game.rounds_remaining() {
            return self.finish_game().await;
        }
        let filter = game.selection_filter();
        let target = match self.app_context.cities.find_random(&filter).await {
            Ok(Some(city)) => city,
            Ok(None) => return AdvanceRoundResponse::failed(AdvanceRoundError::NoEligibleCity),
            Err(err) => {
                tracing::error!("Target selection for the next round failed: {err}.");
                return AdvanceRoundResponse::failed(AdvanceRoundError::CatalogUnavailable);
            }
        };
        match self
            .app_context
            .games
            .begin_round(&self.game_id, target)
            .await
        {
            Ok(round_started) => AdvanceRoundResponse {
                error: false,
                error_code: None,
                game_over: false,
                current_round: Some(round_started.round_number),
                target: Some(TargetPreview::of(&round_started.target)),
                final_score: None,
                guesses: None,
            },
            Err(GameFlowError::GameNotFound) => {
                AdvanceRoundResponse::failed(AdvanceRoundError::GameNotFound)
            }
            Err(_) => AdvanceRoundResponse::failed(AdvanceRoundError::NoRoundToAdvance),
        }
    }

    async fn finish_game(&self) -> AdvanceRoundResponse {
        let finished = match self.app_context.games.finish(&self.game_id).await {
            Ok(finished) => finished,
            Err(GameFlowError::GameNotFound) => {
                return AdvanceRoundResponse::failed(AdvanceRoundError::GameNotFound)
            }
            Err(_) => return AdvanceRoundResponse::failed(AdvanceRoundError::NoRoundToAdvance),
        };
        let created_at_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock is set before the Unix epoch.")
            .as_secs();
        let entry = ScoreEntry {
            player_name: finished.player_name.clone(),
            score: finished.score,
            mode: finished.mode,
            rounds: finished.total_rounds,
            created_at_unix_secs,
            guesses: finished.guesses.clone(),
        };
        if let Err(err) = self.app_context.scores.record(entry).await {
            tracing::error!("Failed to archive a finished game: {err}.");
        }
        AdvanceRoundResponse {
            error: false,
            error_code: None,
            game_over: true,
            current_round: None,
            target: None,
            final_score: Some(finished.score),
            guesses: Some(finished.guesses),
        }
    }
}
