use crate::cities::models::City;
use crate::games::errors::GameFlowError;
use crate::games::models::{FinishedGame, Game, GuessOutcome, RoundStarted};
use crate::storage::interface::{GameFlowRepo, GameRepo, IGameStorage};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapGamesStorage {
    storage: Arc<RwLock<HashMap<String, Game>>>,
}

impl IGameStorage for HashMapGamesStorage {}

impl GameRepo for HashMapGamesStorage {
    async fn create(&self, game: Game) -> String {
        let game_id = generate_game_id();
        self.storage.write().await.insert(game_id.clone(), game);
        game_id
    }

    async fn game(&self, game_id: &str) -> Option<Game> {
        self.storage.read().await.get(game_id).cloned()
    }
}

impl GameFlowRepo for HashMapGamesStorage {
    async fn begin_round(
        &self,
        game_id: &str,
        target: City,
    ) -> Result<RoundStarted, GameFlowError> {
        let mut storage_guard = self.storage.write().await;
        let game = storage_guard
            .get_mut(game_id)
            .ok_or(GameFlowError::GameNotFound)?;
        let round_number = game.begin_round(target.clone())?;
        Ok(RoundStarted {
            round_number,
            target,
        })
    }

    async fn record_guess(
        &self,
        game_id: &str,
        guessed: &City,
    ) -> Result<GuessOutcome, GameFlowError> {
        let mut storage_guard = self.storage.write().await;
        let game = storage_guard
            .get_mut(game_id)
            .ok_or(GameFlowError::GameNotFound)?;
        game.record_guess(guessed)
    }

    async fn finish(&self, game_id: &str) -> Result<FinishedGame, GameFlowError> {
        let mut storage_guard = self.storage.write().await;
        let game = storage_guard
            .get_mut(game_id)
            .ok_or(GameFlowError::GameNotFound)?;
        game.finish()
    }
}

fn generate_game_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}
