use crate::cities::models::{City, CityFilter, CountryEntry};
use crate::games::errors::GameFlowError;
use crate::games::models::{FinishedGame, Game, GameMode, GuessOutcome, RoundStarted};
use crate::scores::models::ScoreEntry;
use crate::storage::errors::{ArchiveError, CatalogError};

/// Read-only city catalog. The core never builds queries itself: every
/// constraint travels inside a `CityFilter` and is resolved here.
pub trait ICityCatalog {
    /// One city satisfying the filter, chosen uniformly among all
    /// qualifying candidates. `Ok(None)` when the filter admits nothing.
    async fn find_random(&self, filter: &CityFilter) -> Result<Option<City>, CatalogError>;

    async fn find_by_id(&self, city_id: u32) -> Result<Option<City>, CatalogError>;

    /// Case-insensitive exact match on the display or romanized name.
    async fn find_by_name(&self, name: &str) -> Result<Option<City>, CatalogError>;

    /// Up to `count` distinct cities for multiple-choice options.
    async fn random_options(
        &self,
        count: usize,
        exclude: Option<u32>,
    ) -> Result<Vec<City>, CatalogError>;

    async fn countries(&self) -> Result<Vec<CountryEntry>, CatalogError>;
}

pub trait IGameStorage: GameRepo + GameFlowRepo {}

pub trait GameRepo {
    async fn create(&self, game: Game) -> String;

    async fn game(&self, game_id: &str) -> Option<Game>;
}

pub trait GameFlowRepo {
    async fn begin_round(
        &self,
        game_id: &str,
        target: City,
    ) -> Result<RoundStarted, GameFlowError>;

    async fn record_guess(
        &self,
        game_id: &str,
        guessed: &City,
    ) -> Result<GuessOutcome, GameFlowError>;

    async fn finish(&self, game_id: &str) -> Result<FinishedGame, GameFlowError>;
}

pub trait IScoreArchive {
    async fn record(&self, entry: ScoreEntry) -> Result<(), ArchiveError>;

    async fn top_scores(&self, mode: Option<GameMode>, limit: usize) -> Vec<ScoreEntry>;
}
