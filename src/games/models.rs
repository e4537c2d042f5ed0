use crate::cities::models::{City, CityFilter};
use crate::games::errors::GameFlowError;
use crate::geo;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Easy,
    Medium,
    Hard,
}

/// Where in its lifecycle a session is. The current target rides inside the
/// active variants so a guess is always judged against the round it was made
/// in.
#[derive(Clone, Debug)]
pub enum GameStatus {
    NotStarted,
    InRound { target: City },
    ShowingResult { target: City },
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRecord {
    pub round: u32,
    pub actual_city_id: u32,
    pub actual_city_name: String,
    pub guessed_city_id: u32,
    pub guessed_city_name: String,
    pub distance_km: f64,
    pub points: u64,
}

/// Everything the result screen needs right after a guess lands.
#[derive(Clone, Debug)]
pub struct GuessOutcome {
    pub record: GuessRecord,
    pub actual_city: City,
    pub guessed_city: City,
    pub total_score: u64,
}

#[derive(Clone, Debug)]
pub struct RoundStarted {
    pub round_number: u32,
    pub target: City,
}

/// Final summary of a session, handed to the score archive.
#[derive(Clone, Debug)]
pub struct FinishedGame {
    pub player_name: String,
    pub mode: GameMode,
    pub total_rounds: u32,
    pub score: u64,
    pub guesses: Vec<GuessRecord>,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub player_name: String,
    pub mode: GameMode,
    pub filter: CityFilter,
    pub current_round: u32,
    pub total_rounds: u32,
    pub score: u64,
    pub guesses: Vec<GuessRecord>,
    pub used_city_ids: Vec<u32>,
    pub status: GameStatus,
}

impl Game {
    pub fn new(player_name: String, mode: GameMode, filter: CityFilter, total_rounds: u32) -> Self {
        Game {
            player_name,
            mode,
            filter,
            current_round: 0,
            total_rounds,
            score: 0,
            guesses: Vec::new(),
            used_city_ids: Vec::new(),
            status: GameStatus::NotStarted,
        }
    }

    /// Filter for the next target: the session's own constraints plus every
    /// city already played this game.
    pub fn selection_filter(&self) -> CityFilter {
        CityFilter {
            countries: self.filter.countries.clone(),
            min_population: self.filter.min_population,
            exclude: self.used_city_ids.clone(),
        }
    }

    pub fn rounds_remaining(&self) -> bool {
        self.current_round < self.total_rounds
    }

    /// Moves the session into the next round with the given target.
    /// Valid from `NotStarted` (round one) and from `ShowingResult` while
    /// rounds remain. Returns the new round number.
    pub fn begin_round(&mut self, target: City) -> Result<u32, GameFlowError> {
        match self.status {
            GameStatus::NotStarted => {
                self.current_round = 1;
            }
            GameStatus::ShowingResult { .. } => {
                if !self.rounds_remaining() {
                    return Err(GameFlowError::InvalidState);
                }
                self.current_round += 1;
            }
            _ => return Err(GameFlowError::InvalidState),
        }
        self.used_city_ids.push(target.id);
        self.status = GameStatus::InRound { target };
        Ok(self.current_round)
    }

    /// Judges a guess against the current target: computes the distance and
    /// the points, appends the record, and moves to `ShowingResult`.
    pub fn record_guess(&mut self, guessed: &City) -> Result<GuessOutcome, GameFlowError> {
        let target = match &self.status {
            GameStatus::InRound { target } => target.clone(),
            _ => return Err(GameFlowError::InvalidState),
        };
        let distance_km = geo::distance_km(guessed.position(), target.position());
        let points = geo::score_for_distance(distance_km);
        let record = GuessRecord {
            round: self.current_round,
            actual_city_id: target.id,
            actual_city_name: target.name.clone(),
            guessed_city_id: guessed.id,
            guessed_city_name: guessed.name.clone(),
            distance_km,
            points,
        };
        self.guesses.push(record.clone());
        self.score += points;
        let outcome = GuessOutcome {
            record,
            actual_city: target.clone(),
            guessed_city: guessed.clone(),
            total_score: self.score,
        };
        self.status = GameStatus::ShowingResult { target };
        Ok(outcome)
    }

    /// Ends the session. Valid only from `ShowingResult` of the last round.
    pub fn finish(&mut self) -> Result<FinishedGame, GameFlowError> {
        match self.status {
            GameStatus::ShowingResult { .. } if !self.rounds_remaining() => {
                self.status = GameStatus::GameOver;
                Ok(FinishedGame {
                    player_name: self.player_name.clone(),
                    mode: self.mode,
                    total_rounds: self.total_rounds,
                    score: self.score,
                    guesses: self.guesses.clone(),
                })
            }
            _ => Err(GameFlowError::InvalidState),
        }
    }
}
