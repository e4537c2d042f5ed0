use crate::storage::errors::CatalogError;
use thiserror::Error;

/// Failures of game-flow operations. Any of these leaves the session exactly
/// as it was.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GameFlowError {
    #[error("no such game")]
    GameNotFound,
    #[error("no city in the catalog satisfies the active filters")]
    NoEligibleCity,
    #[error("the guessed city could not be resolved")]
    CityNotFound,
    #[error("operation is not allowed in the current game state")]
    InvalidState,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
