use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("the city catalog is unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArchiveError {
    #[error("the score archive is unavailable: {0}")]
    Unavailable(String),
}
