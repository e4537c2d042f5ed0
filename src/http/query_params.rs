use crate::games::models::GameMode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct NameQueryParam {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct CityOptionsQueryParams {
    pub count: Option<usize>,
    pub exclude: Option<u32>,
}

#[derive(Serialize, Deserialize)]
pub struct HighScoresQueryParams {
    pub mode: Option<GameMode>,
    pub limit: Option<usize>,
}
