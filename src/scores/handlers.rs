use crate::app_context::AppContext;
use crate::http::query_params::HighScoresQueryParams;
use crate::scores::consts::DEFAULT_HIGH_SCORES_LIMIT;
use crate::scores::responses::{HighScoreRow, HighScoresResponse};
use crate::storage::interface::{ICityCatalog, IGameStorage, IScoreArchive};
use axum::extract::{Query, State};
use axum::response::Json;

pub async fn highscores<CS, GS>(
    Query(query_params): Query<HighScoresQueryParams>,
    State(app_context): State<AppContext<CS, GS>>,
) -> Json<HighScoresResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let limit = query_params.limit.unwrap_or(DEFAULT_HIGH_SCORES_LIMIT);
    let entries = app_context.scores.top_scores(query_params.mode, limit).await;
    let scores = entries
        .into_iter()
        .map(|entry| HighScoreRow {
            player_name: entry.player_name,
            score: entry.score,
            mode: entry.mode,
            rounds: entry.rounds,
            created_at_unix_secs: entry.created_at_unix_secs,
        })
        .collect();
    Json(HighScoresResponse {
        error: false,
        scores,
    })
}
