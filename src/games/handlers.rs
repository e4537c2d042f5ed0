use crate::app_context::AppContext;
use crate::games::requests::{GuessRequest, StartGameRequest};
use crate::games::services::http::{CreateGameHttpHandler, GamesHttpHandler};
use crate::games::services::responses::{
    AdvanceRoundResponse, GameStateResponse, StartGameResponse, SubmitGuessResponse,
};
use crate::storage::interface::{ICityCatalog, IGameStorage};
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn create<CS, GS>(
    State(app_context): State<AppContext<CS, GS>>,
    Json(request): Json<StartGameRequest>,
) -> Json<StartGameResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let response = CreateGameHttpHandler::new(app_context).create(request).await;
    Json(response)
}

pub async fn state<CS, GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<CS, GS>>,
) -> Json<GameStateResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id).state().await;
    Json(response)
}

pub async fn submit_guess<CS, GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<CS, GS>>,
    Json(guess): Json<GuessRequest>,
) -> Json<SubmitGuessResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id)
        .submit_guess(guess)
        .await;
    Json(response)
}

pub async fn advance_round<CS, GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<CS, GS>>,
) -> Json<AdvanceRoundResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id)
        .advance_round()
        .await;
    Json(response)
}
