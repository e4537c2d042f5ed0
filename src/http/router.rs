use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::storage::cities::InMemoryCityCatalog;
use crate::storage::games::HashMapGamesStorage;
use crate::{cities, games, health, scores};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(
    args: &Args,
    app_context: AppContext<InMemoryCityCatalog, HashMapGamesStorage>,
) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let cities_routes = Router::new()
        .route("/options", get(cities::handlers::options))
        .route("/search", get(cities::handlers::search))
        .route("/:city-id", get(cities::handlers::by_id));
    let countries_routes = Router::new().route("/", get(cities::handlers::countries));
    let games_routes = Router::new()
        .route("/", post(games::handlers::create))
        .route("/:game-id", get(games::handlers::state))
        .route(
            "/:game-id/submit-guess",
            post(games::handlers::submit_guess),
        )
        .route(
            "/:game-id/advance-round",
            post(games::handlers::advance_round),
        );
    let scores_routes = Router::new().route("/highscores", get(scores::handlers::highscores));

    Router::new()
        .nest("/health", health_routes)
        .nest("/cities", cities_routes)
        .nest("/countries", countries_routes)
        .nest("/games", games_routes)
        .nest("/scores", scores_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
