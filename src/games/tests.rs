use crate::cities::models::{City, CityFilter};
use crate::games::errors::GameFlowError;
use crate::games::models::{Game, GameMode, GameStatus};
use crate::http::tests::{fixture_cities, test_server};
use serde_json::{json, Value};
use std::collections::HashSet;

fn fixture_city(id: u32) -> City {
    fixture_cities()
        .into_iter()
        .find(|city| city.id == id)
        .expect("No fixture city with such id.")
}

fn fresh_game(total_rounds: u32) -> Game {
    Game::new(
        String::from("alice"),
        GameMode::Medium,
        CityFilter::default(),
        total_rounds,
    )
}

#[test]
fn test_round_counter_increments_by_exactly_one() {
    let mut game = fresh_game(3);

    assert_eq!(game.begin_round(fixture_city(1)), Ok(1));
    game.record_guess(&fixture_city(2)).unwrap();
    assert_eq!(game.begin_round(fixture_city(2)), Ok(2));
    game.record_guess(&fixture_city(3)).unwrap();
    assert_eq!(game.begin_round(fixture_city(3)), Ok(3));
}

#[test]
fn test_game_finishes_exactly_when_rounds_are_exhausted() {
    let mut game = fresh_game(2);

    game.begin_round(fixture_city(1)).unwrap();
    game.record_guess(&fixture_city(2)).unwrap();
    // One round left: finishing now would end the game early.
    assert_eq!(game.finish().err(), Some(GameFlowError::InvalidState));

    game.begin_round(fixture_city(2)).unwrap();
    game.record_guess(&fixture_city(3)).unwrap();
    // Last round played: the only legal transition is into game over.
    assert_eq!(
        game.begin_round(fixture_city(3)).err(),
        Some(GameFlowError::InvalidState)
    );
    let finished = game.finish().expect("The last round has been played.");

    assert!(matches!(game.status, GameStatus::GameOver));
    assert_eq!(finished.total_rounds, 2);
    assert_eq!(finished.score, game.score);
}

#[test]
fn test_score_is_the_sum_of_recorded_points() {
    let mut game = fresh_game(3);
    let guesses = [(1, 2), (2, 4), (3, 3)];

    for (target_id, guessed_id) in guesses {
        game.begin_round(fixture_city(target_id)).unwrap();
        game.record_guess(&fixture_city(guessed_id)).unwrap();
    }

    let total: u64 = game.guesses.iter().map(|record| record.points).sum();
    assert_eq!(game.score, total);
    assert_eq!(game.guesses.len(), 3);
}

#[test]
fn test_exclusion_set_grows_by_one_distinct_id_per_round() {
    let mut game = fresh_game(4);

    for round in 1..=4 {
        game.begin_round(fixture_city(round)).unwrap();
        let distinct = game.used_city_ids.iter().collect::<HashSet<_>>();
        assert_eq!(game.used_city_ids.len(), round as usize);
        assert_eq!(distinct.len(), round as usize);
        game.record_guess(&fixture_city(5)).unwrap();
    }
}

#[test]
fn test_guess_is_rejected_outside_an_active_round() {
    let mut game = fresh_game(2);

    assert_eq!(
        game.record_guess(&fixture_city(1)).err(),
        Some(GameFlowError::InvalidState)
    );

    game.begin_round(fixture_city(1)).unwrap();
    game.record_guess(&fixture_city(2)).unwrap();
    let score_after_first_guess = game.score;

    // Already showing the result: a second guess must not change anything.
    assert_eq!(
        game.record_guess(&fixture_city(3)).err(),
        Some(GameFlowError::InvalidState)
    );
    assert_eq!(game.score, score_after_first_guess);
    assert_eq!(game.guesses.len(), 1);
}

#[test]
fn test_exact_guess_scores_the_maximum_in_every_mode() {
    for mode in [GameMode::Easy, GameMode::Medium, GameMode::Hard] {
        let mut game = Game::new(String::from("alice"), mode, CityFilter::default(), 1);
        game.begin_round(fixture_city(1)).unwrap();
        let outcome = game.record_guess(&fixture_city(1)).unwrap();
        assert_eq!(outcome.record.distance_km, 0.0);
        assert_eq!(outcome.record.points, 1000);
    }
}

#[tokio::test]
async fn test_full_game_lifecycle_over_http() {
    let server = test_server();

    let response = server
        .post("/games")
        .json(&json!({
            "playerName": "alice",
            "mode": "medium",
            "filter": {"minPopulation": 100_000},
            "totalRounds": 5,
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(false));
    assert_eq!(body["currentRound"], 1);
    assert_eq!(body["totalRounds"], 5);
    assert!(body["target"]["latitude"].is_number());
    let game_id = body["gameId"].as_str().expect("A new game has an id.").to_string();

    let mut points_per_round = Vec::new();
    let mut actual_city_ids = HashSet::new();
    for round in 1..=5u64 {
        let state: Value = server.get(&format!("/games/{game_id}")).await.json();
        assert_eq!(state["state"]["status"], "inRound");
        assert_eq!(state["state"]["currentRound"], round);
        assert!(state["state"]["target"]["latitude"].is_number());
        assert_eq!(state["state"]["actualCity"], Value::Null);

        let response = server
            .post(&format!("/games/{game_id}/submit-guess"))
            .json(&json!({"name": "Paris"}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["error"], Value::Bool(false));
        points_per_round.push(body["result"]["points"].as_u64().unwrap());
        actual_city_ids.insert(body["result"]["actualCity"]["id"].as_u64().unwrap());

        let state: Value = server.get(&format!("/games/{game_id}")).await.json();
        assert_eq!(state["state"]["status"], "showingResult");
        assert_eq!(state["state"]["target"], Value::Null);
        assert!(state["state"]["actualCity"]["name"].is_string());

        let response = server
            .post(&format!("/games/{game_id}/advance-round"))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["error"], Value::Bool(false));
        if round < 5 {
            assert_eq!(body["gameOver"], Value::Bool(false));
            assert_eq!(body["currentRound"], round + 1);
        } else {
            assert_eq!(body["gameOver"], Value::Bool(true));
            let expected_total: u64 = points_per_round.iter().sum();
            assert_eq!(body["finalScore"].as_u64().unwrap(), expected_total);
            assert_eq!(body["guesses"].as_array().unwrap().len(), 5);
        }
    }

    // No target repeats within a game.
    assert_eq!(actual_city_ids.len(), 5);

    let state: Value = server.get(&format!("/games/{game_id}")).await.json();
    assert_eq!(state["state"]["status"], "gameOver");
    assert_eq!(state["state"]["guesses"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_start_game_requires_a_player_name() {
    let server = test_server();

    let response = server
        .post("/games")
        .json(&json!({"playerName": "   ", "mode": "easy"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "playerNameRequired");
}

#[tokio::test]
async fn test_start_game_rejects_an_overlong_player_name() {
    let server = test_server();

    let response = server
        .post("/games")
        .json(&json!({"playerName": "a".repeat(51), "mode": "easy"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "playerNameTooLong");
}

#[tokio::test]
async fn test_start_game_rejects_a_zero_round_game() {
    let server = test_server();

    let response = server
        .post("/games")
        .json(&json!({"playerName": "alice", "mode": "easy", "totalRounds": 0}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "invalidRoundCount");
}

#[tokio::test]
async fn test_start_game_fails_when_no_city_matches_the_filters() {
    let server = test_server();

    let response = server
        .post("/games")
        .json(&json!({
            "playerName": "alice",
            "mode": "hard",
            "filter": {"countries": ["XX"]},
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "noEligibleCity");
}

#[tokio::test]
async fn test_unresolvable_guess_leaves_the_round_untouched() {
    let server = test_server();

    let body: Value = server
        .post("/games")
        .json(&json!({"playerName": "alice", "mode": "hard", "totalRounds": 1}))
        .await
        .json();
    let game_id = body["gameId"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/games/{game_id}/submit-guess"))
        .json(&json!({"name": "Atlantis"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "cityNotFound");

    // The round is still open and nothing has been scored.
    let state: Value = server.get(&format!("/games/{game_id}")).await.json();
    assert_eq!(state["state"]["status"], "inRound");
    assert_eq!(state["state"]["score"], 0);
}

#[tokio::test]
async fn test_second_guess_in_the_same_round_is_rejected() {
    let server = test_server();

    let body: Value = server
        .post("/games")
        .json(&json!({"playerName": "alice", "mode": "medium", "totalRounds": 2}))
        .await
        .json();
    let game_id = body["gameId"].as_str().unwrap().to_string();

    let first: Value = server
        .post(&format!("/games/{game_id}/submit-guess"))
        .json(&json!({"name": "Berlin"}))
        .await
        .json();
    assert_eq!(first["error"], Value::Bool(false));
    let score_after_first = first["result"]["score"].as_u64().unwrap();

    let second: Value = server
        .post(&format!("/games/{game_id}/submit-guess"))
        .json(&json!({"name": "Tokyo"}))
        .await
        .json();
    assert_eq!(second["error"], Value::Bool(true));
    assert_eq!(second["errorCode"], "noActiveRound");

    let state: Value = server.get(&format!("/games/{game_id}")).await.json();
    assert_eq!(state["state"]["score"].as_u64().unwrap(), score_after_first);
}

#[tokio::test]
async fn test_advance_round_without_a_result_is_rejected() {
    let server = test_server();

    let body: Value = server
        .post("/games")
        .json(&json!({"playerName": "alice", "mode": "medium"}))
        .await
        .json();
    let game_id = body["gameId"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/games/{game_id}/advance-round"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "noRoundToAdvance");
}

#[tokio::test]
async fn test_operations_on_an_unknown_game() {
    let server = test_server();

    let state: Value = server.get("/games/noSuchGame1").await.json();
    assert_eq!(state["errorCode"], "gameNotFound");

    let guess: Value = server
        .post("/games/noSuchGame1/submit-guess")
        .json(&json!({"name": "Paris"}))
        .await
        .json();
    assert_eq!(guess["errorCode"], "gameNotFound");

    let advance: Value = server.post("/games/noSuchGame1/advance-round").await.json();
    assert_eq!(advance["errorCode"], "gameNotFound");
}

#[tokio::test]
async fn test_exhausted_city_pool_surfaces_an_explicit_error() {
    let server = test_server();

    // Only one British city in the fixture catalog, but two rounds to play.
    let body: Value = server
        .post("/games")
        .json(&json!({
            "playerName": "alice",
            "mode": "medium",
            "filter": {"countries": ["GB"]},
            "totalRounds": 2,
        }))
        .await
        .json();
    assert_eq!(body["error"], Value::Bool(false));
    let game_id = body["gameId"].as_str().unwrap().to_string();

    let guess: Value = server
        .post(&format!("/games/{game_id}/submit-guess"))
        .json(&json!({"name": "London"}))
        .await
        .json();
    assert_eq!(guess["result"]["points"], 1000);

    let advance: Value = server
        .post(&format!("/games/{game_id}/advance-round"))
        .await
        .json();
    assert_eq!(advance["error"], Value::Bool(true));
    assert_eq!(advance["errorCode"], "noEligibleCity");
    assert_eq!(advance["gameOver"], Value::Bool(false));

    // The session is exactly where it was before the failed transition.
    let state: Value = server.get(&format!("/games/{game_id}")).await.json();
    assert_eq!(state["state"]["status"], "showingResult");
    assert_eq!(state["state"]["currentRound"], 1);
}

#[tokio::test]
async fn test_guess_by_city_id() {
    let server = test_server();

    let body: Value = server
        .post("/games")
        .json(&json!({
            "playerName": "alice",
            "mode": "easy",
            "filter": {"countries": ["JP"]},
            "totalRounds": 1,
        }))
        .await
        .json();
    let game_id = body["gameId"].as_str().unwrap().to_string();

    // Tokyo is the only eligible target, so guessing it by id is exact.
    let guess: Value = server
        .post(&format!("/games/{game_id}/submit-guess"))
        .json(&json!({"cityId": 4}))
        .await
        .json();

    assert_eq!(guess["error"], Value::Bool(false));
    assert_eq!(guess["result"]["points"], 1000);
    assert_eq!(guess["result"]["distanceKm"], 0.0);
    assert_eq!(guess["result"]["guessedCity"]["id"], 4);
    assert_eq!(guess["result"]["actualCity"]["id"], 4);
}
