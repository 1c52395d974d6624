use actix_web::{http::StatusCode, test::TestRequest};
use match_tracker_engine::{
    db_types::{EventKind, MatchEvent},
    StorageError,
};
use serde_json::json;

use super::{
    helpers::{add_apis, json_body, send_request},
    mocks::{clasico, MockMatchStore},
};
use crate::routes::{RegisterGoalRoute, RegisterRedCardRoute, RegisterYellowCardRoute};

async fn patch_event(ledger: MockMatchStore, path: &str, value: serde_json::Value) -> (StatusCode, String) {
    let req = TestRequest::patch().uri(path).set_json(value);
    let (status, _, body) = send_request(req, move |cfg| {
        add_apis(cfg, MockMatchStore::new(), ledger);
        cfg.service(RegisterGoalRoute::<MockMatchStore>::new())
            .service(RegisterYellowCardRoute::<MockMatchStore>::new())
            .service(RegisterRedCardRoute::<MockMatchStore>::new());
    })
    .await;
    (status, body)
}

fn accepting_ledger(kind: EventKind) -> MockMatchStore {
    let mut ledger = MockMatchStore::new();
    ledger.expect_fetch_match().returning(|id| Ok(Some(clasico(id))));
    ledger.expect_insert_event().withf(move |id, k, _| *id == 1 && *k == kind).times(1).returning(|_, _, e| {
        Ok(MatchEvent { id: 1, team: e.team, player: e.player, minute: e.minute })
    });
    ledger
}

#[actix_web::test]
async fn register_each_kind_of_event() {
    let _ = env_logger::try_init().ok();
    let cases = [
        (EventKind::Goal, "goals", "Goal registered successfully"),
        (EventKind::YellowCard, "yellow_cards", "Yellow card registered successfully"),
        (EventKind::RedCard, "red_cards", "Red card registered successfully"),
    ];
    for (kind, collection, message) in cases {
        let payload = json!({"team": "Barcelona", "player": "Gavi", "minute": "44:10"});
        let (status, body) = patch_event(accepting_ledger(kind), &format!("/api/matches/1/{collection}"), payload).await;
        assert_eq!(status, StatusCode::OK, "registering {kind}");
        assert_eq!(json_body(&body), json!({ "message": message }));
    }
}

#[actix_web::test]
async fn event_fields_are_required() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockMatchStore::new();
    ledger.expect_fetch_match().never();
    ledger.expect_insert_event().never();
    let (status, body) = patch_event(ledger, "/api/matches/1/goals", json!({"team": "Barcelona", "minute": "10:00"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body), json!({"error": "team, player and minute are all required"}));
}

#[actix_web::test]
async fn event_minute_must_be_a_clock_reading() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockMatchStore::new();
    ledger.expect_fetch_match().never();
    ledger.expect_insert_event().never();
    let payload = json!({"team": "Barcelona", "player": "Gavi", "minute": "45"});
    let (status, _) = patch_event(ledger, "/api/matches/1/yellow_cards", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn event_for_missing_match() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockMatchStore::new();
    ledger.expect_fetch_match().returning(|_| Ok(None));
    ledger.expect_insert_event().never();
    // Well-formed payload, unknown team: the missing match is reported first
    let payload = json!({"team": "Nobody FC", "player": "Nobody", "minute": "10:00"});
    let (status, body) = patch_event(ledger, "/api/matches/9999/red_cards", payload).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body), json!({"error": "The data was not found. Match 9999 not found"}));
}

#[actix_web::test]
async fn event_team_must_be_playing() {
    let _ = env_logger::try_init().ok();
    for team in ["Atletico", "barcelona"] {
        let payload = json!({"team": team, "player": "Griezmann", "minute": "30:00"});
        let (status, body) = patch_event(rejecting_ledger(), "/api/matches/1/goals", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{team} is not in the match");
        assert_eq!(json_body(&body), json!({ "error": format!("Team '{team}' is not playing in match 1") }));
    }
}

fn rejecting_ledger() -> MockMatchStore {
    let mut ledger = MockMatchStore::new();
    ledger.expect_fetch_match().returning(|id| Ok(Some(clasico(id))));
    ledger.expect_insert_event().never();
    ledger
}

#[actix_web::test]
async fn event_storage_failure() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockMatchStore::new();
    ledger.expect_fetch_match().returning(|id| Ok(Some(clasico(id))));
    ledger.expect_insert_event().returning(|_, _, _| Err(StorageError::DatabaseError("disk full".into())));
    let payload = json!({"team": "Real Madrid", "player": "Vinicius Jr.", "minute": "61:00"});
    let (status, body) = patch_event(ledger, "/api/matches/1/yellow_cards", payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json_body(&body)["error"].as_str().unwrap().contains("disk full"));
}

#[actix_web::test]
async fn event_without_content_type() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::patch()
        .uri("/api/matches/1/goals")
        .set_payload(r#"{"team":"Barcelona","player":"Yamal","minute":"22:15"}"#);
    let (status, _, body) = send_request(req, move |cfg| {
        add_apis(cfg, MockMatchStore::new(), accepting_ledger(EventKind::Goal));
        cfg.service(RegisterGoalRoute::<MockMatchStore>::new());
    })
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"message": "Goal registered successfully"}));
}
