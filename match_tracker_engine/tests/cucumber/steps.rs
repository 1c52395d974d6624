use cucumber::{then, when};
use match_tracker_engine::{
    db_types::{EventKind, FullMatch, NewMatch, NewMatchEvent},
    MatchApiError,
};

use crate::cucumber::MatchWorld;

fn event_kind(s: &str) -> EventKind {
    match s {
        "goal" => EventKind::Goal,
        "yellow card" => EventKind::YellowCard,
        "red card" => EventKind::RedCard,
        _ => panic!("Unknown event kind {s}"),
    }
}

async fn fetch(world: &MatchWorld, id: i64) -> FullMatch {
    world.matches().get(id).await.expect("Error fetching match")
}

#[when(expr = "I create a match between {string} and {string} on {string}")]
async fn create_match(world: &mut MatchWorld, home: String, away: String, date: String) {
    world.last_error = world.matches().create(NewMatch::new(home, away, date)).await.err();
}

#[when(expr = "I update match {int} to {string} against {string} on {string}")]
async fn update_match(world: &mut MatchWorld, id: i64, home: String, away: String, date: String) {
    world.last_error = world.matches().update(id, NewMatch::new(home, away, date)).await.err();
}

#[when(expr = "I delete match {int}")]
async fn delete_match(world: &mut MatchWorld, id: i64) {
    world.matches().delete(id).await.expect("Error deleting match");
}

#[when(expr = "I set the extra time of match {int} to {string}")]
async fn set_extra_time(world: &mut MatchWorld, id: i64, value: String) {
    world.last_error = world.matches().set_extra_time(id, &value).await.err();
}

#[when(regex = r#"^I register an? (goal|yellow card|red card) for "([^"]*)" by "([^"]*)" at "([^"]*)" in match (\d+)$"#)]
async fn register_event(world: &mut MatchWorld, kind: String, team: String, player: String, minute: String, id: i64) {
    let event = NewMatchEvent::new(team, player, minute);
    world.last_error = world.ledger().register_event(id, event_kind(&kind), event).await.err();
}

#[then("the last operation succeeded")]
async fn last_operation_succeeded(world: &mut MatchWorld) {
    assert!(world.last_error.is_none(), "Unexpected error: {:?}", world.last_error);
}

#[then(expr = "the last operation failed with {word}")]
async fn last_operation_failed(world: &mut MatchWorld, kind: String) {
    let err = world.last_error.take().expect("Expected the last operation to fail");
    let matched = match kind.as_str() {
        "ValidationError" => matches!(err, MatchApiError::ValidationError(_)),
        "NotFound" => matches!(err, MatchApiError::MatchNotFound(_)),
        "StorageError" => matches!(err, MatchApiError::StorageError(_)),
        _ => panic!("Unknown error kind {kind}"),
    };
    assert!(matched, "Expected {kind}, got {err:?}");
}

#[then(expr = "match {int} is {string} against {string} on {string} with extra time {string}")]
async fn match_details(world: &mut MatchWorld, id: i64, home: String, away: String, date: String, extra: String) {
    let details = fetch(world, id).await.summary.details;
    assert_eq!(details.home_team, home);
    assert_eq!(details.away_team, away);
    assert_eq!(details.match_date, date);
    assert_eq!(details.extra_time, extra);
}

#[then(expr = "match {int} does not exist")]
async fn match_missing(world: &mut MatchWorld, id: i64) {
    let err = world.matches().get(id).await.expect_err("Match should not exist");
    assert!(matches!(err, MatchApiError::MatchNotFound(_)));
    assert!(world.matches().list().await.unwrap().iter().all(|m| m.details.id != id));
}

#[then(expr = "there are {int} matches")]
async fn match_count(world: &mut MatchWorld, count: usize) {
    assert_eq!(world.matches().list().await.expect("Error listing matches").len(), count);
}

#[then(regex = r#"^match (\d+) has (\d+) (goals|yellow cards|red cards) for the home team and (\d+) for the away team$"#)]
async fn tallies(world: &mut MatchWorld, id: i64, home: i64, kind: String, away: i64) {
    let counts = fetch(world, id).await.summary.counts;
    let (h, a) = match kind.as_str() {
        "goals" => (counts.home_goals, counts.away_goals),
        "yellow cards" => (counts.home_yellow_cards, counts.away_yellow_cards),
        _ => (counts.home_red_cards, counts.away_red_cards),
    };
    assert_eq!((h, a), (home, away));
    let listed = world.matches().list().await.unwrap();
    let summary = listed.iter().find(|m| m.details.id == id).expect("Match missing from list");
    assert_eq!(summary.counts, counts);
}

#[then(regex = r#"^match (\d+) lists (\d+) (goal|yellow card|red card)s?$"#)]
async fn event_count(world: &mut MatchWorld, id: i64, count: usize, kind: String) {
    let full = fetch(world, id).await;
    assert_eq!(full.events.get(event_kind(&kind)).len(), count);
}

#[then(regex = r#"^(goal|yellow card|red card) (\d+) of match (\d+) is "([^"]*)" by "([^"]*)" at "([^"]*)"$"#)]
async fn event_entry(
    world: &mut MatchWorld,
    kind: String,
    position: usize,
    id: i64,
    team: String,
    player: String,
    minute: String,
) {
    let full = fetch(world, id).await;
    let event = full.events.get(event_kind(&kind)).get(position - 1).expect("No event at that position");
    assert_eq!(event.team, team);
    assert_eq!(event.player, player);
    assert_eq!(event.minute, minute);
}
