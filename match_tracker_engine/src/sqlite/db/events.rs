//! Queries against the event tables.
//!
//! The three event tables share one shape, so the table name is taken from [`EventKind::table_name`]. That is the
//! only text ever spliced into these statements; every value is bound.
use log::debug;
use sqlx::SqliteConnection;

use crate::db_types::{EventKind, MatchEvent, NewMatchEvent};

pub async fn insert_event(
    match_id: i64,
    kind: EventKind,
    event: NewMatchEvent,
    conn: &mut SqliteConnection,
) -> Result<MatchEvent, sqlx::Error> {
    let sql = format!(
        "INSERT INTO {} (match_id, team, player, minute) VALUES ($1, $2, $3, $4) RETURNING id, team, player, minute",
        kind.table_name()
    );
    let record: MatchEvent = sqlx::query_as(sql.as_str())
        .bind(match_id)
        .bind(event.team)
        .bind(event.player)
        .bind(event.minute)
        .fetch_one(conn)
        .await?;
    debug!("📝️ {kind} #{} by {} ({}) stored for match {match_id}", record.id, record.player, record.team);
    Ok(record)
}

/// Returns the events of the given kind for a match, in ascending id (i.e. registration) order.
pub async fn fetch_events(
    match_id: i64,
    kind: EventKind,
    conn: &mut SqliteConnection,
) -> Result<Vec<MatchEvent>, sqlx::Error> {
    let sql =
        format!("SELECT id, team, player, minute FROM {} WHERE match_id = $1 ORDER BY id ASC", kind.table_name());
    let events = sqlx::query_as(sql.as_str()).bind(match_id).fetch_all(conn).await?;
    Ok(events)
}

pub async fn count_events(
    match_id: i64,
    kind: EventKind,
    team: &str,
    conn: &mut SqliteConnection,
) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE match_id = $1 AND team = $2", kind.table_name());
    let count: i64 = sqlx::query_scalar(sql.as_str()).bind(match_id).bind(team).fetch_one(conn).await?;
    Ok(count)
}
