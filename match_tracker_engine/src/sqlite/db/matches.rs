use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::db_types::{Match, MatchClock, NewMatch};

/// Returns every match, in ascending id order.
pub async fn fetch_matches(conn: &mut SqliteConnection) -> Result<Vec<Match>, sqlx::Error> {
    let matches = sqlx::query_as("SELECT id, home_team, away_team, match_date, extra_time FROM matches ORDER BY id ASC")
        .fetch_all(conn)
        .await?;
    Ok(matches)
}

pub async fn fetch_match(id: i64, conn: &mut SqliteConnection) -> Result<Option<Match>, sqlx::Error> {
    let result = sqlx::query_as("SELECT id, home_team, away_team, match_date, extra_time FROM matches WHERE id = $1")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(result)
}

/// Inserts a new match into the database using the given connection. Extra time is filled in by the column default.
pub async fn insert_match(new_match: NewMatch, conn: &mut SqliteConnection) -> Result<Match, sqlx::Error> {
    let record: Match = sqlx::query_as(
        r#"
            INSERT INTO matches (home_team, away_team, match_date)
            VALUES ($1, $2, $3)
            RETURNING id, home_team, away_team, match_date, extra_time;
        "#,
    )
    .bind(new_match.home_team)
    .bind(new_match.away_team)
    .bind(new_match.match_date)
    .fetch_one(conn)
    .await?;
    debug!("📝️ Match {} vs {} inserted with id {}", record.home_team, record.away_team, record.id);
    Ok(record)
}

pub async fn update_match(
    id: i64,
    update: NewMatch,
    conn: &mut SqliteConnection,
) -> Result<Option<Match>, sqlx::Error> {
    let result: Option<Match> = sqlx::query_as(
        r#"
            UPDATE matches SET home_team = $1, away_team = $2, match_date = $3
            WHERE id = $4
            RETURNING id, home_team, away_team, match_date, extra_time;
        "#,
    )
    .bind(update.home_team)
    .bind(update.away_team)
    .bind(update.match_date)
    .bind(id)
    .fetch_optional(conn)
    .await?;
    trace!("📝️ Result of update_match({id}): {result:?}");
    Ok(result)
}

pub async fn delete_match(id: i64, conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM matches WHERE id = $1").bind(id).execute(conn).await?;
    Ok(result.rows_affected())
}

pub async fn update_extra_time(
    id: i64,
    extra_time: &MatchClock,
    conn: &mut SqliteConnection,
) -> Result<Option<Match>, sqlx::Error> {
    let result = sqlx::query_as(
        "UPDATE matches SET extra_time = $1 WHERE id = $2 RETURNING id, home_team, away_team, match_date, extra_time",
    )
    .bind(extra_time.as_str())
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(result)
}
