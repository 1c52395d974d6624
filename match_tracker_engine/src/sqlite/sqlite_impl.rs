//! `SqliteDatabase` is a concrete implementation of a Match Tracker backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::db::{create_database_if_missing, events, matches, new_pool, MIGRATOR};
use crate::{
    db_types::{EventKind, Match, MatchClock, MatchEvent, NewMatch, NewMatchEvent},
    traits::{EventManagement, MatchManagement, MatchTrackerDatabase, StorageError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl MatchTrackerDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn close(&mut self) -> Result<(), StorageError> {
        self.pool.close().await;
        Ok(())
    }
}

impl MatchManagement for SqliteDatabase {
    async fn fetch_matches(&self) -> Result<Vec<Match>, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let result = matches::fetch_matches(&mut conn).await?;
        trace!("🗃️ Fetched {} matches", result.len());
        Ok(result)
    }

    async fn fetch_match(&self, id: i64) -> Result<Option<Match>, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let result = matches::fetch_match(id, &mut conn).await?;
        Ok(result)
    }

    async fn insert_match(&self, new_match: NewMatch) -> Result<Match, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let record = matches::insert_match(new_match, &mut conn).await?;
        debug!("🗃️ Match #{} has been saved in the DB", record.id);
        Ok(record)
    }

    async fn update_match(&self, id: i64, update: NewMatch) -> Result<Option<Match>, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let result = matches::update_match(id, update, &mut conn).await?;
        Ok(result)
    }

    async fn delete_match(&self, id: i64) -> Result<u64, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let rows = matches::delete_match(id, &mut conn).await?;
        debug!("🗃️ Deleting match #{id} removed {rows} row(s)");
        Ok(rows)
    }

    async fn update_extra_time(&self, id: i64, extra_time: &MatchClock) -> Result<Option<Match>, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let result = matches::update_extra_time(id, extra_time, &mut conn).await?;
        Ok(result)
    }
}

impl EventManagement for SqliteDatabase {
    async fn insert_event(
        &self,
        match_id: i64,
        kind: EventKind,
        event: NewMatchEvent,
    ) -> Result<MatchEvent, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let record = events::insert_event(match_id, kind, event, &mut conn).await?;
        Ok(record)
    }

    async fn fetch_events(&self, match_id: i64, kind: EventKind) -> Result<Vec<MatchEvent>, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let result = events::fetch_events(match_id, kind, &mut conn).await?;
        Ok(result)
    }

    async fn count_events(&self, match_id: i64, kind: EventKind, team: &str) -> Result<i64, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let count = events::count_events(match_id, kind, team, &mut conn).await?;
        Ok(count)
    }
}

impl SqliteDatabase {
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Creates the database file (and its directory) for `url` if it is not there yet. Call this before
    /// [`Self::new_with_url`] on a fresh install.
    pub async fn create_database_if_missing(url: &str) -> Result<(), StorageError> {
        create_database_if_missing(url).await?;
        Ok(())
    }

    /// Brings the schema up to date using the migrations embedded in this crate.
    pub async fn run_migrations(&self) -> Result<(), StorageError> {
        MIGRATOR.run(&self.pool).await.map_err(|e| StorageError::MigrationError(e.to_string()))?;
        info!("🗃️ Database migrations complete");
        Ok(())
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
