use thiserror::Error;

use crate::traits::{EventManagement, MatchManagement};

/// This trait defines the highest level of behaviour for backends supporting the Match Tracker.
///
/// A backend has to manage both matches and their events, since the event ledger checks the match record before
/// appending to an event collection.
#[allow(async_fn_in_trait)]
pub trait MatchTrackerDatabase: MatchManagement + EventManagement {
    /// The URL of the database
    fn url(&self) -> &str;

    /// Closes the database connection.
    async fn close(&mut self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("We have an internal database engine (configuration/uptime etc.) error: {0}")]
    DatabaseError(String),
    #[error("Could not bring the database schema up to date: {0}")]
    MigrationError(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}
