//! # SQLite Database methods
//!
//! This module contains "low-level" SQLite database interactions.
//!
//! All these interaction are maintained by simple functions (rather than stateful structs) that accept a
//! `&mut SqliteConnection` argument. Callers can obtain a connection from a pool,
//! or create an atomic transaction as the need arises and call through to the functions without any other changes.
use std::{fs, path::Path};

use log::{info, warn};
use sqlx::{
    migrate::{MigrateDatabase, Migrator},
    sqlite::SqlitePoolOptions,
    Error as SqlxError,
    Sqlite,
    SqlitePool,
};

pub mod events;
pub mod matches;

pub static MIGRATOR: Migrator = sqlx::migrate!("./src/sqlite/migrations");

pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, SqlxError> {
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect(url).await?;
    Ok(pool)
}

/// Creates the SQLite database file for `url` (and its parent directory) if it does not exist yet.
pub async fn create_database_if_missing(url: &str) -> Result<(), SqlxError> {
    if Sqlite::database_exists(url).await? {
        return Ok(());
    }
    if let Some(parent) = db_file_path(url).and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("🗃️ Could not create database directory {}: {e}", parent.display());
            }
        }
    }
    Sqlite::create_database(url).await?;
    info!("🗃️ Created Sqlite database {url}");
    Ok(())
}

/// Extracts the file path from a `sqlite:` URL. In-memory databases have no path.
fn db_file_path(url: &str) -> Option<&Path> {
    let path = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.starts_with(":memory:") {
        None
    } else {
        Some(Path::new(path))
    }
}
