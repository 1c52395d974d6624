//! # Match Tracker public API
//!
//! The `match_api` module exposes the programmatic API for the Match Tracker engine. It is made up of two components:
//!
//! * [`match_repository_api`] owns match records: listing (with per-team tallies), fetching a match with all of its
//!   events, creating, overwriting, deleting, and setting the extra time.
//! * [`event_ledger_api`] appends goals, yellow cards and red cards to a match after checking that the match exists
//!   and that the team played in it. It also provides the aggregation read path that the repository uses.
//!
//! # API usage
//!
//! An API instance is created by supplying a database backend that implements [`MatchTrackerDatabase`].
//!
//! ```rust,ignore
//! use match_tracker_engine::{db_types::NewMatch, MatchRepositoryApi, SqliteDatabase};
//! let db = SqliteDatabase::new_with_url("sqlite://data/matches.db", 5).await?;
//! let api = MatchRepositoryApi::new(db);
//! let created = api.create(NewMatch::new("Real Madrid", "Barcelona", "2025-05-10")).await?;
//! let full = api.get(created.id).await?;
//! ```
//!
//! [`MatchTrackerDatabase`]: crate::traits::MatchTrackerDatabase

pub mod errors;
pub mod event_ledger_api;
pub mod match_repository_api;
