//! Match Tracker Engine
//!
//! The Match Tracker Engine keeps the record of football matches (teams, date, extra time) and of the events that
//! happen in them (goals, yellow cards and red cards).
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`] and [`mod@traits`]). SQLite is the supported backend. You should
//!    never need to access the database directly. Instead, use the public API provided by the engine. The exception
//!    is the data types used in the database. These are defined in the `db_types` module and are public.
//! 2. The engine public API ([`mod@match_api`]). This provides the two core components:
//!    * the Match Repository ([`MatchRepositoryApi`]), which owns match records and their lifecycle, and
//!    * the Event Ledger ([`EventLedgerApi`]), which appends events to a match and derives per-team tallies.
//!
//! Backends need to implement the traits in [`mod@traits`] in order to act as a backend for the Match Tracker
//! server.
pub mod db_types;
pub mod match_api;
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use match_api::{errors::MatchApiError, event_ledger_api::EventLedgerApi, match_repository_api::MatchRepositoryApi};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use traits::{EventManagement, MatchManagement, MatchTrackerDatabase, StorageError};
