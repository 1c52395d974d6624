//! #  Database management and control.
//!
//! This module provides the interfaces that define the contracts of the match tracker database *backends*.
//!
//! * [`MatchManagement`] covers the lifecycle of match records: listing, fetching, inserting, overwriting and
//!   deleting them.
//! * [`EventManagement`] covers the event collections (goals, yellow cards and red cards): appending events, listing
//!   them per match and counting them per team.
//! * [`MatchTrackerDatabase`] is the highest level of behaviour, and is what the server is generic over.
//!
//! Backends report every failure as a [`StorageError`]. Deciding whether a missing row is an error is left to the
//! callers in [`crate::match_api`].
mod event_management;
mod match_management;
mod match_tracker_database;

pub use event_management::EventManagement;
pub use match_management::MatchManagement;
pub use match_tracker_database::{MatchTrackerDatabase, StorageError};
