use crate::{
    db_types::{EventKind, MatchEvent, NewMatchEvent},
    traits::StorageError,
};

/// The `EventManagement` trait defines behaviour for the append-only event collections. There is one collection per
/// [`EventKind`].
///
/// Implementations do not check that the match exists or that the team played in it. That is the job of the
/// [`crate::EventLedgerApi`].
#[allow(async_fn_in_trait)]
pub trait EventManagement {
    /// Appends an event to the collection for `kind`, returning the stored row.
    async fn insert_event(
        &self,
        match_id: i64,
        kind: EventKind,
        event: NewMatchEvent,
    ) -> Result<MatchEvent, StorageError>;

    /// Fetches all events of the given kind for a match, in the order they were registered.
    async fn fetch_events(&self, match_id: i64, kind: EventKind) -> Result<Vec<MatchEvent>, StorageError>;

    /// Counts the events of the given kind that were registered against `team` in the match.
    async fn count_events(&self, match_id: i64, kind: EventKind, team: &str) -> Result<i64, StorageError>;
}
