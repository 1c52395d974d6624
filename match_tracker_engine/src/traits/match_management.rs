use crate::{
    db_types::{Match, MatchClock, NewMatch},
    traits::StorageError,
};

/// The `MatchManagement` trait defines behaviour for managing match records.
#[allow(async_fn_in_trait)]
pub trait MatchManagement {
    /// Fetches every match in the store, in ascending id order.
    async fn fetch_matches(&self) -> Result<Vec<Match>, StorageError>;

    /// Fetches the match with the given id. If no such match exists, `None` is returned.
    async fn fetch_match(&self, id: i64) -> Result<Option<Match>, StorageError>;

    /// Stores a new match. The store assigns the id, and the extra time takes its default value.
    async fn insert_match(&self, new_match: NewMatch) -> Result<Match, StorageError>;

    /// Overwrites the teams and date of the match with the given id. Extra time is left alone.
    ///
    /// Returns the updated record, or `None` if no match has that id.
    async fn update_match(&self, id: i64, update: NewMatch) -> Result<Option<Match>, StorageError>;

    /// Deletes the match with the given id, returning the number of rows removed. Events that reference the match are
    /// not touched.
    async fn delete_match(&self, id: i64) -> Result<u64, StorageError>;

    /// Overwrites the extra time of the match with the given id.
    ///
    /// Returns the updated record, or `None` if no match has that id.
    async fn update_extra_time(&self, id: i64, extra_time: &MatchClock) -> Result<Option<Match>, StorageError>;
}
