use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{FullMatch, Match, MatchClock, MatchSummary, NewMatch},
    match_api::{
        errors::MatchApiError,
        event_ledger_api::{events_for, tally},
    },
    traits::{EventManagement, MatchManagement},
};

/// `MatchRepositoryApi` manages the lifecycle of match records.
///
/// Reads are enriched with the per-team tallies from the event ledger. Writes only ever touch the `matches` table.
pub struct MatchRepositoryApi<B> {
    db: B,
}

impl<B> Debug for MatchRepositoryApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatchRepositoryApi")
    }
}

impl<B> MatchRepositoryApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}

impl<B> MatchRepositoryApi<B>
where B: MatchManagement + EventManagement
{
    /// Returns every match with all six per-team tallies. If any query fails, the whole call fails.
    pub async fn list(&self) -> Result<Vec<MatchSummary>, MatchApiError> {
        let matches = self.db.fetch_matches().await?;
        let mut result = Vec::with_capacity(matches.len());
        for details in matches {
            let counts = tally(&self.db, &details).await?;
            result.push(MatchSummary { details, counts });
        }
        debug!("🏟️ Listed {} matches", result.len());
        Ok(result)
    }

    /// Returns the match with its tallies and its goals, yellow cards and red cards.
    pub async fn get(&self, id: i64) -> Result<FullMatch, MatchApiError> {
        let details = self.fetch_existing(id).await?;
        let counts = tally(&self.db, &details).await?;
        let events = events_for(&self.db, id).await?;
        Ok(FullMatch { summary: MatchSummary { details, counts }, events })
    }

    /// Creates a new match. Extra time starts at `00:00`.
    pub async fn create(&self, new_match: NewMatch) -> Result<Match, MatchApiError> {
        new_match.validate()?;
        let record = self.db.insert_match(new_match).await?;
        info!("🏟️ Match #{} created: {} vs {} on {}", record.id, record.home_team, record.away_team, record.match_date);
        Ok(record)
    }

    /// Overwrites the teams and date of a match. Extra time and events are left untouched.
    ///
    /// The id is not checked beforehand. If no match has that id, nothing is stored and the submitted fields are echoed
    /// back under the given id.
    pub async fn update(&self, id: i64, update: NewMatch) -> Result<Match, MatchApiError> {
        update.validate()?;
        match self.db.update_match(id, update.clone()).await? {
            Some(record) => {
                info!("🏟️ Match #{id} updated: {} vs {} on {}", record.home_team, record.away_team, record.match_date);
                Ok(record)
            },
            None => {
                warn!("🏟️ Update for match #{id} matched no rows. Echoing the request back.");
                Ok(update.into_match(id))
            },
        }
    }

    /// Deletes a match. Succeeds whether or not a match had that id. Events registered against the match remain in
    /// their tables.
    pub async fn delete(&self, id: i64) -> Result<(), MatchApiError> {
        let rows = self.db.delete_match(id).await?;
        if rows == 0 {
            debug!("🏟️ Delete for match #{id} matched no rows");
        } else {
            info!("🏟️ Match #{id} deleted");
        }
        Ok(())
    }

    /// Sets the extra time of a match.
    ///
    /// An empty value is rejected first, then the match must exist, and finally the value must be a valid `MM:SS`
    /// reading.
    pub async fn set_extra_time(&self, id: i64, value: &str) -> Result<Match, MatchApiError> {
        if value.is_empty() {
            return Err(MatchApiError::ValidationError("extraTime is required".into()));
        }
        self.fetch_existing(id).await?;
        let extra_time = value.parse::<MatchClock>()?;
        let record = self.db.update_extra_time(id, &extra_time).await?.ok_or(MatchApiError::MatchNotFound(id))?;
        info!("🏟️ Extra time for match #{id} set to {extra_time}");
        Ok(record)
    }

    async fn fetch_existing(&self, id: i64) -> Result<Match, MatchApiError> {
        self.db.fetch_match(id).await?.ok_or_else(|| {
            debug!("🏟️ Match #{id} does not exist");
            MatchApiError::MatchNotFound(id)
        })
    }
}
