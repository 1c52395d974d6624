use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{EventCounts, EventKind, Match, MatchEvent, MatchEvents, NewMatchEvent},
    match_api::errors::MatchApiError,
    traits::{EventManagement, MatchManagement},
};

/// `EventLedgerApi` records goals, yellow cards and red cards against a match.
///
/// Events are append-only. Once registered they cannot be changed or removed through this API.
pub struct EventLedgerApi<B> {
    db: B,
}

impl<B> Debug for EventLedgerApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EventLedgerApi")
    }
}

impl<B> EventLedgerApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}

impl<B> EventLedgerApi<B>
where B: MatchManagement + EventManagement
{
    /// Registers a new event of the given kind against the match with id `match_id`.
    ///
    /// The checks happen in this order:
    /// 1. team, player and minute must all be present, and the minute must be a valid `MM:SS` reading.
    /// 2. the match must exist, otherwise [`MatchApiError::MatchNotFound`] is returned.
    /// 3. the team must be the home or the away team of that match (exact, case-sensitive comparison).
    ///
    /// The existence check and the insert are separate statements. If the match is deleted between the two, the event
    /// is still stored.
    pub async fn register_event(
        &self,
        match_id: i64,
        kind: EventKind,
        event: NewMatchEvent,
    ) -> Result<MatchEvent, MatchApiError> {
        event.validate()?;
        let record = self.db.fetch_match(match_id).await?.ok_or(MatchApiError::MatchNotFound(match_id))?;
        if !record.has_team(&event.team) {
            debug!("📋️ {} is not playing in match {match_id} ({} vs {})", event.team, record.home_team, record.away_team);
            return Err(MatchApiError::ValidationError(format!(
                "Team '{}' is not playing in match {match_id}",
                event.team
            )));
        }
        let stored = self.db.insert_event(match_id, kind, event).await?;
        info!("📋️ {kind} for {} by {} at {} registered in match {match_id}", stored.team, stored.player, stored.minute);
        Ok(stored)
    }
}

impl<B> EventLedgerApi<B>
where B: EventManagement
{
    /// Counts every kind of event for the home and away team of `record`.
    pub async fn tally(&self, record: &Match) -> Result<EventCounts, MatchApiError> {
        tally(&self.db, record).await
    }

    /// Fetches the goals, yellow cards and red cards registered against a match.
    pub async fn events_for(&self, match_id: i64) -> Result<MatchEvents, MatchApiError> {
        events_for(&self.db, match_id).await
    }
}

pub(crate) async fn tally<B: EventManagement>(db: &B, record: &Match) -> Result<EventCounts, MatchApiError> {
    let mut counts = EventCounts::default();
    for kind in EventKind::ALL {
        let home = db.count_events(record.id, kind, &record.home_team).await?;
        let away = db.count_events(record.id, kind, &record.away_team).await?;
        counts.set(kind, home, away);
    }
    trace!("📋️ Tally for match {}: {counts:?}", record.id);
    Ok(counts)
}

pub(crate) async fn events_for<B: EventManagement>(db: &B, match_id: i64) -> Result<MatchEvents, MatchApiError> {
    let mut events = MatchEvents::default();
    for kind in EventKind::ALL {
        let list = db.fetch_events(match_id, kind).await?;
        events.set(kind, list);
    }
    Ok(events)
}
