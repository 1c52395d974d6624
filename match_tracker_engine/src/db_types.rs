use std::{fmt::Display, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Extra time assigned to every newly created match.
pub const DEFAULT_EXTRA_TIME: &str = "00:00";

static CLOCK_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,2}:[0-5][0-9]$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

//--------------------------------------     MatchClock       ---------------------------------------------------------
/// A game-clock reading in `MM:SS` form. Minutes run from 0 to 99 (one or two digits), seconds from 00 to 59 (always
/// two digits).
///
/// Used for both the extra time of a match and the minute at which an event happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchClock(String);

impl MatchClock {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_valid(s: &str) -> bool {
        CLOCK_FORMAT.is_match(s)
    }
}

impl Default for MatchClock {
    fn default() -> Self {
        Self(DEFAULT_EXTRA_TIME.to_string())
    }
}

impl FromStr for MatchClock {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError(format!("Invalid time format '{s}'. Use MM:SS")))
        }
    }
}

impl Display for MatchClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//--------------------------------------       Match         ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
    pub extra_time: String,
}

impl Match {
    /// Team names are compared exactly. "real madrid" did not play in a "Real Madrid" match.
    pub fn has_team(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

//--------------------------------------      NewMatch        ---------------------------------------------------------
/// The fields a client supplies to create or overwrite a match. Missing fields are read as empty strings so that
/// [`NewMatch::validate`] gets to report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMatch {
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
}

impl NewMatch {
    pub fn new<S: Into<String>>(home_team: S, away_team: S, match_date: S) -> Self {
        Self { home_team: home_team.into(), away_team: away_team.into(), match_date: match_date.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.home_team.is_empty() || self.away_team.is_empty() || self.match_date.is_empty() {
            return Err(ValidationError("homeTeam, awayTeam and matchDate are all required".into()));
        }
        Ok(())
    }

    /// The match this request would describe if it were stored under `id` with the default extra time.
    pub fn into_match(self, id: i64) -> Match {
        Match {
            id,
            home_team: self.home_team,
            away_team: self.away_team,
            match_date: self.match_date,
            extra_time: DEFAULT_EXTRA_TIME.to_string(),
        }
    }
}

//--------------------------------------   ExtraTimeUpdate    ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraTimeUpdate {
    pub extra_time: String,
}

//--------------------------------------      EventKind       ---------------------------------------------------------
/// The three kinds of match event. Each kind is kept in its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
}

#[derive(Debug, Clone, Error)]
#[error("'{0}' is not a known event collection")]
pub struct EventKindParseError(pub String);

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Goal, EventKind::YellowCard, EventKind::RedCard];

    pub fn table_name(&self) -> &'static str {
        match self {
            EventKind::Goal => "goals",
            EventKind::YellowCard => "yellow_cards",
            EventKind::RedCard => "red_cards",
        }
    }

    /// The acknowledgement sent back to a client once an event of this kind has been stored.
    pub fn confirmation(&self) -> &'static str {
        match self {
            EventKind::Goal => "Goal registered successfully",
            EventKind::YellowCard => "Yellow card registered successfully",
            EventKind::RedCard => "Red card registered successfully",
        }
    }
}

impl FromStr for EventKind {
    type Err = EventKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goals" => Ok(Self::Goal),
            "yellow_cards" => Ok(Self::YellowCard),
            "red_cards" => Ok(Self::RedCard),
            s => Err(EventKindParseError(s.to_string())),
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Goal => write!(f, "goal"),
            EventKind::YellowCard => write!(f, "yellow card"),
            EventKind::RedCard => write!(f, "red card"),
        }
    }
}

//--------------------------------------     MatchEvent       ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: i64,
    pub team: String,
    pub player: String,
    pub minute: String,
}

//--------------------------------------    NewMatchEvent     ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMatchEvent {
    pub team: String,
    pub player: String,
    pub minute: String,
}

impl NewMatchEvent {
    pub fn new<S: Into<String>>(team: S, player: S, minute: S) -> Self {
        Self { team: team.into(), player: player.into(), minute: minute.into() }
    }

    /// Checks that every field is present and that the minute is a valid `MM:SS` reading. Whether the team actually
    /// played in the match can only be checked against the stored match.
    pub fn validate(&self) -> Result<MatchClock, ValidationError> {
        if self.team.is_empty() || self.player.is_empty() || self.minute.is_empty() {
            return Err(ValidationError("team, player and minute are all required".into()));
        }
        self.minute.parse()
    }
}

//--------------------------------------     EventCounts      ---------------------------------------------------------
/// Per-team event tallies for a single match. These are never stored; they are counted from the event tables each
/// time a match is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    #[serde(rename = "homeGoals")]
    pub home_goals: i64,
    #[serde(rename = "awayGoals")]
    pub away_goals: i64,
    #[serde(rename = "homeYellowCardsCount")]
    pub home_yellow_cards: i64,
    #[serde(rename = "homeRedCardsCount")]
    pub home_red_cards: i64,
    #[serde(rename = "awayYellowCardsCount")]
    pub away_yellow_cards: i64,
    #[serde(rename = "awayRedCardsCount")]
    pub away_red_cards: i64,
}

impl EventCounts {
    pub fn set(&mut self, kind: EventKind, home: i64, away: i64) {
        match kind {
            EventKind::Goal => {
                self.home_goals = home;
                self.away_goals = away;
            },
            EventKind::YellowCard => {
                self.home_yellow_cards = home;
                self.away_yellow_cards = away;
            },
            EventKind::RedCard => {
                self.home_red_cards = home;
                self.away_red_cards = away;
            },
        }
    }
}

//--------------------------------------     MatchEvents      ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvents {
    pub goals: Vec<MatchEvent>,
    pub yellow_cards: Vec<MatchEvent>,
    pub red_cards: Vec<MatchEvent>,
}

impl MatchEvents {
    pub fn set(&mut self, kind: EventKind, events: Vec<MatchEvent>) {
        match kind {
            EventKind::Goal => self.goals = events,
            EventKind::YellowCard => self.yellow_cards = events,
            EventKind::RedCard => self.red_cards = events,
        }
    }

    pub fn get(&self, kind: EventKind) -> &[MatchEvent] {
        match kind {
            EventKind::Goal => &self.goals,
            EventKind::YellowCard => &self.yellow_cards,
            EventKind::RedCard => &self.red_cards,
        }
    }
}

//--------------------------------------     MatchSummary     ---------------------------------------------------------
/// A match with its tallies, as returned by the match listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    #[serde(flatten)]
    pub details: Match,
    #[serde(flatten)]
    pub counts: EventCounts,
}

//--------------------------------------      FullMatch       ---------------------------------------------------------
/// A match with its tallies and every event registered against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullMatch {
    #[serde(flatten)]
    pub summary: MatchSummary,
    #[serde(flatten)]
    pub events: MatchEvents,
}
