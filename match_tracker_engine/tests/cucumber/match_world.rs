use cucumber::World;
use log::*;
use match_tracker_engine::{
    test_utils::prepare_env::{prepare_test_env, random_db_path},
    EventLedgerApi,
    MatchApiError,
    MatchRepositoryApi,
    SqliteDatabase,
};

#[derive(Default, Debug, World)]
pub struct MatchWorld {
    pub system: Option<MatchTrackerSystem>,
    pub last_error: Option<MatchApiError>,
}

#[derive(Debug)]
pub struct MatchTrackerSystem {
    pub db_path: String,
    pub db: SqliteDatabase,
    pub matches: MatchRepositoryApi<SqliteDatabase>,
    pub ledger: EventLedgerApi<SqliteDatabase>,
}

impl MatchWorld {
    pub fn matches(&self) -> &MatchRepositoryApi<SqliteDatabase> {
        &self.system.as_ref().expect("MatchRepositoryApi not initialised").matches
    }

    pub fn ledger(&self) -> &EventLedgerApi<SqliteDatabase> {
        &self.system.as_ref().expect("EventLedgerApi not initialised").ledger
    }
}

impl MatchTrackerSystem {
    pub async fn new() -> Self {
        let db_path = random_db_path();
        prepare_test_env(&db_path).await;
        let db = SqliteDatabase::new_with_url(&db_path, 1).await.expect("Error creating connection to database");
        debug!("Created database: {db_path}");
        let matches = MatchRepositoryApi::new(db.clone());
        let ledger = EventLedgerApi::new(db.clone());
        Self { db_path, db, matches, ledger }
    }
}
