use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, web::ServiceConfig, App, HttpServer};
use log::*;
use match_tracker_engine::{EventLedgerApi, MatchRepositoryApi, MatchTrackerDatabase, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    helpers::{cors_headers, json_config, path_config},
    routes::{
        health,
        preflight,
        CreateMatchRoute,
        DeleteMatchRoute,
        GetMatchRoute,
        ListMatchesRoute,
        RegisterGoalRoute,
        RegisterRedCardRoute,
        RegisterYellowCardRoute,
        SetExtraTimeRoute,
        UpdateMatchRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = connect(&config).await?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Opens the connection pool. With `auto_migrate` set, a missing database file is created first and the schema is
/// brought up to date before the pool is handed to the server.
pub async fn connect(config: &ServerConfig) -> Result<SqliteDatabase, ServerError> {
    if config.auto_migrate {
        SqliteDatabase::create_database_if_missing(&config.database_url)
            .await
            .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    }
    let db = SqliteDatabase::new_with_url(&config.database_url, config.max_connections)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if config.auto_migrate {
        db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    } else {
        info!("🚀️ Automatic migrations are disabled. Assuming the schema at {} is up to date", config.database_url);
    }
    Ok(db)
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let matches_api = MatchRepositoryApi::new(db.clone());
        let ledger_api = EventLedgerApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %r").log_target("mts::access_log"))
            .wrap(cors_headers())
            .app_data(json_config())
            .app_data(path_config())
            .app_data(web::Data::new(matches_api))
            .app_data(web::Data::new(ledger_api))
            .service(health)
            .service(web::scope("/api").configure(api_routes::<SqliteDatabase>))
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// The routes under `/api`. The engine APIs for backend `B` must be registered as app data.
pub fn api_routes<B: MatchTrackerDatabase + 'static>(cfg: &mut ServiceConfig) {
    cfg.service(preflight)
        .service(ListMatchesRoute::<B>::new())
        .service(CreateMatchRoute::<B>::new())
        .service(GetMatchRoute::<B>::new())
        .service(UpdateMatchRoute::<B>::new())
        .service(DeleteMatchRoute::<B>::new())
        .service(RegisterGoalRoute::<B>::new())
        .service(RegisterYellowCardRoute::<B>::new())
        .service(RegisterRedCardRoute::<B>::new())
        .service(SetExtraTimeRoute::<B>::new());
}
