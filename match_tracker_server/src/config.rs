use std::{env, fmt::Display, str::FromStr};

use log::*;

const DEFAULT_MTS_HOST: &str = "127.0.0.1";
const DEFAULT_MTS_PORT: u16 = 8080;
const DEFAULT_MTS_DATABASE_URL: &str = "sqlite://data/matches.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 25;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// The maximum number of connections in the database pool.
    pub max_connections: u32,
    /// If true, the database file is created if it is missing and the schema migrations are run before the server
    /// starts accepting requests.
    pub auto_migrate: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MTS_HOST.to_string(),
            port: DEFAULT_MTS_PORT,
            database_url: DEFAULT_MTS_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            auto_migrate: true,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("MTS_HOST").ok().unwrap_or_else(|| DEFAULT_MTS_HOST.into());
        let port = parse_env("MTS_PORT", DEFAULT_MTS_PORT);
        let database_url = env::var("MTS_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ MTS_DATABASE_URL is not set. Using the default, {DEFAULT_MTS_DATABASE_URL}.");
            DEFAULT_MTS_DATABASE_URL.to_string()
        });
        let max_connections = parse_env("MTS_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS);
        let auto_migrate = env::var("MTS_AUTO_MIGRATE").map(|s| &s != "0" && &s != "false").unwrap_or(true);
        Self { host, port, database_url, max_connections, auto_migrate }
    }
}

fn parse_env<T>(name: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    env::var(name)
        .map(|s| {
            s.parse::<T>().unwrap_or_else(|e| {
                error!("🪛️ {s} is not a valid value for {name}. {e} Using the default, {default}, instead.");
                default
            })
        })
        .ok()
        .unwrap_or(default)
}
