//! Process configuration. The database connection string comes from `DB_CONNECTION`; everything else is fixed.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

/// Environment variable holding the PostgreSQL connection string.
pub const DB_CONNECTION_ENV: &str = "DB_CONNECTION";

pub const DEFAULT_PORT: u16 = 9010;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: [u8; 4],
    pub port: u16,
    pub max_connections: u32,
    /// Upper bound for establishing the first connection at startup.
    pub connect_timeout: Duration,
    /// How long draining may wait for in-flight requests before the server is torn down.
    pub shutdown_timeout: Duration,
    pub body_limit: usize,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Config {
            database_url: database_url.into(),
            host: [0, 0, 0, 0],
            port: DEFAULT_PORT,
            max_connections: 5,
            connect_timeout: Duration::from_secs(5),
            shutdown_timeout: Duration::from_secs(5),
            body_limit: 64 * 1024,
        }
    }

    /// Read `DB_CONNECTION`. The caller loads `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(DB_CONNECTION_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing(DB_CONNECTION_ENV))?;
        Ok(Config::new(url))
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
