//! Server configuration read from environment variables.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Settings needed to start the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the server binds to
    pub server_host: String,
    /// Port the server binds to
    pub server_port: u16,
    /// `SeaORM` connection string
    pub database_url: String,
    /// Optional TOML file with products to insert on startup
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `.env` should already have been loaded by the caller.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns `Error::Config` if `SERVER_PORT` is set but is not a valid port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| Error::Config {
                message: format!("Invalid SERVER_PORT '{raw}': {e}"),
            })?,
            None => 8080,
        };
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let seed_file = lookup("SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        tracing::info!("Application configuration loaded successfully.");

        Ok(Self {
            server_host,
            server_port,
            database_url,
            seed_file,
        })
    }

    /// `host:port` string for `HttpServer::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
