//! Server settings loaded via OrthoConfig.
//!
//! Values come from (lowest to highest precedence) defaults, a config file,
//! `NEWS_*` environment variables and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while turning settings into a runnable configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// No database URL was configured.
    #[error("no database URL configured; set NEWS_DATABASE_URL or pass --database-url")]
    MissingDatabaseUrl,
    /// Host and port do not form a socket address.
    #[error("invalid bind address {address}: {message}")]
    InvalidBindAddress { address: String, message: String },
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEWS")]
pub struct ServerSettings {
    /// Interface to listen on.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to listen on.
    #[ortho_config(default = 9090)]
    pub port: u16,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Apply pending migrations before serving. Unset means no.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    ///
    /// [`SettingsError::InvalidBindAddress`] when `host` is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddress {
                message: err.to_string(),
                address,
            })
    }

    /// Whether pending migrations run at startup.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(false)
    }

    /// The configured database URL.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingDatabaseUrl`] when none is set or it is blank.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }
}
