//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CAMPLY_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://camply.juftin.dev"];
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` was not a socket address.
    #[error("invalid bind address `{value}`: {message}")]
    BindAddr {
        /// Configured value.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Runtime settings for the API server and the seed tool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAMPLY")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the seed-backed in-memory catalogue is used when unset.
    pub database_url: Option<String>,
    /// JSON catalogue for the in-memory adapter; defaults to the bundled seed.
    pub seed_path: Option<PathBuf>,
    /// CORS origins. The environment form is comma separated; a single
    /// origin needs a trailing comma or a JSON array to be read as a list.
    pub allowed_origins: Option<Vec<String>>,
    /// Emit JSON log lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Parsed bind address, falling back to `0.0.0.0:8000`.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// CORS origins with blanks removed, falling back to the local dev
    /// server and the public site.
    pub fn allowed_origins(&self) -> Vec<String> {
        match &self.allowed_origins {
            Some(origins) => origins
                .iter()
                .map(|origin| origin.trim())
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.map(str::to_owned).to_vec(),
        }
    }

    /// Database pool size, at least one.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }
}
