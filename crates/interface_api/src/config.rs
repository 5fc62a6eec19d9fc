//! API configuration

use serde::Deserialize;

use core_kernel::CoreError;

/// Where customer records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local store, lost on restart
    #[default]
    Memory,
    /// PostgreSQL through `infra_db`
    Postgres,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Storage backend
    pub storage: StorageBackend,
    /// Database URL, read only for the postgres backend
    pub database_url: String,
    /// Pool size for the postgres backend
    pub max_connections: u32,
    /// Version label reported by the health endpoints
    pub version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            storage: StorageBackend::Memory,
            database_url: "postgres://localhost/quotes".to_string(),
            max_connections: 10,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Checks values the type system cannot
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.port == 0 {
            return Err(CoreError::configuration("port must be non-zero"));
        }
        if self.storage == StorageBackend::Postgres {
            if self.database_url.trim().is_empty() {
                return Err(CoreError::configuration(
                    "database_url is required for the postgres backend",
                ));
            }
            if self.max_connections == 0 {
                return Err(CoreError::configuration("max_connections must be non-zero"));
            }
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
