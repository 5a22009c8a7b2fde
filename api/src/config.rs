//! Server Configuration

use formcraft_pg::PgGatewayConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration load errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address
    pub bind_addr: String,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Apply embedded migrations on startup
    pub migrate_on_start: bool,
    /// PostgreSQL settings; absent means in-memory storage
    pub database: Option<PgGatewayConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            log_filter: "info".into(),
            migrate_on_start: false,
            database: None,
        }
    }
}

impl ApiConfig {
    /// Load from a TOML file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ApiConfig::load(Path::new("/nonexistent/formcraft.toml")).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert!(config.database.is_none());
    }

    #[test]
    fn test_parse_database_section() {
        let config = ApiConfig::from_toml(
            r#"
            bind_addr = "127.0.0.1:9000"

            [database]
            database_url = "postgres://forms@localhost/forms"
            max_connections = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.log_filter, "info");
        let db = config.database.unwrap();
        assert_eq!(db.max_connections, 12);
        assert_eq!(db.acquire_timeout_secs, 5);
        assert!(db.statement_timeout_secs.is_none());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            ApiConfig::from_toml("bind_addr = "),
            Err(ConfigError::Parse(_))
        ));
    }
}
