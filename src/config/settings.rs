//! Configuration settings structures.
//!
//! Everything here can be loaded from TOML files and overridden by `FLEET__*`
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

fn default_app_name() -> String {
    "fleet-rs".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL cannot be empty",
            ));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL must be a postgres:// URL",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "min_connections cannot exceed max_connections",
            ));
        }
        Ok(())
    }
}

/// Tracing subscriber configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log level filter: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Root settings tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        match self.logger.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::validation(
                "logger.format",
                &format!("Unknown log format '{other}', expected 'pretty' or 'json'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_database_url_required() {
        let database = DatabaseConfig::default();
        assert!(database.validate().is_err());
    }

    #[test]
    fn test_database_url_scheme_checked() {
        let database = DatabaseConfig {
            url: "mysql://localhost/fleet".to_string(),
            ..Default::default()
        };
        assert!(database.validate().is_err());

        let database = DatabaseConfig {
            url: "postgres://localhost/fleet".to_string(),
            ..Default::default()
        };
        assert!(database.validate().is_ok());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let settings = Settings {
            database: DatabaseConfig {
                url: "postgres://localhost/fleet".to_string(),
                ..Default::default()
            },
            logger: LoggerConfig {
                level: "info".to_string(),
                format: "xml".to_string(),
            },
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
