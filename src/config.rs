/// Configuration management for the media logger service
use crate::error::{MediaError, MediaResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
    pub version: String,
    /// Allow cross-origin requests from any origin
    pub cors_any: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file of accounts provisioned at startup
    pub seed_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Emit structured JSON log lines instead of plain text
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                hostname: "127.0.0.1".to_string(),
                port: 8080,
                version: env!("CARGO_PKG_VERSION").to_string(),
                cors_any: true,
            },
            storage: StorageConfig { seed_file: None },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> MediaResult<Self> {
        dotenv::dotenv().ok();

        let hostname =
            env::var("MEDIALOGGER_HOSTNAME").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("MEDIALOGGER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| MediaError::Validation("Invalid port number".to_string()))?;
        let version = env!("CARGO_PKG_VERSION").to_string();
        let cors_any = env::var("MEDIALOGGER_CORS_ANY")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let seed_file = env::var("MEDIALOGGER_SEED_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_json = env::var("MEDIALOGGER_LOG_JSON")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(ServerConfig {
            service: ServiceConfig {
                hostname,
                port,
                version,
                cors_any,
            },
            storage: StorageConfig { seed_file },
            logging: LoggingConfig {
                level: log_level,
                json: log_json,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> MediaResult<()> {
        if self.service.hostname.is_empty() {
            return Err(MediaError::Validation("Hostname cannot be empty".to_string()));
        }

        if self.service.port == 0 {
            return Err(MediaError::Validation("Port cannot be 0".to_string()));
        }

        Ok(())
    }

    /// Socket address string the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service.hostname, self.service.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.storage.seed_file.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_hostname() {
        let mut config = ServerConfig::default();
        config.service.hostname = String::new();
        assert!(matches!(config.validate(), Err(MediaError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = ServerConfig::default();
        config.service.port = 0;
        assert!(matches!(config.validate(), Err(MediaError::Validation(_))));
    }
}
