//! User service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use common::{DatabaseConfig, GrpcClientConfig, ServiceConfig};

const DEFAULT_PORT: u16 = 50052;

/// Where user records are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// SeaORM-backed relational database
    #[default]
    Database,
    /// Process-local map, lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" | "db" => Ok(StorageBackend::Database),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Database => write!(f, "database"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Service identity, bind address and log level
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Storage backend for user records
    pub storage: StorageBackend,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let db_defaults = DatabaseConfig::default();
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                host: env::var("USER_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("USER_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                log_level: env::var("USER_SERVICE_LOG_LEVEL")
                    .unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(db_defaults.url),
                max_connections: env::var("USER_SERVICE_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(db_defaults.max_connections),
                min_connections: env::var("USER_SERVICE_DB_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(db_defaults.min_connections),
            },
            storage: env::var("USER_SERVICE_STORAGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Settings for talking to a running user service, read from the environment.
pub fn client_config_from_env() -> GrpcClientConfig {
    let defaults = GrpcClientConfig::default();
    GrpcClientConfig {
        endpoint: env::var("USER_SERVICE_URL").unwrap_or(defaults.endpoint),
        connect_timeout_ms: env::var("USER_SERVICE_CONNECT_TIMEOUT_MS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(defaults.connect_timeout_ms),
        request_timeout_ms: env::var("USER_SERVICE_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(defaults.request_timeout_ms),
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                log_level: "info".to_string(),
            },
            database: DatabaseConfig::default(),
            storage: StorageBackend::default(),
        }
    }
}
