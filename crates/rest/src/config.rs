//! Server configuration for the patients API.
//!
//! Configuration comes from command line flags with environment variable
//! fallbacks, or is built programmatically.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SERVER_PORT` | 3000 | Server port |
//! | `SERVER_HOST` | 0.0.0.0 | Host to bind |
//! | `PATIENTS_LOG_LEVEL` | info | Log level |
//! | `PATIENTS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `PATIENTS_ENABLE_CORS` | true | Permissive CORS |
//! | `PATIENTS_STORAGE_BACKEND` | sqlite | Storage backend (`sqlite` or `postgres`) |
//! | `PATIENTS_DATABASE_URL` | (none) | SQLite path or PostgreSQL URL |
//!
//! # Example
//!
//! ```rust
//! use patients_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 8080,
//!     host: "127.0.0.1".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "127.0.0.1:8080");
//! ```

use std::fmt;
use std::str::FromStr;

use clap::Parser;

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// Embedded SQLite (file or `:memory:`).
    Sqlite,
    /// PostgreSQL through a deadpool connection pool.
    Postgres,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Sqlite => write!(f, "sqlite"),
            StorageBackendMode::Postgres => write!(f, "postgres"),
        }
    }
}

impl FromStr for StorageBackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackendMode::Sqlite),
            "postgres" | "postgresql" => Ok(StorageBackendMode::Postgres),
            other => Err(format!(
                "unknown storage backend '{}' (expected 'sqlite' or 'postgres')",
                other
            )),
        }
    }
}

/// Server configuration for the patients API.
///
/// This struct can be constructed from command line arguments and environment
/// variables using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "patients")]
#[command(about = "Patients CRUD API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PATIENTS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "PATIENTS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Enable permissive CORS.
    #[arg(
        long,
        env = "PATIENTS_ENABLE_CORS",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub enable_cors: bool,

    /// Storage backend (sqlite or postgres).
    #[arg(long, env = "PATIENTS_STORAGE_BACKEND", default_value = "sqlite")]
    pub storage_backend: String,

    /// SQLite database path (or `:memory:`), or a PostgreSQL connection string.
    #[arg(long, env = "PATIENTS_DATABASE_URL")]
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            enable_cors: true,
            storage_backend: "sqlite".to_string(),
            database_url: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// Falls back to defaults when the environment does not parse.
    pub fn from_env() -> Self {
        Self::try_parse_from(["patients"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        self.storage_backend.parse()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database, and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 64 * 1024,
            enable_cors: false,
            storage_backend: "sqlite".to_string(),
            database_url: Some(":memory:".to_string()),
        }
    }
}
