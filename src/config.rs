//! Configuration loading and constants.
//!
//! Database connection parameters come from the process environment, where the
//! orchestrator injects them from a secret. HTTP and logging settings come from an
//! optional TOML file and fall back to defaults. `AppConfig` is the root
//! configuration struct containing all settings.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

// =============================================================================
// Store Constants
// =============================================================================

/// The one read the service performs. No ORDER BY: with several rows the
/// returned row is whichever the store yields first.
pub const SUBJECT_QUERY: &str = "SELECT name FROM users LIMIT 1";

/// Seconds to wait for the store connection before giving up
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default store host (the headless service name in the cluster)
pub const DEFAULT_DB_HOST: &str = "postgres";

/// Default store port
pub const DEFAULT_DB_PORT: u16 = 5432;

// Environment variable names
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_NAME: &str = "POSTGRES_DB";
pub const ENV_DB_USER: &str = "POSTGRES_USER";
pub const ENV_DB_PASSWORD: &str = "POSTGRES_PASSWORD";

// =============================================================================
// HTTP Server Constants
// =============================================================================

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Seconds to let in-flight requests finish after SIGTERM/SIGINT
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Cache-Control for the health probe
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "greeter=info,sqlx=warn";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Store connection parameters (environment only)
    pub database: DatabaseConfig,
}

/// The parts of the configuration that may live in a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    http: HttpServerConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Store connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DatabaseConfig {
    /// Read the connection parameters from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the connection parameters through `lookup`.
    ///
    /// Host and port have defaults. Database name, user and password are
    /// required; unset and empty are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let host = get(ENV_DB_HOST).unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
        let port = match get(ENV_DB_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: ENV_DB_PORT,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            host,
            port,
            database: require(ENV_DB_NAME)?,
            user: require(ENV_DB_USER)?,
            password: require(ENV_DB_PASSWORD)?,
        })
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::load`] with the environment supplied by `lookup`.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                toml::from_str::<FileConfig>(&contents)?
            }
            None => FileConfig::default(),
        };

        Ok(Self {
            http: file.http,
            logging: file.logging,
            database: DatabaseConfig::from_lookup(lookup)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("Invalid value {value:?} for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}
