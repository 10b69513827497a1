//! Startup error types.
//!
//! Only the initialization phase can fail. Every variant here is fatal: the
//! binary logs it and exits non-zero before the listener binds.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to store at {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Timed out after {seconds}s connecting to store at {target}")]
    ConnectTimeout { target: String, seconds: u64 },

    #[error("Subject query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Subject query returned no rows; the users table must be seeded")]
    NoSubject,
}
