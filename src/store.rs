//! Read access to the greeting subject in PostgreSQL.
//!
//! `SubjectSource` is the seam between the startup phase and the store. The
//! production implementation opens a single connection, runs the subject query
//! once, and closes the connection again. There is no pool and no retry.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::config::{DatabaseConfig, DB_CONNECT_TIMEOUT_SECS, SUBJECT_QUERY};
use crate::error::StartupError;
use crate::greeting::GreetingSubject;

/// Something that can produce the greeting subject once at startup.
#[async_trait]
pub trait SubjectSource: Send + Sync {
    async fn fetch_subject(&self) -> Result<GreetingSubject, StartupError>;
}

/// Reads the subject from PostgreSQL over one short-lived connection.
pub struct PostgresSource {
    options: PgConnectOptions,
    target: String,
    connect_timeout: Duration,
}

impl PostgresSource {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user)
            .password(&config.password)
            .application_name(env!("CARGO_PKG_NAME"));

        Self {
            options,
            target: format!("{}:{}/{}", config.host, config.port, config.database),
            connect_timeout: Duration::from_secs(DB_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    async fn connect(&self) -> Result<PgConnection, StartupError> {
        match tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&self.options))
            .await
        {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(source)) => Err(StartupError::Connect {
                target: self.target.clone(),
                source,
            }),
            Err(_) => Err(StartupError::ConnectTimeout {
                target: self.target.clone(),
                seconds: self.connect_timeout.as_secs(),
            }),
        }
    }
}

#[async_trait]
impl SubjectSource for PostgresSource {
    async fn fetch_subject(&self) -> Result<GreetingSubject, StartupError> {
        tracing::debug!(target_db = %self.target, "Connecting to store");
        let mut conn = self.connect().await?;

        let row: Option<(String,)> = sqlx::query_as(SUBJECT_QUERY)
            .fetch_optional(&mut conn)
            .await
            .map_err(StartupError::Query)?;

        // The connection is not needed once the subject is read
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close store connection cleanly");
        }

        let (name,) = row.ok_or(StartupError::NoSubject)?;
        Ok(GreetingSubject::new(name))
    }
}
