//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use async_trait::async_trait;
use axum_server::Handle;
use greeter::routes::create_router;
use greeter::startup::initialize;
use greeter::store::SubjectSource;
use greeter::{GreetingSubject, StartupError};

/// A store stand-in holding a fixed set of rows.
pub struct SeededStore {
    rows: Vec<String>,
}

impl SeededStore {
    pub fn with_rows(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[async_trait]
impl SubjectSource for SeededStore {
    async fn fetch_subject(&self) -> Result<GreetingSubject, StartupError> {
        self.rows
            .first()
            .map(|name| GreetingSubject::new(name.clone()))
            .ok_or(StartupError::NoSubject)
    }
}

/// A running server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: Handle,
    task: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Run the startup phase against `source` and serve the result.
    pub async fn start(source: &dyn SubjectSource) -> Result<Self, StartupError> {
        let state = initialize(source).await?;
        let app = create_router(state);

        let handle = Handle::new();
        let server_handle = handle.clone();
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let task = tokio::spawn(async move {
            greeter::http::serve(app, addr, server_handle)
                .await
                .expect("test server failed");
        });

        let addr = handle
            .listening()
            .await
            .expect("test server did not bind");

        Ok(Self { addr, handle, task })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(self) {
        self.handle.shutdown();
        let _ = self.task.await;
    }
}
