//! Health check endpoint for container orchestration.
//!
//! The listener only binds after the startup phase succeeded, so a process that
//! answers here is both alive and ready. Used by the Kubernetes liveness and
//! readiness probes.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
