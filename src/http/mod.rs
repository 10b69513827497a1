//! HTTP server module.
//!
//! Plain HTTP only; TLS terminates in front of the service when needed. The
//! server shuts down gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
