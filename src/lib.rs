//! greeter: greets the subject stored in PostgreSQL.
//!
//! The process runs in two phases. [`startup::initialize`] reads the subject
//! from the store exactly once; [`routes::create_router`] then serves the
//! greeting built from it for the lifetime of the process.

pub mod config;
pub mod error;
pub mod greeting;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod startup;
pub mod state;
pub mod store;

pub use error::StartupError;
pub use greeting::{Greeting, GreetingSubject};
pub use state::AppState;
