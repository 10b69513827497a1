//! Shared application state for request handlers.

use crate::greeting::Greeting;

/// State owned by the router and shared read-only with every handler.
///
/// Built once by [`crate::startup::initialize`]; nothing in it changes while
/// the server runs.
#[derive(Clone, Debug)]
pub struct AppState {
    pub greeting: Greeting,
}

impl AppState {
    pub fn new(greeting: Greeting) -> Self {
        Self { greeting }
    }
}
