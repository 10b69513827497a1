//! Handler for the greeting page.

use axum::extract::State;

use crate::greeting::Greeting;
use crate::state::AppState;

/// Returns the greeting built at startup. Performs no I/O.
pub async fn index(State(state): State<AppState>) -> Greeting {
    state.greeting
}
