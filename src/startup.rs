//! The initialization phase.
//!
//! The service has two phases: initializing (once, blocking, may fail) and
//! serving (steady state, cannot fail). `initialize` is the whole first phase.
//! It returns the state the second phase owns, or the error that must stop the
//! process before the listener binds.

use crate::error::StartupError;
use crate::greeting::Greeting;
use crate::state::AppState;
use crate::store::SubjectSource;

/// Read the subject once and build the state served for the process lifetime.
pub async fn initialize(source: &dyn SubjectSource) -> Result<AppState, StartupError> {
    let subject = source.fetch_subject().await?;
    tracing::info!(subject = %subject.name(), "Loaded greeting subject");

    Ok(AppState::new(Greeting::for_subject(&subject)))
}
