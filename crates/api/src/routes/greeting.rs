//! Greeting read and update endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use greeting::Greeting;

/// Shared application state accessible from all handlers.
#[derive(Debug, Default)]
pub struct AppState {
    pub greeting: Greeting,
}

impl AppState {
    /// Creates application state around an existing greeting.
    pub fn new(greeting: Greeting) -> Self {
        Self { greeting }
    }
}

/// GET / — return the current greeting as plain text.
#[tracing::instrument(skip(state))]
pub async fn read(State(state): State<Arc<AppState>>) -> String {
    state.greeting.get_message().await
}

/// GET|POST /update/{message} — replace the greeting.
///
/// The path segment arrives percent-decoded, so `/update/Hi%20There`
/// stores `"Hi There"`.
#[tracing::instrument(skip(state))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(message): Path<String>,
) -> String {
    let body = format!("Greeting updated to: {message}");
    state.greeting.set_message(message).await;
    body
}
