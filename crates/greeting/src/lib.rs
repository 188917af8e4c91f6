//! Shared mutable greeting state.
//!
//! A single [`Greeting`] holds the text served by the HTTP layer. It is an
//! owned value handed to request handlers through router state rather than
//! a process-wide singleton, so it can be exercised without a server.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Greeting used when no other initial value is configured.
pub const DEFAULT_MESSAGE: &str = "Hello, World!";

/// The mutable greeting message.
///
/// Cloning is cheap and every clone observes the same message. Each read or
/// write is atomic; concurrent writers are last-write-wins with no ordering
/// guarantee between them.
#[derive(Debug, Clone)]
pub struct Greeting {
    message: Arc<RwLock<String>>,
}

impl Greeting {
    /// Creates a greeting holding `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::new(RwLock::new(message.into())),
        }
    }

    /// Returns the current message.
    pub async fn get_message(&self) -> String {
        metrics::counter!("greeting_reads_total").increment(1);
        self.message.read().await.clone()
    }

    /// Replaces the message unconditionally.
    ///
    /// The new value is stored as-is: it is not trimmed, validated or
    /// length-checked.
    pub async fn set_message(&self, message: impl Into<String>) {
        let message = message.into();
        let mut current = self.message.write().await;
        tracing::debug!(
            old_len = current.len(),
            new_len = message.len(),
            "greeting updated"
        );
        *current = message;
        metrics::counter!("greeting_updates_total").increment(1);
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}
