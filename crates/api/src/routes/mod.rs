//! HTTP route handlers.

pub mod greeting;
pub mod health;
pub mod metrics;
