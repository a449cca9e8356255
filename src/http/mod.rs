//! Shared, connection-pooled HTTP client with pluggable auth, retries, and
//! typed error mapping. One instance is shared across all
//! product clients.

pub mod engine;

pub use engine::{HttpEngine, Idempotency};
