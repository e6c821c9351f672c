//! Shared application state for the signup HTTP adapter.
//!
//! [`AppState`] owns the activity registry behind an async read-write
//! lock. The registry is constructed by the caller (the binary at
//! startup, or each test case) and moved in, so every router instance
//! has its own isolated roster state.

use std::sync::Arc;

use signup_core::ActivityRegistry;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The activity registry. Transitions hold the write guard for their
    /// whole check-then-mutate sequence.
    pub registry: Arc<RwLock<ActivityRegistry>>,
}

impl AppState {
    /// Create application state around an already-populated registry.
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Copy of the current registry contents.
    pub async fn snapshot(&self) -> ActivityRegistry {
        self.registry.read().await.clone()
    }
}
