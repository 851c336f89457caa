//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no session data; it only holds the upstream client.

use std::sync::Arc;

use crate::upstream::Upstream;

/// Shared application state. Clone is required by Axum; the client is
/// Arc-wrapped so clones share one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<Upstream>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream: Arc::new(upstream) }
    }
}
