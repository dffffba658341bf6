//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional contact relay and the rate limiter guarding it.
//! Nothing here is persisted; a restart forgets every rate-limit window.

use std::sync::Arc;

use crate::rate_limit::{RateLimitConfig, RateLimiter};
use crate::services::contact::ContactRelay;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional contact relay. `None` if relay env vars are not configured.
    pub relay: Option<Arc<dyn ContactRelay>>,
    /// In-memory rate limiter for contact submissions.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn ContactRelay>>, limits: RateLimitConfig) -> Self {
        Self { relay, rate_limiter: RateLimiter::new(limits) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
