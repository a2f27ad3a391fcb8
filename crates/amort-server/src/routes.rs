//! Route definitions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// Create the API router.
///
/// The unversioned `/calculate-loan` route is the contract the original
/// form UI consumes; `/api/v1/schedule` is the versioned alias.
pub fn create_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Schedule computation
        .route("/calculate-loan", post(handlers::calculate_loan))
        .route("/api/v1/schedule", post(handlers::calculate_loan))
}
