//! API routes.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::state::AppState;

/// Create the API router.
///
/// | Method | Path                     | Handler          |
/// |--------|--------------------------|------------------|
/// | GET    | `/health`                | health check     |
/// | POST   | `/accounts`              | create account   |
/// | GET    | `/accounts/:account_id`  | fetch account    |
/// | POST   | `/transactions`          | record transaction |
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let max_body_bytes = state.config.max_body_bytes;
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/accounts", post(handlers::create_account))
        .route("/accounts/:account_id", get(handlers::fetch_account))
        .route("/transactions", post(handlers::transact))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}
