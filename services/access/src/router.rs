use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use keygate_core::health::{healthz, readyz};
use keygate_core::middleware::request_id_layer;

use crate::handlers::{admin::create_key, check::check_key};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Admin
        .route("/admin/keys", post(create_key))
        // Key check
        .route("/keys/check", post(check_key))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
