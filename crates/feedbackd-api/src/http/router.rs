//! Axum router configuration with middleware.
//!
//! Public routes: health check and feedback submission. Admin routes
//! are gated by the token extractor. Middleware: permissive CORS and
//! request tracing.

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_check))
        .route("/api/feedback", post(handlers::feedback::submit_feedback))
        .route("/api/admin/login", post(handlers::auth::login))
        .route("/api/admin/feedback", get(handlers::feedback::list_feedback))
        .route("/api/admin/stats", get(handlers::stats::get_stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Health check (no auth required).
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Feedback API is running!" }))
}
