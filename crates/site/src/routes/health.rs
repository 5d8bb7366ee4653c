//! Health check endpoint.
//!
//! Templates and content fixtures are loaded at startup or the process
//! never comes up, so a live server is a healthy server; the payload just
//! reports what it is serving.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    routes: usize,
    posts: usize,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        routes: state.routes().len(),
        posts: state.content().blog().blog_posts.len(),
    })
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
