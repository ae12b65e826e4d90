pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::entities::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Document upload API
        .route("/api/v1/resumes/text", post(handlers::handle_resume_text))
        .route(
            "/api/v1/resumes/extract",
            post(handlers::handle_resume_extract),
        )
        // Plain-text API
        .route("/api/v1/entities", post(handlers::handle_extract_entities))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
