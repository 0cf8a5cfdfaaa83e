pub mod health;
pub mod resumes;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser UI
        .route("/", get(resumes::handle_index))
        .route("/upload", post(resumes::handle_upload))
        // JSON API
        .route("/api/v1/resumes/parse", post(resumes::handle_parse))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
