pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-resume", post(handlers::handle_generate))
        .route(
            "/generate-resume-from-url",
            post(handlers::handle_generate_from_url),
        )
        .with_state(state)
}
