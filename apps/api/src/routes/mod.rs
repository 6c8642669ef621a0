pub mod health;
pub mod ui;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/platforms", get(handlers::handle_list_platforms))
        .route(
            "/api/v1/settings/options",
            get(handlers::handle_settings_options),
        )
        // Generation
        .route("/api/v1/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/generate/stream",
            post(handlers::handle_generate_stream),
        )
        .fallback(not_found)
        .with_state(state)
}
