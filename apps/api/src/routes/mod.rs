pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};
use tower::limit::ConcurrencyLimitLayer;

use crate::meals::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let concurrency_limit = state.config.concurrency_limit;

    let router = Router::new()
        .route("/", get(ui::chat_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/ingredients", get(handlers::handle_ingredients))
        .with_state(state);

    match concurrency_limit {
        Some(limit) => router.layer(ConcurrencyLimitLayer::new(limit)),
        None => router,
    }
}
