pub mod api;
pub mod chat;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handlers::api::{health_check, index, script};
use crate::state::AppState;

/// Health check and the static chat client (no state needed).
pub fn create_public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/health", get(health_check))
}

/// Every route of the server, bound to `state`.
pub fn create_router(state: Arc<AppState>) -> Router {
    create_public_router()
        .merge(api::create_api_router())
        .merge(chat::create_chat_router())
        .with_state(state)
}
