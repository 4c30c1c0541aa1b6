//! Chat WebSocket route configuration

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::chat::chat_handler;
use crate::state::AppState;
use std::sync::Arc;

/// Create the chat WebSocket router
///
/// # Endpoint
///
/// `GET /ws` - WebSocket upgrade for a chat session
///
/// # Example
///
/// ```json
/// // Client sends
/// {"type": "send_message", "message": "Hello", "model_name": "gemini-1.5-flash-001"}
///
/// // Server streams back
/// {"type": "stream_response_chunk", "text": "Hi"}
/// {"type": "stream_response_chunk", "text": " there!"}
/// {"type": "stream_response_end"}
/// ```
pub fn create_chat_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ws", get(chat_handler))
        .layer(TraceLayer::new_for_http())
}
