use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, audio};
use crate::state::AppState;
use std::sync::Arc;

/// Create the JSON API router
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tts", post(audio::text_to_speech))
        .route("/stt", post(audio::speech_to_text))
        .route("/models", get(api::list_models))
        .layer(TraceLayer::new_for_http())
}
