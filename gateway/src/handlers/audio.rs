//! Text-to-speech and speech-to-text REST endpoints.
//!
//! Audio crosses the HTTP boundary base64-encoded in JSON. Validation and
//! the availability policy live in [`SpeechService`](crate::core::audio::SpeechService);
//! these handlers only translate payloads, after the availability check.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /tts`
#[derive(Debug, Default, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Response body for `POST /tts`
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsResponse {
    /// MP3 audio, base64-encoded
    pub audio_base64: String,
}

/// Request body for `POST /stt`
#[derive(Debug, Default, Deserialize)]
pub struct SttRequest {
    #[serde(default)]
    pub audio_base64: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Response body for `POST /stt`
#[derive(Debug, Serialize, Deserialize)]
pub struct SttResponse {
    pub transcript: String,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::InvalidInput(format!("Invalid request body: {}", e.body_text())))
}

/// Handler for POST /tts - synthesize text to MP3
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> AppResult<Json<TtsResponse>> {
    state.speech.ensure_synthesis()?;
    let request = json_body(payload)?;

    let audio = state.speech.synthesize(request.text.as_deref()).await?;

    Ok(Json(TtsResponse {
        audio_base64: BASE64.encode(&audio),
    }))
}

/// Handler for POST /stt - transcribe base64 audio
pub async fn speech_to_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SttRequest>, JsonRejection>,
) -> AppResult<Json<SttResponse>> {
    state.speech.ensure_recognition()?;
    let request = json_body(payload)?;

    let audio = match request.audio_base64.as_deref() {
        Some(encoded) => Some(
            BASE64
                .decode(encoded.trim())
                .map_err(|e| AppError::InvalidInput(format!("Invalid base64 audio: {e}")))?,
        ),
        None => None,
    };

    let transcript = state
        .speech
        .recognize(audio.as_deref(), request.mime_type.as_deref())
        .await?;

    info!(chars = transcript.chars().count(), "Transcription complete");
    Ok(Json(SttResponse { transcript }))
}
