//! Application-level error taxonomy.
//!
//! Every failure a client can observe is one of these variants. Gateway
//! errors (`LlmError`, `AudioError`) are converted into
//! [`AppError::UpstreamFailure`] at the boundary that produced them, and
//! HTTP handlers turn an `AppError` into a `{"error": ...}` JSON body with
//! the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::core::audio::AudioError;
use crate::core::llm::LlmError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The requested model is not part of the configured allow-list
    #[error("Invalid model selected. Available models: {0}")]
    InvalidModelSelection(String),

    /// A required field was missing, empty or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// The backing gateway failed to initialize at startup
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Any failure reported by an upstream Google Cloud call
    #[error("{0}")]
    UpstreamFailure(String),

    /// Recognition finished without a single transcript
    #[error("No speech detected in audio")]
    NoSpeechDetected,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidModelSelection(_)
            | AppError::InvalidInput(_)
            | AppError::NoSpeechDetected => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = %status, "Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<AudioError> for AppError {
    fn from(err: AudioError) -> Self {
        AppError::UpstreamFailure(err.to_string())
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::UpstreamFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            AppError::InvalidInput("missing text".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NoSpeechDetected.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidModelSelection("a, b".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ServiceUnavailable("down".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::UpstreamFailure("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_model_message_lists_models() {
        let err = AppError::InvalidModelSelection("m1, m2".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid model selected. Available models: m1, m2"
        );
    }

    #[test]
    fn test_upstream_conversion_keeps_message() {
        let err: AppError = AudioError::ProviderError("quota exceeded".to_string()).into();
        match err {
            AppError::UpstreamFailure(msg) => assert!(msg.contains("quota exceeded")),
            other => panic!("Expected UpstreamFailure, got {other:?}"),
        }
    }
}
