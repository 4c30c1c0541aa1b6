//! Speech service: the boundary between HTTP handlers and the audio gateway.
//!
//! Owns the input checks and the "gateway unavailable" policy so that the
//! handlers only translate JSON in and out.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use super::{AudioGateway, RecognitionEncoding, SUPPORTED_MIME_TYPES};
use crate::errors::{AppError, AppResult};

const TTS_UNAVAILABLE: &str = "Text-to-Speech service is not available";
const STT_UNAVAILABLE: &str = "Speech-to-Text service is not available";

#[derive(Clone, Default)]
pub struct SpeechService {
    gateway: Option<Arc<dyn AudioGateway>>,
}

impl SpeechService {
    pub fn new(gateway: Option<Arc<dyn AudioGateway>>) -> Self {
        Self { gateway }
    }

    pub fn is_available(&self) -> bool {
        self.gateway.is_some()
    }

    /// Fails with 503 when synthesis cannot be served. Handlers call this
    /// before decoding the request so bad input never masks an outage.
    pub fn ensure_synthesis(&self) -> AppResult<()> {
        self.require(TTS_UNAVAILABLE).map(|_| ())
    }

    /// Recognition counterpart of [`Self::ensure_synthesis`].
    pub fn ensure_recognition(&self) -> AppResult<()> {
        self.require(STT_UNAVAILABLE).map(|_| ())
    }

    fn require(&self, unavailable: &str) -> AppResult<&Arc<dyn AudioGateway>> {
        self.gateway
            .as_ref()
            .ok_or_else(|| AppError::ServiceUnavailable(unavailable.to_string()))
    }

    /// Synthesize `text` into MP3 bytes.
    pub async fn synthesize(&self, text: Option<&str>) -> AppResult<Bytes> {
        let gateway = self.require(TTS_UNAVAILABLE)?;

        let text = match text.map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => return Err(AppError::InvalidInput("No text provided".to_string())),
        };

        let audio = gateway.synthesize(text).await.map_err(|e| {
            warn!(provider = gateway.provider_name(), "Speech synthesis failed: {}", e);
            AppError::from(e)
        })?;

        info!(bytes = audio.len(), "Synthesized speech");
        Ok(audio)
    }

    /// Transcribe `audio`, joining the best alternative of each segment.
    pub async fn recognize(
        &self,
        audio: Option<&[u8]>,
        mime_type: Option<&str>,
    ) -> AppResult<String> {
        let gateway = self.require(STT_UNAVAILABLE)?;

        let (audio, mime_type) = match (audio, mime_type) {
            (Some(audio), Some(mime)) if !audio.is_empty() && !mime.trim().is_empty() => {
                (audio, mime)
            }
            _ => {
                return Err(AppError::InvalidInput(
                    "Missing audio data or mime type".to_string(),
                ));
            }
        };

        let encoding = RecognitionEncoding::from_mime_type(mime_type).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Unsupported audio format: {mime_type}. Supported formats: {}",
                SUPPORTED_MIME_TYPES.join(", ")
            ))
        })?;

        let segments = gateway.recognize(audio, encoding).await.map_err(|e| {
            warn!(provider = gateway.provider_name(), "Speech recognition failed: {}", e);
            AppError::from(e)
        })?;

        let best: Vec<&str> = segments.iter().filter_map(|segment| segment.top()).collect();
        if best.is_empty() {
            return Err(AppError::NoSpeechDetected);
        }

        info!(segments = best.len(), "Recognized speech");
        Ok(best.join(" "))
    }
}
