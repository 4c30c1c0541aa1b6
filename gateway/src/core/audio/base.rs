use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors reported by an audio gateway.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type AudioResult<T> = Result<T, AudioError>;

/// MIME types accepted for recognition.
pub const SUPPORTED_MIME_TYPES: &[&str] = &["audio/webm", "audio/ogg"];

/// Container/codec of audio submitted for recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionEncoding {
    WebmOpus,
    OggOpus,
}

impl RecognitionEncoding {
    /// Map a browser MIME type to an encoding.
    ///
    /// Parameters such as `;codecs=opus` are ignored and the media type is
    /// compared case-insensitively.
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        let media_type = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match media_type.as_str() {
            "audio/webm" => Some(Self::WebmOpus),
            "audio/ogg" => Some(Self::OggOpus),
            _ => None,
        }
    }

    /// Speech-to-Text API enum name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebmOpus => "WEBM_OPUS",
            Self::OggOpus => "OGG_OPUS",
        }
    }
}

/// One recognized segment of speech, alternatives ordered best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechSegment {
    pub alternatives: Vec<String>,
}

impl SpeechSegment {
    pub fn new<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alternatives: alternatives.into_iter().map(Into::into).collect(),
        }
    }

    pub fn top(&self) -> Option<&str> {
        self.alternatives.first().map(String::as_str)
    }
}

/// Abstraction over speech synthesis and recognition APIs.
#[async_trait]
pub trait AudioGateway: Send + Sync {
    /// Synthesize `text` into MP3 audio.
    async fn synthesize(&self, text: &str) -> AudioResult<Bytes>;

    /// Recognize speech in `audio`, returning segments in order.
    async fn recognize(
        &self,
        audio: &[u8],
        encoding: RecognitionEncoding,
    ) -> AudioResult<Vec<SpeechSegment>>;

    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_mime_type() {
        assert_eq!(
            RecognitionEncoding::from_mime_type("audio/webm"),
            Some(RecognitionEncoding::WebmOpus)
        );
        assert_eq!(
            RecognitionEncoding::from_mime_type("audio/ogg"),
            Some(RecognitionEncoding::OggOpus)
        );
        assert_eq!(
            RecognitionEncoding::from_mime_type("audio/webm;codecs=opus"),
            Some(RecognitionEncoding::WebmOpus)
        );
        assert_eq!(
            RecognitionEncoding::from_mime_type("Audio/OGG"),
            Some(RecognitionEncoding::OggOpus)
        );
    }

    #[test]
    fn test_unsupported_mime_types() {
        assert_eq!(RecognitionEncoding::from_mime_type("audio/wav"), None);
        assert_eq!(RecognitionEncoding::from_mime_type("audio/mpeg"), None);
        assert_eq!(RecognitionEncoding::from_mime_type(""), None);
        assert_eq!(RecognitionEncoding::from_mime_type("audio/webmx"), None);
    }

    #[test]
    fn test_every_supported_mime_type_maps() {
        for mime in SUPPORTED_MIME_TYPES {
            assert!(RecognitionEncoding::from_mime_type(mime).is_some());
        }
    }

    #[test]
    fn test_segment_top_alternative() {
        assert_eq!(SpeechSegment::new(["best", "second"]).top(), Some("best"));
        assert_eq!(SpeechSegment::default().top(), None);
    }
}
