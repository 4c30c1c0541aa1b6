use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use thiserror::Error;

/// Errors that can occur while generating content.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Invalid gateway configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Credentials could not produce a token, or the provider rejected it
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Transport-level failure talking to the provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Quota or rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Provider returned an error
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Provider returned something we could not decode
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type LlmResult<T> = Result<T, LlmError>;

/// One unit of streamed generation output.
///
/// `text` is `None` for units that carry only metadata (usage, safety
/// ratings, finish reason).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationChunk {
    pub text: Option<String>,
}

impl GenerationChunk {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn metadata_only() -> Self {
        Self { text: None }
    }

    /// The chunk's text, if it has any non-empty text.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

/// Lazy, finite, ordered sequence of generation units.
pub type ChunkStream = Pin<Box<dyn Stream<Item = LlmResult<GenerationChunk>> + Send>>;

/// Abstraction over a streaming text-generation API.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Start generating a response to `prompt` with `model`.
    ///
    /// Errors returned here happen before the first unit; errors inside the
    /// stream happen mid-generation. Either way the request is over.
    async fn stream_generate(&self, model: &str, prompt: &str) -> LlmResult<ChunkStream>;

    fn provider_name(&self) -> &'static str;
}
