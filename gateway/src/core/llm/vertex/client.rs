//! Vertex AI Gemini streaming client.
//!
//! Each call opens one `streamGenerateContent` request and returns its body
//! as a lazy [`ChunkStream`]: SSE events are decoded as the bytes arrive and
//! every event becomes one [`GenerationChunk`], in arrival order. Nothing is
//! buffered beyond the current partial event.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use super::config::VertexConfig;
use super::messages::{GenerateContentRequest, GenerateContentResponse, parse_api_error};
use crate::core::llm::sse::SseDecoder;
use crate::core::llm::{ChunkStream, GenerationChunk, LlmError, LlmResult, ModelGateway};
use crate::core::providers::google::TokenProvider;

pub struct VertexGemini {
    config: VertexConfig,
    http_client: Client,
    token_provider: Arc<dyn TokenProvider>,
}

impl VertexGemini {
    pub fn new(config: VertexConfig, token_provider: Arc<dyn TokenProvider>) -> LlmResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .build()
            .map_err(|e| LlmError::InvalidConfiguration(format!("HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
            token_provider,
        })
    }
}

#[async_trait]
impl ModelGateway for VertexGemini {
    async fn stream_generate(&self, model: &str, prompt: &str) -> LlmResult<ChunkStream> {
        let token = self
            .token_provider
            .get_token()
            .await
            .map_err(|e| LlmError::AuthenticationFailed(e.to_string()))?;

        let url = self.config.stream_url(model);
        debug!(model, url = %url, prompt_bytes = prompt.len(), "Starting Vertex AI stream");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(error_from_status(status, &body));
        }

        info!(model, "Vertex AI stream opened");

        let mut body = Box::pin(response.bytes_stream());
        let stream = async_stream::stream! {
            let mut decoder = SseDecoder::new();
            while let Some(item) = body.next().await {
                let bytes = match item {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        yield Err(LlmError::NetworkError(format!("Stream interrupted: {e}")));
                        return;
                    }
                };
                for payload in decoder.feed(&bytes) {
                    let chunk = parse_event(&payload);
                    let failed = chunk.is_err();
                    yield chunk;
                    if failed {
                        return;
                    }
                }
            }
            if let Some(payload) = decoder.finish() {
                yield parse_event(&payload);
            }
        };

        Ok(Box::pin(stream))
    }

    fn provider_name(&self) -> &'static str {
        "vertex-ai"
    }
}

/// Decode one SSE data payload into a generation unit.
fn parse_event(payload: &str) -> LlmResult<GenerationChunk> {
    let response: GenerateContentResponse = serde_json::from_str(payload)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse stream event: {e}")))?;

    if let Some(error) = response.error {
        return Err(LlmError::ProviderError(error.to_string()));
    }

    Ok(GenerationChunk {
        text: response.text(),
    })
}

fn error_from_status(status: StatusCode, body: &str) -> LlmError {
    let detail = match parse_api_error(body) {
        Some(error) => error.to_string(),
        None => body.to_string(),
    };
    let message = format!("Vertex AI API error ({status}): {detail}");

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::AuthenticationFailed(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded(message),
        _ => LlmError::ProviderError(message),
    }
}
