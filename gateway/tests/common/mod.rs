//! Shared fixtures for integration tests: configuration and in-process
//! gateways standing in for Vertex AI and Google speech.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use vertex_chat::core::audio::{
    AudioError, AudioGateway, AudioResult, RecognitionEncoding, SpeechSegment,
};
use vertex_chat::core::llm::{ChunkStream, GenerationChunk, LlmError, LlmResult, ModelGateway};
use vertex_chat::{AppState, ServerConfig};

pub const FLASH: &str = "gemini-1.5-flash-001";
pub const PRO: &str = "gemini-1.5-pro-preview-0514";

/// Prompt that makes [`EchoGateway`] fail after its first fragment
pub const FAIL_PROMPT: &str = "please fail";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        project_id: "test-project".to_string(),
        location: "us-central1".to_string(),
        available_models: vec![FLASH.to_string(), PRO.to_string()],
        vertex_endpoint: None,
        google_credentials: None,
        cors_allowed_origins: "*".to_string(),
    }
}

/// Streams `["echo", ": ", <prompt>]` with a metadata-only unit in between.
#[derive(Default)]
pub struct EchoGateway {
    pub calls: AtomicUsize,
}

impl EchoGateway {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelGateway for EchoGateway {
    async fn stream_generate(&self, _model: &str, prompt: &str) -> LlmResult<ChunkStream> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let items: Vec<LlmResult<GenerationChunk>> = if prompt == FAIL_PROMPT {
            vec![
                Ok(GenerationChunk::text("partial")),
                Err(LlmError::ProviderError("upstream exploded".to_string())),
            ]
        } else {
            vec![
                Ok(GenerationChunk::text("echo")),
                Ok(GenerationChunk::metadata_only()),
                Ok(GenerationChunk::text(": ")),
                Ok(GenerationChunk::text(prompt)),
            ]
        };
        Ok(Box::pin(futures::stream::iter(items)))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }
}

/// Speech gateway with canned results.
pub struct FakeSpeech {
    pub segments: Vec<SpeechSegment>,
    pub fail: bool,
}

impl FakeSpeech {
    pub fn hearing(transcripts: &[&str]) -> Self {
        Self {
            segments: transcripts.iter().map(|t| SpeechSegment::new([*t])).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            segments: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl AudioGateway for FakeSpeech {
    async fn synthesize(&self, text: &str) -> AudioResult<Bytes> {
        if self.fail {
            return Err(AudioError::ProviderError("synthesis quota exceeded".to_string()));
        }
        Ok(Bytes::from(format!("ID3{text}")))
    }

    async fn recognize(
        &self,
        _audio: &[u8],
        _encoding: RecognitionEncoding,
    ) -> AudioResult<Vec<SpeechSegment>> {
        if self.fail {
            return Err(AudioError::NetworkError("connection reset".to_string()));
        }
        Ok(self.segments.clone())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

pub fn state_with(
    model: Option<Arc<dyn ModelGateway>>,
    audio: Option<Arc<dyn AudioGateway>>,
) -> Arc<AppState> {
    AppState::with_gateways(test_config(), model, audio)
}
