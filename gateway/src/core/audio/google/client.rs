//! Google Cloud speech client.
//!
//! Synthesis and recognition are both single request/response calls with
//! base64 audio in the JSON body.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::config::GoogleSpeechConfig;
use super::messages::{
    AudioConfig, GoogleErrorResponse, RecognitionAudio, RecognitionConfig, RecognizeRequest,
    RecognizeResponse, SynthesisInput, SynthesizeRequest, SynthesizeResponse,
    VoiceSelectionParams,
};
use crate::core::audio::{
    AudioError, AudioGateway, AudioResult, RecognitionEncoding, SpeechSegment,
};
use crate::core::providers::google::TokenProvider;

pub struct GoogleSpeech {
    config: GoogleSpeechConfig,
    http_client: Client,
    token_provider: Arc<dyn TokenProvider>,
}

impl GoogleSpeech {
    pub fn new(
        config: GoogleSpeechConfig,
        token_provider: Arc<dyn TokenProvider>,
    ) -> AudioResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| AudioError::InvalidConfiguration(format!("HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
            token_provider,
        })
    }

    async fn post_json<Req, Resp>(&self, api: &str, url: &str, request: &Req) -> AudioResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let token = self
            .token_provider
            .get_token()
            .await
            .map_err(|e| AudioError::AuthenticationFailed(e.to_string()))?;

        let response = self
            .http_client
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| AudioError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(error_from_status(api, status, &body));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| AudioError::InvalidResponse(format!("Failed to parse {api} response: {e}")))
    }
}

#[async_trait]
impl AudioGateway for GoogleSpeech {
    async fn synthesize(&self, text: &str) -> AudioResult<Bytes> {
        let request = SynthesizeRequest {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelectionParams {
                language_code: self.config.language_code.clone(),
                name: self.config.voice_name.clone(),
                ssml_gender: self.config.ssml_gender.clone(),
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3".to_string(),
            },
        };

        debug!(chars = text.chars().count(), "Requesting speech synthesis");
        let response: SynthesizeResponse = self
            .post_json("Text-to-Speech", &self.config.synthesize_url(), &request)
            .await?;

        if response.audio_content.is_empty() {
            return Err(AudioError::InvalidResponse(
                "Text-to-Speech returned no audio".to_string(),
            ));
        }

        let audio = BASE64
            .decode(response.audio_content.as_bytes())
            .map_err(|e| AudioError::InvalidResponse(format!("Invalid audio content: {e}")))?;

        info!(bytes = audio.len(), "Speech synthesized");
        Ok(Bytes::from(audio))
    }

    async fn recognize(
        &self,
        audio: &[u8],
        encoding: RecognitionEncoding,
    ) -> AudioResult<Vec<SpeechSegment>> {
        let request = RecognizeRequest {
            config: RecognitionConfig {
                encoding: encoding.as_str().to_string(),
                sample_rate_hertz: self.config.sample_rate_hertz,
                language_code: self.config.language_code.clone(),
                enable_automatic_punctuation: self.config.enable_automatic_punctuation,
            },
            audio: RecognitionAudio {
                content: BASE64.encode(audio),
            },
        };

        debug!(bytes = audio.len(), encoding = encoding.as_str(), "Requesting speech recognition");
        let response: RecognizeResponse = self
            .post_json("Speech-to-Text", &self.config.recognize_url(), &request)
            .await?;

        let segments: Vec<SpeechSegment> = response
            .results
            .into_iter()
            .map(|result| {
                SpeechSegment::new(result.alternatives.into_iter().map(|alt| alt.transcript))
            })
            .collect();

        info!(segments = segments.len(), "Speech recognized");
        Ok(segments)
    }

    fn provider_name(&self) -> &'static str {
        "google-speech"
    }
}

fn error_from_status(api: &str, status: StatusCode, body: &str) -> AudioError {
    let detail = match serde_json::from_str::<GoogleErrorResponse>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("{} ({code})", envelope.error.message),
            None => envelope.error.message,
        },
        Err(_) => body.to_string(),
    };
    let message = format!("{api} API error ({status}): {detail}");

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AudioError::AuthenticationFailed(message),
        _ => AudioError::ProviderError(message),
    }
}
