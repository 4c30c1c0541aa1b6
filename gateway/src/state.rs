//! Shared application state.
//!
//! Built once at startup and handed to every route as `Arc<AppState>`.
//! Gateway handles are immutable after construction; a gateway that failed
//! to initialize is simply absent and the relay / speech service report it
//! as unavailable instead of failing at startup.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::core::audio::{AudioGateway, GoogleSpeech, GoogleSpeechConfig, SpeechService};
use crate::core::llm::{AvailableModels, ModelGateway, VertexConfig, VertexGemini};
use crate::core::providers::google::{
    CredentialSource, GOOGLE_CLOUD_PLATFORM_SCOPE, GoogleAuthClient, TokenProvider,
};
use crate::handlers::chat::ChatRelay;

pub struct AppState {
    pub config: ServerConfig,
    pub models: Arc<AvailableModels>,
    pub relay: ChatRelay,
    pub speech: SpeechService,
}

impl AppState {
    /// Build credentials and gateways from configuration.
    ///
    /// Never fails: each gateway that cannot be initialized is logged and
    /// left out.
    pub async fn new(config: ServerConfig) -> Arc<Self> {
        let source = CredentialSource::from_config(config.google_credentials.as_deref());
        info!("Using Google credentials from {}", source.describe());

        let token_provider: Option<Arc<dyn TokenProvider>> =
            match GoogleAuthClient::new(source, &[GOOGLE_CLOUD_PLATFORM_SCOPE]) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    warn!("Google credentials unavailable, chat and speech disabled: {}", e);
                    None
                }
            };

        let model_gateway = token_provider
            .clone()
            .and_then(|tokens| build_model_gateway(&config, tokens));
        let audio_gateway = token_provider.and_then(build_audio_gateway);

        Self::with_gateways(config, model_gateway, audio_gateway)
    }

    /// Assemble state around already-built gateways.
    pub fn with_gateways(
        config: ServerConfig,
        model_gateway: Option<Arc<dyn ModelGateway>>,
        audio_gateway: Option<Arc<dyn AudioGateway>>,
    ) -> Arc<Self> {
        let models = Arc::new(config.available_models());
        let relay = ChatRelay::new(model_gateway, models.clone());
        let speech = SpeechService::new(audio_gateway);

        info!(
            models = %models.joined(),
            chat_available = relay.is_available(),
            speech_available = speech.is_available(),
            "Application state ready"
        );

        Arc::new(Self {
            relay,
            speech,
            models,
            config,
        })
    }
}

fn build_model_gateway(
    config: &ServerConfig,
    tokens: Arc<dyn TokenProvider>,
) -> Option<Arc<dyn ModelGateway>> {
    let mut vertex_config = VertexConfig::new(&config.project_id, &config.location);
    if let Some(endpoint) = &config.vertex_endpoint {
        vertex_config = vertex_config.with_endpoint(endpoint);
    }

    match VertexGemini::new(vertex_config, tokens) {
        Ok(gateway) => {
            info!(
                project = %config.project_id,
                location = %config.location,
                "Vertex AI initialized"
            );
            Some(Arc::new(gateway))
        }
        Err(e) => {
            warn!("Error initializing Vertex AI: {}", e);
            None
        }
    }
}

fn build_audio_gateway(tokens: Arc<dyn TokenProvider>) -> Option<Arc<dyn AudioGateway>> {
    match GoogleSpeech::new(GoogleSpeechConfig::default(), tokens) {
        Ok(gateway) => Some(Arc::new(gateway)),
        Err(e) => {
            warn!("Error initializing Google speech clients: {}", e);
            None
        }
    }
}
