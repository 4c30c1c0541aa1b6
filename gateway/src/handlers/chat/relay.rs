//! Request relay: forwards one chat request to the model gateway and
//! streams the answer back over the connection's outgoing channel.
//!
//! Every request produces either fragments followed by exactly one
//! `stream_response_end`, or fragments followed by exactly one `error`.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::messages::{ChatMessageRoute, ChatOutgoingMessage, ChatRequest};
use crate::core::llm::{AvailableModels, ModelGateway};
use crate::errors::{AppError, AppResult};

/// Prefix of every error reported for a failed generation
const PROCESSING_ERROR_PREFIX: &str = "Error processing message with Vertex AI";

/// How a forwarded generation ended without an upstream error.
#[derive(Debug, PartialEq, Eq)]
enum Forwarded {
    /// Gateway output exhausted; `fragments` were delivered
    Completed { fragments: usize },
    /// The client's channel closed while streaming
    ClientGone,
}

#[derive(Clone)]
pub struct ChatRelay {
    gateway: Option<Arc<dyn ModelGateway>>,
    models: Arc<AvailableModels>,
}

impl ChatRelay {
    pub fn new(gateway: Option<Arc<dyn ModelGateway>>, models: Arc<AvailableModels>) -> Self {
        Self { gateway, models }
    }

    pub fn is_available(&self) -> bool {
        self.gateway.is_some()
    }

    /// Relay one request, emitting its events on `tx` in order.
    pub async fn handle(&self, request: ChatRequest, tx: &mpsc::Sender<ChatMessageRoute>) {
        if !self.models.contains(&request.model_name) {
            let error = AppError::InvalidModelSelection(self.models.joined());
            warn!(model = %request.model_name, "Rejected chat request: {}", error);
            send(tx, ChatOutgoingMessage::error(error.to_string())).await;
            return;
        }

        info!(
            model = %request.model_name,
            chars = request.message.chars().count(),
            "Relaying chat request"
        );

        match self.forward(&request, tx).await {
            Ok(Forwarded::Completed { fragments }) => {
                send(tx, ChatOutgoingMessage::StreamResponseEnd).await;
                info!(model = %request.model_name, fragments, "Chat response completed");
            }
            Ok(Forwarded::ClientGone) => {
                debug!(model = %request.model_name, "Client went away, dropping remaining output");
            }
            Err(e) => {
                let message = format!("{PROCESSING_ERROR_PREFIX}: {e}");
                warn!(model = %request.model_name, "{}", message);
                send(tx, ChatOutgoingMessage::error(message)).await;
            }
        }
    }

    /// Forward each non-empty unit before polling the next one.
    async fn forward(
        &self,
        request: &ChatRequest,
        tx: &mpsc::Sender<ChatMessageRoute>,
    ) -> AppResult<Forwarded> {
        let gateway = self.gateway.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("Vertex AI client is not initialized".to_string())
        })?;

        let mut stream = gateway
            .stream_generate(&request.model_name, &request.message)
            .await?;

        let mut fragments = 0;
        while let Some(unit) = stream.next().await {
            let unit = unit?;
            let Some(text) = unit.non_empty_text() else {
                continue;
            };

            if !send(tx, ChatOutgoingMessage::chunk(text)).await {
                return Ok(Forwarded::ClientGone);
            }
            fragments += 1;
        }

        Ok(Forwarded::Completed { fragments })
    }
}

/// Queue an event for the writer task; `false` once the connection is gone.
async fn send(tx: &mpsc::Sender<ChatMessageRoute>, message: ChatOutgoingMessage) -> bool {
    tx.send(ChatMessageRoute::Outgoing(message)).await.is_ok()
}
