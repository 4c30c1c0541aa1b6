//! Chat WebSocket message types

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Incoming Messages (Client -> Server)
// =============================================================================

/// Incoming WebSocket messages from client
#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum ChatIncomingMessage {
    /// Ask the selected model to answer `message`
    #[serde(rename = "send_message")]
    SendMessage(ChatRequest),
}

/// One chat request.
///
/// Missing or `null` fields decode as empty values so that a request
/// without a model is answered with the model list rather than rejected
/// as malformed.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub model_name: String,

    /// Prior conversation turns as sent by the client. Accepted for wire
    /// compatibility; generation uses `message` alone.
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Outgoing Messages (Server -> Client)
// =============================================================================

/// Outgoing WebSocket messages to client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ChatOutgoingMessage {
    /// One fragment of generated text
    #[serde(rename = "stream_response_chunk")]
    StreamResponseChunk { text: String },

    /// Generation finished; always the last event of a successful request
    #[serde(rename = "stream_response_end")]
    StreamResponseEnd,

    /// The current request failed
    #[serde(rename = "error")]
    Error { message: String },
}

impl ChatOutgoingMessage {
    pub fn chunk(text: impl Into<String>) -> Self {
        Self::StreamResponseChunk { text: text.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Routing for the connection's writer task
#[derive(Debug)]
pub enum ChatMessageRoute {
    /// JSON text message
    Outgoing(ChatOutgoingMessage),
    /// Flush what is queued, then close the socket
    Close,
}
