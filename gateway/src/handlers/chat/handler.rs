//! Chat WebSocket handler

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::state::AppState;

use super::messages::{ChatIncomingMessage, ChatMessageRoute, ChatOutgoingMessage};

/// Outgoing events buffered per connection
const CHANNEL_BUFFER_SIZE: usize = 256;

/// Maximum WebSocket message size (1 MB)
const MAX_WS_MESSAGE_SIZE: usize = 1024 * 1024;

/// Chat WebSocket handler
///
/// Upgrades the HTTP connection to a WebSocket session channel. Each session
/// gets a fresh id used only for log correlation.
pub async fn chat_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    let session_id = Uuid::new_v4();
    debug!(%session_id, "Chat WebSocket upgrade requested");

    ws.max_message_size(MAX_WS_MESSAGE_SIZE)
        .on_upgrade(move |socket| handle_chat_socket(socket, state, session_id))
}

/// Handle one chat connection until the client disconnects.
async fn handle_chat_socket(socket: WebSocket, app_state: Arc<AppState>, session_id: Uuid) {
    info!(%session_id, "Client connected");

    let (mut sender, mut receiver) = socket.split();
    let (message_tx, mut message_rx) = mpsc::channel::<ChatMessageRoute>(CHANNEL_BUFFER_SIZE);

    // Sender task for outgoing messages
    let sender_task = tokio::spawn(async move {
        while let Some(route) = message_rx.recv().await {
            let result = match route {
                ChatMessageRoute::Outgoing(message) => match serde_json::to_string(&message) {
                    Ok(json_str) => sender.send(Message::Text(json_str.into())).await,
                    Err(e) => {
                        error!("Failed to serialize outgoing message: {}", e);
                        continue;
                    }
                },
                ChatMessageRoute::Close => {
                    let _ = sender.send(Message::Close(None)).await;
                    break;
                }
            };

            if let Err(e) = result {
                error!("Failed to send WebSocket message: {}", e);
                break;
            }
        }
    });

    // Requests are handled one at a time, so events of two requests never interleave.
    // The socket is not read while a request streams: pings and a client Close
    // are only seen once the current answer has finished.
    while let Some(msg_result) = receiver.next().await {
        match msg_result {
            Ok(msg) => {
                if !process_chat_message(msg, &message_tx, &app_state, session_id).await {
                    break;
                }
            }
            Err(e) => {
                warn!(%session_id, "WebSocket error: {}", e);
                break;
            }
        }
    }

    // Let the writer flush anything still queued before closing.
    let _ = message_tx.send(ChatMessageRoute::Close).await;
    drop(message_tx);
    if let Err(e) = sender_task.await {
        error!(%session_id, "Writer task failed: {}", e);
    }

    info!(%session_id, "Client disconnected");
}

/// Process one incoming frame. Returns `false` when the connection should end.
async fn process_chat_message(
    msg: Message,
    message_tx: &mpsc::Sender<ChatMessageRoute>,
    app_state: &Arc<AppState>,
    session_id: Uuid,
) -> bool {
    match msg {
        Message::Text(text) => {
            debug!(%session_id, "Received text message: {} bytes", text.len());

            let incoming: ChatIncomingMessage = match serde_json::from_str(&text) {
                Ok(msg) => msg,
                Err(e) => {
                    warn!(%session_id, "Failed to parse chat message: {}", e);
                    let _ = message_tx
                        .send(ChatMessageRoute::Outgoing(ChatOutgoingMessage::error(
                            format!("Invalid message format: {e}"),
                        )))
                        .await;
                    return true;
                }
            };

            match incoming {
                ChatIncomingMessage::SendMessage(request) => {
                    info!(%session_id, model = %request.model_name, "Received message");
                    app_state.relay.handle(request, message_tx).await;
                    debug!(%session_id, "Request finished, resuming socket reads");
                }
            }
            true
        }
        Message::Binary(data) => {
            debug!(%session_id, "Ignoring binary frame: {} bytes", data.len());
            true
        }
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            info!(%session_id, "WebSocket close received");
            false
        }
    }
}
