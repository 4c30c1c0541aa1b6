//! Chat WebSocket handlers
//!
//! One WebSocket connection carries any number of chat requests. Each
//! request is relayed to the configured model gateway and the generated
//! text is streamed back fragment by fragment.
//!
//! # Protocol
//!
//! ## Client → Server
//!
//! - **send_message**: `{ message, model_name, history? }`
//!
//! ## Server → Client
//!
//! - **stream_response_chunk**: one generated text fragment
//! - **stream_response_end**: the request completed successfully
//! - **error**: the request failed (invalid model, upstream failure,
//!   malformed frame)

mod handler;
pub mod messages;
mod relay;

pub use handler::chat_handler;
pub use messages::{ChatIncomingMessage, ChatMessageRoute, ChatOutgoingMessage, ChatRequest};
pub use relay::ChatRelay;
