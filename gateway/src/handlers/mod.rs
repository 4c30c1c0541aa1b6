//! HTTP and WebSocket request handlers
//!
//! This module organizes all handlers into logical groups:
//! - `api` - Health check, model list and the static chat client
//! - `audio` - Text-to-speech and speech-to-text REST API
//! - `chat` - Chat WebSocket session and request relay

pub mod api;
pub mod audio;
pub mod chat;

// Re-export commonly used handlers for convenient access
pub use chat::chat_handler;
