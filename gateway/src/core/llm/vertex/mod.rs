//! Vertex AI Gemini gateway.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:streamGenerateContent?alt=sse`
//! - Auth: OAuth2 bearer token (`cloud-platform` scope)
//! - Output: Server-Sent Events, one `GenerateContentResponse` JSON per event

mod client;
mod config;
pub mod messages;


pub use client::VertexGemini;
pub use config::VertexConfig;
