//! Model Gateway: streaming text generation through hosted language models.
//!
//! The relay only depends on the [`ModelGateway`] trait. The production
//! implementation is [`VertexGemini`], which calls the Vertex AI
//! `streamGenerateContent` endpoint and decodes its Server-Sent Events.

mod base;
pub mod models;
pub mod sse;
pub mod vertex;

pub use base::{ChunkStream, GenerationChunk, LlmError, LlmResult, ModelGateway};
pub use models::{AvailableModels, DEFAULT_MODELS};
pub use vertex::{VertexConfig, VertexGemini};
