pub mod audio;
pub mod llm;
pub mod providers;

// Re-export commonly used types for convenience
pub use llm::{
    AvailableModels, ChunkStream, DEFAULT_MODELS, GenerationChunk, LlmError, LlmResult,
    ModelGateway, VertexConfig, VertexGemini,
};

pub use audio::{
    AudioError, AudioGateway, AudioResult, GoogleSpeech, GoogleSpeechConfig, RecognitionEncoding,
    SpeechSegment, SpeechService,
};

pub use providers::google::{
    CredentialSource, GoogleAuthClient, GoogleAuthError, StaticTokenProvider, TokenProvider,
};
