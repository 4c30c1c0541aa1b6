//! Audio Gateway: speech synthesis and recognition through hosted services.
//!
//! - `base`: the [`AudioGateway`] trait and its types
//! - `google`: Google Cloud Text-to-Speech / Speech-to-Text implementation
//! - `service`: input validation and availability policy used by the HTTP handlers

mod base;
pub mod google;
pub mod service;

pub use base::{
    AudioError, AudioGateway, AudioResult, RecognitionEncoding, SUPPORTED_MIME_TYPES,
    SpeechSegment,
};
pub use google::{GoogleSpeech, GoogleSpeechConfig};
pub use service::SpeechService;
