//! Google Cloud Text-to-Speech and Speech-to-Text gateway.
//!
//! # API Reference
//!
//! - Synthesis: `POST https://texttospeech.googleapis.com/v1/text:synthesize`
//! - Recognition: `POST https://speech.googleapis.com/v1/speech:recognize`
//! - Auth: OAuth2 bearer token (`cloud-platform` scope)
//! - Audio travels base64-encoded inside the JSON bodies

mod client;
mod config;
pub mod messages;


pub use client::GoogleSpeech;
pub use config::{GOOGLE_STT_URL, GOOGLE_TTS_URL, GoogleSpeechConfig};
