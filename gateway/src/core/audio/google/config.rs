/// Default Text-to-Speech API base URL
pub const GOOGLE_TTS_URL: &str = "https://texttospeech.googleapis.com";

/// Default Speech-to-Text API base URL
pub const GOOGLE_STT_URL: &str = "https://speech.googleapis.com";

/// Fixed voice and recognition settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleSpeechConfig {
    pub tts_endpoint: String,
    pub stt_endpoint: String,
    /// BCP-47 locale used for both synthesis and recognition
    pub language_code: String,
    /// Specific voice name (e.g. "en-US-Neural2-C"); `None` lets the API pick
    pub voice_name: Option<String>,
    /// SSML gender hint for voice selection
    pub ssml_gender: String,
    pub sample_rate_hertz: u32,
    pub enable_automatic_punctuation: bool,
}

impl Default for GoogleSpeechConfig {
    fn default() -> Self {
        Self {
            tts_endpoint: GOOGLE_TTS_URL.to_string(),
            stt_endpoint: GOOGLE_STT_URL.to_string(),
            language_code: "en-US".to_string(),
            voice_name: None,
            ssml_gender: "NEUTRAL".to_string(),
            sample_rate_hertz: 48000,
            enable_automatic_punctuation: true,
        }
    }
}

impl GoogleSpeechConfig {
    /// Point both APIs at one base URL (local emulators, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.tts_endpoint = endpoint.clone();
        self.stt_endpoint = endpoint;
        self
    }

    pub fn synthesize_url(&self) -> String {
        format!("{}/v1/text:synthesize", self.tts_endpoint.trim_end_matches('/'))
    }

    pub fn recognize_url(&self) -> String {
        format!("{}/v1/speech:recognize", self.stt_endpoint.trim_end_matches('/'))
    }
}
