use crate::core::llm::LlmError;

/// Project, region and (optionally) endpoint override for Vertex AI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexConfig {
    pub project_id: String,
    pub location: String,
    /// Base URL override, e.g. a local emulator. `None` uses the regional endpoint.
    pub endpoint: Option<String>,
}

impl VertexConfig {
    pub fn new(project_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
            endpoint: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn validate(&self) -> Result<(), LlmError> {
        if self.project_id.trim().is_empty() {
            return Err(LlmError::InvalidConfiguration(
                "Vertex AI project id is empty".to_string(),
            ));
        }
        if self.location.trim().is_empty() {
            return Err(LlmError::InvalidConfiguration(
                "Vertex AI location is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn base_url(&self) -> String {
        match self.endpoint.as_deref() {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }

    /// Streaming generation URL for `model`.
    pub fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:streamGenerateContent?alt=sse",
            self.base_url(),
            self.project_id,
            self.location,
            model
        )
    }
}
