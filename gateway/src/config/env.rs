//! Environment variable loading.

use std::env;

use super::ServerConfig;
use crate::core::llm::DEFAULT_MODELS;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PROJECT_ID: &str = "camera-calibration-beta";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_CORS_ORIGINS: &str = "*";

/// Read a variable, treating unset and blank values alike.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Split a comma-separated model list, dropping surrounding whitespace.
pub(super) fn parse_model_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|model| model.trim().to_string())
        .filter(|model| !model.is_empty())
        .collect()
}

/// Build a configuration from environment variables, falling back to defaults.
pub(super) fn load_from_env() -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let port = match non_empty_var("PORT") {
        Some(value) => value
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT value '{value}': {e}"))?,
        None => DEFAULT_PORT,
    };

    let available_models = match non_empty_var("AVAILABLE_MODELS") {
        Some(value) => parse_model_list(&value),
        None => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
    };

    Ok(ServerConfig {
        host: non_empty_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
        project_id: non_empty_var("GOOGLE_CLOUD_PROJECT")
            .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
        location: non_empty_var("GOOGLE_CLOUD_LOCATION")
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        available_models,
        vertex_endpoint: non_empty_var("VERTEX_ENDPOINT"),
        google_credentials: non_empty_var("GOOGLE_CREDENTIALS"),
        cors_allowed_origins: non_empty_var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_list() {
        assert_eq!(
            parse_model_list(" gemini-a , gemini-b,,"),
            vec!["gemini-a".to_string(), "gemini-b".to_string()]
        );
        assert!(parse_model_list(" , ").is_empty());
    }
}
