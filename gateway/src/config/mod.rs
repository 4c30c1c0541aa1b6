//! Configuration module for the chat relay server
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use vertex_chat::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::core::llm::AvailableModels;

mod env;
mod merge;
mod validation;
mod yaml;

pub use env::{DEFAULT_CORS_ORIGINS, DEFAULT_HOST, DEFAULT_LOCATION, DEFAULT_PORT, DEFAULT_PROJECT_ID};
pub use yaml::YamlConfig;

/// Server configuration
///
/// Contains everything needed to run the server:
/// - Listener address
/// - Vertex AI project, location, endpoint and the model allow-list
/// - Google Cloud credentials shared by the model and speech gateways
/// - CORS policy
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Vertex AI settings
    pub project_id: String,
    pub location: String,
    /// Model identifiers clients may select, in display order
    pub available_models: Vec<String>,
    /// Base URL override for Vertex AI (defaults to the regional endpoint)
    pub vertex_endpoint: Option<String>,

    /// Google Cloud credentials - can be:
    /// - None: Use Application Default Credentials (ADC)
    /// - JSON string starting with '{': Service account credentials inline
    /// - File path: Path to service account JSON file
    pub google_credentials: Option<String>,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    pub cors_allowed_origins: String,
}

/// Zeroize the credentials when ServerConfig is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut creds) = self.google_credentials {
            creds.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables only
    ///
    /// Missing variables fall back to their defaults. The `.env` file is
    /// loaded by `main` before this runs.
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number or validation fails.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = merge::merge_config(None)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// After loading and merging, performs validation on the final configuration.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        validation::validate_vertex(&self.project_id, &self.location)?;
        validation::validate_models(&self.available_models)?;
        Ok(())
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The model allow-list as used by the relay.
    pub fn available_models(&self) -> AvailableModels {
        AvailableModels::new(self.available_models.iter().cloned())
    }

    /// Parsed CORS origins; `None` means any origin is allowed.
    pub fn cors_origins(&self) -> Option<Vec<String>> {
        let origins = self.cors_allowed_origins.trim();
        if origins.is_empty() || origins == "*" {
            return None;
        }
        Some(
            origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        )
    }
}
