use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// All fields are optional so a file may set only what it needs; anything
/// left out keeps the value from the environment (or its default).
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 5000
///
/// vertex:
///   project_id: "my-gcp-project"
///   location: "us-central1"
///   models:
///     - "gemini-1.5-flash-001"
///     - "gemini-1.5-pro-preview-0514"
///   endpoint: "https://us-central1-aiplatform.googleapis.com"
///
/// providers:
///   google_credentials: "/path/to/service-account.json"
///
/// security:
///   cors_allowed_origins: "https://chat.example.com"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub vertex: Option<VertexYaml>,
    pub providers: Option<ProvidersYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Vertex AI settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VertexYaml {
    pub project_id: Option<String>,
    pub location: Option<String>,
    /// Replaces the whole model list when present
    pub models: Option<Vec<String>>,
    /// Base URL override for the Vertex AI REST API
    pub endpoint: Option<String>,
}

/// Provider credentials from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersYaml {
    /// Google Cloud credentials - can be:
    /// - Path to service account JSON file
    /// - Inline JSON content (for secrets management)
    /// - Empty string to use Application Default Credentials
    pub google_credentials: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    pub cors_allowed_origins: Option<String>,
}

impl YamlConfig {
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_config_full() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8080

vertex:
  project_id: "demo-project"
  location: "europe-west4"
  models:
    - "gemini-1.5-flash-001"
  endpoint: "http://localhost:9000"

providers:
  google_credentials: "/etc/gcp/sa.json"

security:
  cors_allowed_origins: "https://chat.example.com"
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();

        let server = config.server.as_ref().unwrap();
        assert_eq!(server.host, Some("127.0.0.1".to_string()));
        assert_eq!(server.port, Some(8080));

        let vertex = config.vertex.as_ref().unwrap();
        assert_eq!(vertex.project_id, Some("demo-project".to_string()));
        assert_eq!(vertex.location, Some("europe-west4".to_string()));
        assert_eq!(
            vertex.models,
            Some(vec!["gemini-1.5-flash-001".to_string()])
        );
        assert_eq!(vertex.endpoint, Some("http://localhost:9000".to_string()));

        assert_eq!(
            config.providers.as_ref().unwrap().google_credentials,
            Some("/etc/gcp/sa.json".to_string())
        );
        assert_eq!(
            config.security.as_ref().unwrap().cors_allowed_origins,
            Some("https://chat.example.com".to_string())
        );
    }

    #[test]
    fn test_yaml_config_partial() {
        let yaml = r#"
server:
  port: 9000
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(config.server.as_ref().unwrap().host.is_none());
        assert_eq!(config.server.as_ref().unwrap().port, Some(9000));
        assert!(config.vertex.is_none());
        assert!(config.providers.is_none());
    }

    #[test]
    fn test_yaml_config_empty() {
        let config: YamlConfig = serde_yaml::from_str("").unwrap_or_default();
        assert!(config.server.is_none());
        assert!(config.vertex.is_none());
    }

    #[test]
    fn test_yaml_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "vertex:\n  location: \"asia-northeast1\"\n").unwrap();

        let config = YamlConfig::from_file(&path).unwrap();
        assert_eq!(
            config.vertex.unwrap().location,
            Some("asia-northeast1".to_string())
        );
    }

    #[test]
    fn test_yaml_config_from_missing_file() {
        let path = PathBuf::from("/nonexistent/config.yaml");
        let err = YamlConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_yaml_config_invalid_port_type() {
        let yaml = "server:\n  port: \"not-a-port\"\n";
        assert!(serde_yaml::from_str::<YamlConfig>(yaml).is_err());
    }
}
