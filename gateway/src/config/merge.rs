//! Merging YAML overrides onto the environment-derived configuration.

use super::ServerConfig;
use super::env::load_from_env;
use super::yaml::YamlConfig;

/// Environment values form the base; every field present in YAML wins.
pub(super) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let mut config = load_from_env()?;

    let Some(yaml) = yaml else {
        return Ok(config);
    };

    if let Some(server) = yaml.server {
        if let Some(host) = server.host {
            config.host = host;
        }
        if let Some(port) = server.port {
            config.port = port;
        }
    }

    if let Some(vertex) = yaml.vertex {
        if let Some(project_id) = vertex.project_id {
            config.project_id = project_id;
        }
        if let Some(location) = vertex.location {
            config.location = location;
        }
        if let Some(models) = vertex.models {
            config.available_models = models.into_iter().map(|m| m.trim().to_string()).collect();
        }
        if let Some(endpoint) = vertex.endpoint {
            config.vertex_endpoint = Some(endpoint).filter(|e| !e.trim().is_empty());
        }
    }

    if let Some(providers) = yaml.providers
        && let Some(credentials) = providers.google_credentials
    {
        config.google_credentials = Some(credentials).filter(|c| !c.trim().is_empty());
    }

    if let Some(security) = yaml.security
        && let Some(origins) = security.cors_allowed_origins
    {
        config.cors_allowed_origins = origins;
    }

    Ok(config)
}
