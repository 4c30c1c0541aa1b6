//! Google Cloud authentication shared by the Vertex AI and speech gateways.
//!
//! Credentials are resolved once at startup from a [`CredentialSource`] and
//! wrapped in a [`GoogleAuthClient`]. Gateways only see the [`TokenProvider`]
//! trait, which hands out OAuth2 bearer tokens for each upstream request.
//! Token caching and refresh are handled by `google-cloud-auth`.

use std::path::PathBuf;

use async_trait::async_trait;
use google_cloud_auth::credentials::{self, CacheableResource, Credentials};
use http::{Extensions, header::AUTHORIZATION};
use thiserror::Error;

/// OAuth2 scope covering Vertex AI, Text-to-Speech and Speech-to-Text
pub const GOOGLE_CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

#[derive(Debug, Error)]
pub enum GoogleAuthError {
    #[error("Failed to load Google credentials: {0}")]
    CredentialsLoad(String),

    #[error("Failed to obtain Google access token: {0}")]
    TokenFetch(String),
}

/// Where Google credentials come from.
///
/// The configured value is interpreted as:
/// - empty or absent: Application Default Credentials (ADC)
/// - a string starting with `{`: inline service account JSON
/// - anything else: path to a service account JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    ApplicationDefault,
    JsonContent(String),
    FilePath(PathBuf),
}

impl CredentialSource {
    pub fn from_api_key(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            CredentialSource::ApplicationDefault
        } else if trimmed.starts_with('{') {
            CredentialSource::JsonContent(trimmed.to_string())
        } else {
            CredentialSource::FilePath(PathBuf::from(trimmed))
        }
    }

    pub fn from_config(value: Option<&str>) -> Self {
        value
            .map(Self::from_api_key)
            .unwrap_or(CredentialSource::ApplicationDefault)
    }

    /// Short description for logs; never includes secret material.
    pub fn describe(&self) -> String {
        match self {
            CredentialSource::ApplicationDefault => "application default credentials".to_string(),
            CredentialSource::JsonContent(_) => "inline service account JSON".to_string(),
            CredentialSource::FilePath(path) => format!("service account file {}", path.display()),
        }
    }
}

/// Source of OAuth2 bearer tokens for Google Cloud REST calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self) -> Result<String, GoogleAuthError>;
}

/// Token provider backed by `google-cloud-auth` credentials.
pub struct GoogleAuthClient {
    credentials: Credentials,
}

impl GoogleAuthClient {
    pub fn new(source: CredentialSource, scopes: &[&str]) -> Result<Self, GoogleAuthError> {
        let credentials = match source {
            CredentialSource::ApplicationDefault => credentials::Builder::default()
                .with_scopes(scopes.iter().copied())
                .build()
                .map_err(|e| GoogleAuthError::CredentialsLoad(e.to_string()))?,
            CredentialSource::JsonContent(json) => service_account_credentials(&json, scopes)?,
            CredentialSource::FilePath(path) => {
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    GoogleAuthError::CredentialsLoad(format!(
                        "cannot read {}: {e}",
                        path.display()
                    ))
                })?;
                service_account_credentials(&contents, scopes)?
            }
        };

        Ok(Self { credentials })
    }
}

fn service_account_credentials(
    json: &str,
    scopes: &[&str],
) -> Result<Credentials, GoogleAuthError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
        GoogleAuthError::CredentialsLoad(format!("invalid service account JSON: {e}"))
    })?;

    credentials::service_account::Builder::new(value)
        .with_access_specifier(credentials::service_account::AccessSpecifier::from_scopes(
            scopes.iter().copied(),
        ))
        .build()
        .map_err(|e| GoogleAuthError::CredentialsLoad(e.to_string()))
}

#[async_trait]
impl TokenProvider for GoogleAuthClient {
    async fn get_token(&self) -> Result<String, GoogleAuthError> {
        let headers = match self
            .credentials
            .headers(Extensions::new())
            .await
            .map_err(|e| GoogleAuthError::TokenFetch(e.to_string()))?
        {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                return Err(GoogleAuthError::TokenFetch(
                    "credentials returned no authorization headers".to_string(),
                ));
            }
        };

        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| {
                GoogleAuthError::TokenFetch("missing authorization header".to_string())
            })?
            .to_str()
            .map_err(|e| GoogleAuthError::TokenFetch(e.to_string()))?;

        Ok(value.strip_prefix("Bearer ").unwrap_or(value).to_string())
    }
}

/// Fixed token, for local emulators and tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self) -> Result<String, GoogleAuthError> {
        Ok(self.token.clone())
    }
}
