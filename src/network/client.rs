//! HTTP client wrapper with backend-specific configuration

use crate::config::BackendSettings;
use crate::sources::{SourceError, SourceRequest, SourceResponse};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// Thin wrapper over reqwest configured for the backend API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&BackendSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &BackendSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            user_agent: format!("medisearch/{}", crate::VERSION),
        })
    }

    /// Execute a source request
    pub async fn execute(&self, request: SourceRequest) -> Result<SourceResponse, SourceError> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else {
                SourceError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(SourceResponse { status, text })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
