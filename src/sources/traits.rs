//! Source traits, wire records and request/response types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A doctor directory record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// An article index record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// An article category, only the name is used
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

/// An active clinic record. The backend speaks the HIS field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clinic {
    #[serde(rename = "kd_poli")]
    pub code: String,
    #[serde(rename = "nm_poli")]
    pub name: String,
}

/// Source failure modes
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("http error: {0}")]
    Http(u16),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// HTTP request a source asks the client to make
#[derive(Debug, Clone)]
pub struct SourceRequest {
    /// URL to request
    pub url: String,
    /// Query parameters
    pub params: HashMap<String, String>,
}

impl SourceRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: HashMap::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// HTTP response handed back to the source for parsing
#[derive(Debug)]
pub struct SourceResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl SourceResponse {
    /// Parse the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, SourceError> {
        serde_json::from_str(&self.text).map_err(|e| SourceError::Parse(e.to_string()))
    }

    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Doctor directory lookup
#[async_trait]
pub trait DoctorLookup: Send + Sync {
    /// Server-side search, capped at `limit` records
    async fn search(&self, term: &str, limit: u32) -> Result<Vec<Doctor>, SourceError>;
}

/// Article index lookup
#[async_trait]
pub trait ArticleLookup: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<Article>, SourceError>;
}

/// Active clinic directory lookup. Returns the full active set;
/// term filtering happens client-side during the merge.
#[async_trait]
pub trait ClinicLookup: Send + Sync {
    async fn list_active(&self) -> Result<Vec<Clinic>, SourceError>;
}
