//! Settings structures for medisearch configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (MEDISEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MEDISEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("MEDISEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MEDISEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("MEDISEARCH_BACKEND_URL") {
            self.backend.base_url = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in responses
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Medisearch".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8787,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Upstream backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Base URL of the hospital backend API
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Connection pool max idle per host
    pub pool_maxsize: usize,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            request_timeout: 5.0,
            pool_maxsize: 20,
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Debounce quiet period in milliseconds
    pub debounce_ms: u64,
    /// Server-side doctor result limit
    pub doctor_limit: u32,
    /// Client-side clinic hit cap
    pub clinic_limit: usize,
    /// Client-side article hit cap
    pub article_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: crate::DEBOUNCE_MS,
            doctor_limit: 5,
            clinic_limit: 3,
            article_limit: 3,
        }
    }
}
