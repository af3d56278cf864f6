//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::Aggregator;
use crate::sources::{BackendArticles, BackendClinics, BackendDoctors};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search aggregator over the backend sources
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Create new application state, wiring the three backend sources
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let base = settings.backend.base_url.trim_end_matches('/').to_string();

        let aggregator = Aggregator::new(
            Arc::new(BackendDoctors::new(client.clone(), base.clone())),
            Arc::new(BackendArticles::new(client.clone(), base.clone())),
            Arc::new(BackendClinics::new(client, base)),
        )
        .with_search_settings(&settings.search);

        Self {
            settings: Arc::new(settings),
            aggregator: Arc::new(aggregator),
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
