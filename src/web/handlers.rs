//! HTTP request handlers

use super::state::AppState;
use crate::results::SearchHit;
use crate::search::SourceStatus;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw search query
    pub q: Option<String>,
}

/// JSON response for the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub number_of_results: usize,
    pub results: Vec<SearchHit>,
    pub sources: SourcesStatus,
}

#[derive(Debug, Serialize)]
pub struct SourcesStatus {
    pub doctors: SourceStatus,
    pub clinics: SourceStatus,
    pub articles: SourceStatus,
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let outcome = state.aggregator.execute(&query).await;

    Json(SearchResponse {
        query: outcome.query,
        number_of_results: outcome.hits.len(),
        results: outcome.hits,
        sources: SourcesStatus {
            doctors: outcome.doctors,
            clinics: outcome.clinics,
            articles: outcome.articles,
        },
    })
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION,
    }))
}
