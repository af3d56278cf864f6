//! One-shot search fan-out across the three sources

use crate::config::SearchSettings;
use crate::results::{merge, MergeLimits, SearchHit};
use crate::sources::{ArticleLookup, ClinicLookup, DoctorLookup, SourceError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a single source in an aggregated search
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    /// Not dispatched (query below threshold)
    Idle,
    /// Returned data, possibly empty
    Loaded,
    /// Errored; its slot degraded to empty
    Failed,
}

/// Merged result of one aggregated search
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Query the lookups were dispatched for
    pub query: String,
    /// Merged, ordered, capped hits
    pub hits: Vec<SearchHit>,
    pub doctors: SourceStatus,
    pub clinics: SourceStatus,
    pub articles: SourceStatus,
}

impl SearchOutcome {
    fn idle(query: &str) -> Self {
        Self {
            query: query.to_string(),
            hits: Vec::new(),
            doctors: SourceStatus::Idle,
            clinics: SourceStatus::Idle,
            articles: SourceStatus::Idle,
        }
    }

    /// True when at least one source errored
    pub fn has_error(&self) -> bool {
        [self.doctors, self.clinics, self.articles].contains(&SourceStatus::Failed)
    }
}

/// Aggregator that fans a query out to the three sources concurrently
/// and merges whatever comes back. A failed source degrades to an empty
/// slot; the aggregation itself never fails.
pub struct Aggregator {
    doctors: Arc<dyn DoctorLookup>,
    articles: Arc<dyn ArticleLookup>,
    clinics: Arc<dyn ClinicLookup>,
    doctor_limit: u32,
    limits: MergeLimits,
}

impl Aggregator {
    pub fn new(
        doctors: Arc<dyn DoctorLookup>,
        articles: Arc<dyn ArticleLookup>,
        clinics: Arc<dyn ClinicLookup>,
    ) -> Self {
        Self {
            doctors,
            articles,
            clinics,
            doctor_limit: 5,
            limits: MergeLimits::default(),
        }
    }

    /// Apply configured limits and caps
    pub fn with_search_settings(mut self, settings: &SearchSettings) -> Self {
        self.doctor_limit = settings.doctor_limit;
        self.limits = MergeLimits {
            clinics: settings.clinic_limit,
            articles: settings.article_limit,
        };
        self
    }

    /// Execute one aggregated search. Queries below the length
    /// threshold short-circuit to an empty outcome without touching any
    /// source.
    pub async fn execute(&self, query: &str) -> SearchOutcome {
        if query.chars().count() < crate::MIN_QUERY_LEN {
            debug!("query below threshold, skipping dispatch");
            return SearchOutcome::idle(query);
        }

        info!("dispatching '{}' to doctor, clinic and article sources", query);

        let (doctors, clinics, articles) = futures::join!(
            self.doctors.search(query, self.doctor_limit),
            self.clinics.list_active(),
            self.articles.search(query),
        );

        let (doctors, doctors_status) = slot("doctors", doctors);
        let (clinics, clinics_status) = slot("clinics", clinics);
        let (articles, articles_status) = slot("articles", articles);

        let hits = merge(query, &doctors, &clinics, &articles, self.limits);
        debug!("merged {} hits for '{}'", hits.len(), query);

        SearchOutcome {
            query: query.to_string(),
            hits,
            doctors: doctors_status,
            clinics: clinics_status,
            articles: articles_status,
        }
    }
}

fn slot<T>(name: &str, result: Result<Vec<T>, SourceError>) -> (Vec<T>, SourceStatus) {
    match result {
        Ok(records) => (records, SourceStatus::Loaded),
        Err(e) => {
            warn!("source {} degraded: {}", name, e);
            (Vec::new(), SourceStatus::Failed)
        }
    }
}
