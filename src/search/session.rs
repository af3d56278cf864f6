//! Reactive search session: debounced input, tagged dispatch, and
//! stale-response discard
//!
//! A session is the interactive counterpart to
//! [`Aggregator::execute`](crate::search::Aggregator::execute): it
//! accepts every keystroke, advances the effective query through the
//! debouncer, and keeps a published [`SearchState`] current as the three
//! sources complete in any order. Every dispatched lookup is tagged with
//! the debounced query it was issued for; a completion whose tag no
//! longer matches the current debounced query is discarded, never
//! merged. Last debounced query wins.

use super::debounce::Debouncer;
use crate::config::SearchSettings;
use crate::results::{merge, MergeLimits, SearchHit};
use crate::sources::{Article, ArticleLookup, Clinic, ClinicLookup, Doctor, DoctorLookup, SourceError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

/// Published snapshot of a session
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Merged, ordered, capped hits for the current debounced query
    pub results: Vec<SearchHit>,
    /// Query the last dispatched lookups were issued for
    pub debounced_query: String,
    pub doctors_loading: bool,
    pub clinics_loading: bool,
    pub articles_loading: bool,
    /// True when at least one source for the current query errored
    pub has_error: bool,
}

impl SearchState {
    /// True while any of the three lookups is in flight. A query below
    /// the dispatch threshold never sets this: disabled is not loading.
    pub fn is_loading(&self) -> bool {
        self.doctors_loading || self.clinics_loading || self.articles_loading
    }
}

enum Completion {
    Doctors(Result<Vec<Doctor>, SourceError>),
    Clinics(Result<Vec<Clinic>, SourceError>),
    Articles(Result<Vec<Article>, SourceError>),
}

struct Tagged {
    query: String,
    completion: Completion,
}

/// Per-source result slots owned by the session task
#[derive(Default)]
struct Slots {
    query: String,
    doctors: Vec<Doctor>,
    clinics: Vec<Clinic>,
    articles: Vec<Article>,
    doctors_loading: bool,
    clinics_loading: bool,
    articles_loading: bool,
    has_error: bool,
}

impl Slots {
    fn reset_for(&mut self, query: String, loading: bool) {
        self.query = query;
        self.doctors.clear();
        self.clinics.clear();
        self.articles.clear();
        self.doctors_loading = loading;
        self.clinics_loading = loading;
        self.articles_loading = loading;
        self.has_error = false;
    }

    fn snapshot(&self, limits: MergeLimits) -> SearchState {
        SearchState {
            results: merge(&self.query, &self.doctors, &self.clinics, &self.articles, limits),
            debounced_query: self.query.clone(),
            doctors_loading: self.doctors_loading,
            clinics_loading: self.clinics_loading,
            articles_loading: self.articles_loading,
            has_error: self.has_error,
        }
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Doctors(result) => {
                self.doctors_loading = false;
                match result {
                    Ok(records) => self.doctors = records,
                    Err(e) => {
                        warn!("doctor source degraded: {}", e);
                        self.has_error = true;
                    }
                }
            }
            Completion::Clinics(result) => {
                self.clinics_loading = false;
                match result {
                    Ok(records) => self.clinics = records,
                    Err(e) => {
                        warn!("clinic source degraded: {}", e);
                        self.has_error = true;
                    }
                }
            }
            Completion::Articles(result) => {
                self.articles_loading = false;
                match result {
                    Ok(records) => self.articles = records,
                    Err(e) => {
                        warn!("article source degraded: {}", e);
                        self.has_error = true;
                    }
                }
            }
        }
    }
}

/// Long-lived predictive search session
pub struct SearchSession {
    input: mpsc::UnboundedSender<String>,
    state: watch::Receiver<SearchState>,
}

impl SearchSession {
    /// Spawn a session over the given sources. The session ends when
    /// the handle is dropped.
    pub fn spawn(
        doctors: Arc<dyn DoctorLookup>,
        articles: Arc<dyn ArticleLookup>,
        clinics: Arc<dyn ClinicLookup>,
        settings: SearchSettings,
    ) -> Self {
        let (input, mut debounced) =
            Debouncer::new(Duration::from_millis(settings.debounce_ms)).spawn();
        let (state_tx, state_rx) = watch::channel(SearchState::default());
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Tagged>();

        let limits = MergeLimits {
            clinics: settings.clinic_limit,
            articles: settings.article_limit,
        };
        let doctor_limit = settings.doctor_limit;

        tokio::spawn(async move {
            let mut slots = Slots::default();

            loop {
                tokio::select! {
                    maybe = debounced.recv() => match maybe {
                        Some(query) => {
                            let dispatch = query.chars().count() >= crate::MIN_QUERY_LEN;
                            slots.reset_for(query.clone(), dispatch);

                            if dispatch {
                                debug!("dispatching lookups for '{}'", query);
                                Self::dispatch(
                                    &query,
                                    doctor_limit,
                                    &doctors,
                                    &articles,
                                    &clinics,
                                    &done_tx,
                                );
                            }
                            let _ = state_tx.send(slots.snapshot(limits));
                        }
                        None => break,
                    },
                    Some(tagged) = done_rx.recv() => {
                        if tagged.query != slots.query {
                            debug!("discarding stale completion for '{}'", tagged.query);
                            continue;
                        }
                        slots.apply(tagged.completion);
                        let _ = state_tx.send(slots.snapshot(limits));
                    }
                }
            }
        });

        Self {
            input,
            state: state_rx,
        }
    }

    fn dispatch(
        query: &str,
        doctor_limit: u32,
        doctors: &Arc<dyn DoctorLookup>,
        articles: &Arc<dyn ArticleLookup>,
        clinics: &Arc<dyn ClinicLookup>,
        done_tx: &mpsc::UnboundedSender<Tagged>,
    ) {
        let source = doctors.clone();
        let tx = done_tx.clone();
        let term = query.to_string();
        tokio::spawn(async move {
            let result = source.search(&term, doctor_limit).await;
            let _ = tx.send(Tagged {
                query: term,
                completion: Completion::Doctors(result),
            });
        });

        let source = articles.clone();
        let tx = done_tx.clone();
        let term = query.to_string();
        tokio::spawn(async move {
            let result = source.search(&term).await;
            let _ = tx.send(Tagged {
                query: term,
                completion: Completion::Articles(result),
            });
        });

        let source = clinics.clone();
        let tx = done_tx.clone();
        let term = query.to_string();
        tokio::spawn(async move {
            let result = source.list_active().await;
            let _ = tx.send(Tagged {
                query: term,
                completion: Completion::Clinics(result),
            });
        });
    }

    /// Feed a raw query value (every keystroke)
    pub fn update_query(&self, raw: impl Into<String>) {
        let _ = self.input.send(raw.into());
    }

    /// Current state snapshot
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Watch channel for state changes
    pub fn watch(&self) -> watch::Receiver<SearchState> {
        self.state.clone()
    }
}
