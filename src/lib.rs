//! Medisearch: predictive multi-source search for a hospital portal
//!
//! Debounces a raw user query, fans it out to the backend's doctor,
//! article and clinic directories, and merges the results into one
//! ordered, capped list of typed search hits.

pub mod config;
pub mod network;
pub mod results;
pub mod search;
pub mod sources;
pub mod web;

pub use config::Settings;
pub use results::{HitKind, SearchHit};
pub use search::{Aggregator, SearchSession, SearchState};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quiet period for the query debouncer in milliseconds
pub const DEBOUNCE_MS: u64 = 300;

/// Minimum debounced query length before any source is dispatched
pub const MIN_QUERY_LEN: usize = 2;
