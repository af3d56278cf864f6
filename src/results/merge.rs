//! Pure merge of per-source results into one ordered hit list

use super::types::SearchHit;
use crate::sources::{Article, Clinic, Doctor};
use crate::MIN_QUERY_LEN;

/// Client-side caps applied during the merge
#[derive(Debug, Clone, Copy)]
pub struct MergeLimits {
    /// Maximum clinic hits kept after filtering
    pub clinics: usize,
    /// Maximum article hits kept
    pub articles: usize,
}

impl Default for MergeLimits {
    fn default() -> Self {
        Self {
            clinics: 3,
            articles: 3,
        }
    }
}

/// Merge the three source result sets for a debounced query.
///
/// The output order is fixed: every doctor hit, then at most
/// `limits.clinics` clinic hits, then at most `limits.articles` article
/// hits. Doctors are already capped server-side; clinics arrive as the
/// full active set and are filtered here by case-insensitive substring
/// match on the clinic name, keeping input order. A query shorter than
/// the dispatch threshold yields an empty list.
pub fn merge(
    query: &str,
    doctors: &[Doctor],
    clinics: &[Clinic],
    articles: &[Article],
    limits: MergeLimits,
) -> Vec<SearchHit> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    let mut hits: Vec<SearchHit> = doctors.iter().map(SearchHit::from_doctor).collect();

    hits.extend(
        clinics
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .take(limits.clinics)
            .map(SearchHit::from_clinic),
    );

    hits.extend(
        articles
            .iter()
            .take(limits.articles)
            .map(SearchHit::from_article),
    );

    hits
}
