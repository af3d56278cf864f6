//! Search hit type definitions

use crate::sources::{Article, Clinic, Doctor};
use serde::{Deserialize, Serialize};

/// Originating source of a search hit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Doctor,
    Service,
    Article,
}

/// A single unified search hit shown to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    /// Identifier, unique within its kind but not globally
    pub id: String,
    /// Originating source kind
    pub kind: HitKind,
    /// Display title
    pub title: String,
    /// Secondary line (specialization, category, or a fixed label)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Thumbnail URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Canonical link to the full resource
    pub url: String,
}

impl SearchHit {
    /// Map a doctor record to a hit. The link prefers the slug and
    /// falls back to the raw id.
    pub fn from_doctor(doctor: &Doctor) -> Self {
        let key = doctor.slug.as_deref().unwrap_or(&doctor.id);
        Self {
            id: doctor.id.clone(),
            kind: HitKind::Doctor,
            title: doctor.name.clone(),
            subtitle: doctor.specialization.clone(),
            image: doctor.image_url.clone(),
            url: format!("/doctor/{}", key),
        }
    }

    /// Map an active clinic to a hit
    pub fn from_clinic(clinic: &Clinic) -> Self {
        Self {
            id: clinic.code.clone(),
            kind: HitKind::Service,
            title: clinic.name.clone(),
            subtitle: Some("Poliklinik".to_string()),
            image: None,
            url: format!("/layanan/poli/{}", clinic.code),
        }
    }

    /// Map an article to a hit. The first category names the subtitle.
    pub fn from_article(article: &Article) -> Self {
        let subtitle = article
            .categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Artikel".to_string());
        Self {
            id: article.id.clone(),
            kind: HitKind::Article,
            title: article.title.clone(),
            subtitle: Some(subtitle),
            image: article.image.clone(),
            url: format!("/artikel/{}", article.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::Category;

    #[test]
    fn test_doctor_url_prefers_slug() {
        let doctor = Doctor {
            id: "d1".to_string(),
            name: "Dr. Budi".to_string(),
            specialization: Some("Jantung".to_string()),
            image_url: None,
            slug: Some("dr-budi".to_string()),
        };
        let hit = SearchHit::from_doctor(&doctor);
        assert_eq!(hit.url, "/doctor/dr-budi");
        assert_eq!(hit.kind, HitKind::Doctor);
        assert_eq!(hit.subtitle.as_deref(), Some("Jantung"));
    }

    #[test]
    fn test_doctor_url_falls_back_to_id() {
        let doctor = Doctor {
            id: "d2".to_string(),
            name: "Dr. Sari".to_string(),
            specialization: None,
            image_url: None,
            slug: None,
        };
        let hit = SearchHit::from_doctor(&doctor);
        assert_eq!(hit.url, "/doctor/d2");
        assert!(hit.subtitle.is_none());
    }

    #[test]
    fn test_clinic_hit_shape() {
        let clinic = Clinic {
            code: "01".to_string(),
            name: "Poli Umum".to_string(),
        };
        let hit = SearchHit::from_clinic(&clinic);
        assert_eq!(hit.kind, HitKind::Service);
        assert_eq!(hit.subtitle.as_deref(), Some("Poliklinik"));
        assert_eq!(hit.url, "/layanan/poli/01");
    }

    #[test]
    fn test_article_subtitle_defaults() {
        let article = Article {
            id: "a1".to_string(),
            title: "Hidup Sehat".to_string(),
            slug: "hidup-sehat".to_string(),
            image: None,
            categories: vec![],
        };
        let hit = SearchHit::from_article(&article);
        assert_eq!(hit.subtitle.as_deref(), Some("Artikel"));
        assert_eq!(hit.url, "/artikel/hidup-sehat");

        let article = Article {
            categories: vec![Category {
                name: "Gizi".to_string(),
            }],
            ..article
        };
        let hit = SearchHit::from_article(&article);
        assert_eq!(hit.subtitle.as_deref(), Some("Gizi"));
    }
}
