//! Lookup collaborators for the three backend directories
//!
//! Each source builds its own request against the hospital backend and
//! parses the response into typed records. The lookup traits are the
//! seam the aggregator depends on; tests substitute in-memory mocks.

mod articles;
mod clinics;
mod doctors;
mod traits;

pub use articles::BackendArticles;
pub use clinics::BackendClinics;
pub use doctors::BackendDoctors;
pub use traits::{
    Article, ArticleLookup, Category, Clinic, ClinicLookup, Doctor, DoctorLookup, SourceError,
    SourceRequest, SourceResponse,
};
