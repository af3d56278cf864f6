//! Unified search hit model and the pure merge step

mod merge;
mod types;

pub use merge::{merge, MergeLimits};
pub use types::{HitKind, SearchHit};
