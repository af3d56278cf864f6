//! Query debouncing, fan-out and result aggregation

mod aggregator;
mod debounce;
mod session;

pub use aggregator::{Aggregator, SearchOutcome, SourceStatus};
pub use debounce::Debouncer;
pub use session::{SearchSession, SearchState};
