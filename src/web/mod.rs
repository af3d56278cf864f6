//! HTTP surface: a JSON search endpoint and a health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
