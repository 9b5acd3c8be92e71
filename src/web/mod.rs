//! HTTP/JSON boundary
//!
//! Exposes the simulation and scrape operations to the hosting
//! agent-orchestration layer.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
