//! Result set simulation
//!
//! Builds an ordered result sequence for a query, optionally splices in a
//! caller-supplied record, and reports which entry a browsing agent selects.

mod models;
mod simulator;

pub use models::*;
pub use simulator::Simulator;
