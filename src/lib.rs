//! SerpBait: a search-result injection simulator
//!
//! Builds an ordered results page for a query — from a canned list or a live
//! search provider — optionally splices in a caller-supplied result at a
//! requested rank, and reports which entry a simulated browsing agent would
//! select. Also scrapes page titles and meta descriptions for building
//! injection candidates from real URLs.

pub mod cache;
pub mod config;
pub mod metrics;
pub mod network;
pub mod providers;
pub mod scrape;
pub mod simulate;
pub mod telemetry;
pub mod web;

pub use config::Settings;
pub use providers::SearchProvider;
pub use scrape::{MetadataScraper, PageMetadata};
pub use simulate::{InjectedResult, ResultSet, SearchResult, SimulationRequest, Simulator};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
