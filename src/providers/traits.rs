//! Provider trait and shared types

use crate::simulate::SearchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base results returned by one provider call
#[derive(Debug, Clone, Default)]
pub struct ProviderOutcome {
    /// Ordered results with provider-assigned ranks
    pub results: Vec<SearchResult>,
    /// Duration of the search call in milliseconds. Mock mode reports a
    /// fixed placeholder, live mode the measured wall clock.
    pub search_time_ms: u64,
}

impl ProviderOutcome {
    pub fn new(results: Vec<SearchResult>, search_time_ms: u64) -> Self {
        Self {
            results,
            search_time_ms,
        }
    }
}

/// Provider failure kinds
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    #[error("failed to parse provider response")]
    Parse,
}

/// A source of base result sequences. Variants are selected by explicit
/// configuration, never by which module happens to be linked in.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name as it appears in configuration and metrics
    fn name(&self) -> &str;

    /// Produce the ordered base sequence for a query, preserving the
    /// provider's own ordering and rank assignment.
    async fn search(&self, query: &str) -> Result<ProviderOutcome, ProviderError>;
}
