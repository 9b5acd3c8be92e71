//! Fixed-list provider for offline simulation

use super::traits::{ProviderOutcome, ProviderError, SearchProvider};
use crate::simulate::SearchResult;
use async_trait::async_trait;

/// Placeholder search time reported for every mock call, in milliseconds
pub const MOCK_SEARCH_TIME_MS: u64 = 42;

/// Relevance scores for the three canned entries, descending
const MOCK_SCORES: [f64; 3] = [9.2, 8.7, 8.1];

/// Provider that returns a canned three-entry results page. The entries are
/// derived from the query so output reads like a real page, but ordering,
/// ranks and scores are fixed.
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    fn base_results(&self, query: &str) -> Vec<SearchResult> {
        let slug = slugify(query);

        vec![
            SearchResult::organic(
                format!("{} - Official Site", query),
                format!("https://www.{}.com/", slug),
                format!(
                    "The official destination for {}. Browse the full catalog and latest updates.",
                    query
                ),
                1,
                MOCK_SCORES[0],
            ),
            SearchResult::organic(
                format!("{} - Wikipedia", query),
                format!("https://en.wikipedia.org/wiki/{}", slug),
                format!("Overview, history and references for {}.", query),
                2,
                MOCK_SCORES[1],
            ),
            SearchResult::organic(
                format!("Best {} of 2024: Reviews & Buying Guide", query),
                format!(
                    "https://www.reviewsite.com/search?q={}",
                    urlencoding::encode(query)
                ),
                format!(
                    "We compared the top options for {} so you don't have to.",
                    query
                ),
                3,
                MOCK_SCORES[2],
            ),
        ]
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &str) -> Result<ProviderOutcome, ProviderError> {
        Ok(ProviderOutcome::new(
            self.base_results(query),
            MOCK_SEARCH_TIME_MS,
        ))
    }
}

/// Lowercase, hyphen-separated token for building plausible mock URLs
fn slugify(query: &str) -> String {
    query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
