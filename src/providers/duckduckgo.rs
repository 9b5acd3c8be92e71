//! Live provider backed by the DuckDuckGo HTML endpoint

use super::traits::{ProviderOutcome, ProviderError, SearchProvider};
use crate::network::HttpClient;
use crate::simulate::SearchResult;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

static RESULT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.result").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a.result__a").unwrap());
static SNIPPET_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.result__snippet").unwrap());

/// Live search provider that scrapes DuckDuckGo's HTML results page.
/// Ordering and rank assignment follow the page exactly.
pub struct DuckDuckGoProvider {
    client: HttpClient,
    html_url: String,
    max_results: usize,
}

impl DuckDuckGoProvider {
    pub fn new(client: HttpClient, max_results: usize) -> Self {
        Self {
            client,
            html_url: "https://html.duckduckgo.com/html/".to_string(),
            max_results,
        }
    }

    /// Point the provider at a different endpoint (tests)
    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = url.into();
        self
    }

    fn parse_results(&self, html: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();
        let mut position = 1i64;

        for element in document.select(&RESULT_SELECTOR) {
            if results.len() >= self.max_results {
                break;
            }

            let title_elem = match element.select(&TITLE_SELECTOR).next() {
                Some(t) => t,
                None => continue,
            };

            let title = title_elem.text().collect::<String>();
            if title.is_empty() {
                continue;
            }

            let url = title_elem
                .value()
                .attr("href")
                .map(|h| h.to_string())
                .unwrap_or_default();

            // Skip internal navigation links
            if url.is_empty() || url.contains("duckduckgo.com") {
                continue;
            }

            let description = element
                .select(&SNIPPET_SELECTOR)
                .next()
                .map(|s| s.text().collect::<String>())
                .unwrap_or_default();

            results.push(SearchResult::organic(
                title,
                url,
                description,
                position,
                position_score(position),
            ));
            position += 1;
        }

        results
    }
}

/// Informational descending score in [0, 10] derived from page position
fn position_score(position: i64) -> f64 {
    ((100 - 3 * (position - 1)).max(0)) as f64 / 10.0
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(&self, query: &str) -> Result<ProviderOutcome, ProviderError> {
        let start = Instant::now();

        let mut form = HashMap::new();
        form.insert("q".to_string(), query.to_string());
        form.insert("b".to_string(), String::new());
        form.insert("kl".to_string(), "us-en".to_string());

        let response = match self.client.post_form(&self.html_url, form).await {
            Ok(r) => r,
            Err(e) => {
                let message = e.to_string();
                return Err(if message.contains("timed out") || message.contains("timeout") {
                    ProviderError::Timeout
                } else {
                    ProviderError::Network(message)
                });
            }
        };

        if !response.is_success() {
            return Err(ProviderError::HttpStatus(response.status));
        }

        let results = self.parse_results(&response.text);
        let elapsed = start.elapsed().as_millis() as u64;

        debug!(
            provider = self.name(),
            count = results.len(),
            elapsed_ms = elapsed,
            "live search completed"
        );

        Ok(ProviderOutcome::new(results, elapsed))
    }
}
