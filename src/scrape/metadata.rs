//! Page metadata extraction

use crate::cache::MetadataCache;
use crate::config::ScrapeSettings;
use crate::network::HttpClient;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());

/// Outcome kind of a scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Success,
    Error,
}

/// Scraped page metadata. On success `title` and `metadescription` are
/// present (possibly empty strings); on error only `error_message` is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetadata {
    pub status: ScrapeStatus,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadescription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl PageMetadata {
    pub fn success(
        url: impl Into<String>,
        title: impl Into<String>,
        metadescription: impl Into<String>,
    ) -> Self {
        Self {
            status: ScrapeStatus::Success,
            url: url.into(),
            title: Some(title.into()),
            metadescription: Some(metadescription.into()),
            error_message: None,
        }
    }

    pub fn error(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: ScrapeStatus::Error,
            url: url.into(),
            title: None,
            metadescription: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ScrapeStatus::Success
    }
}

/// Fetches pages and extracts title + meta description
pub struct MetadataScraper {
    client: HttpClient,
    cache: MetadataCache,
}

impl MetadataScraper {
    pub fn new(client: HttpClient, settings: &ScrapeSettings) -> Self {
        Self {
            client,
            cache: MetadataCache::new(settings.cache_ttl, settings.cache_capacity),
        }
    }

    /// Scrape a URL. Always returns a well-formed `PageMetadata`; invalid
    /// URLs, network failures and non-2xx statuses all become the error
    /// shape with a non-empty message.
    pub async fn scrape(&self, url: &str) -> PageMetadata {
        if let Err(e) = Url::parse(url) {
            return PageMetadata::error(url, format!("invalid URL: {}", e));
        }

        if let Some(cached) = self.cache.get(url).await {
            debug!(url, "metadata cache hit");
            return cached;
        }

        let response = match self.client.get(url).await {
            Ok(r) => r,
            Err(e) => {
                warn!(url, error = %e, "scrape request failed");
                return PageMetadata::error(url, e.to_string());
            }
        };

        if !response.is_success() {
            return PageMetadata::error(url, format!("HTTP error: {}", response.status));
        }

        let metadata = Self::extract(url, &response.text);
        self.cache.set(url.to_string(), metadata.clone()).await;
        metadata
    }

    /// Number of cached pages
    pub fn cached_pages(&self) -> u64 {
        self.cache.size()
    }

    fn extract(url: &str, html: &str) -> PageMetadata {
        let document = Html::parse_document(html);

        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let metadescription = document
            .select(&META_DESCRIPTION_SELECTOR)
            .next()
            .and_then(|m| m.value().attr("content"))
            .unwrap_or_default()
            .to_string();

        PageMetadata::success(url, title, metadescription)
    }
}
