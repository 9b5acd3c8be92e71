//! Caching
//!
//! Keeps successful metadata scrapes around so repeated probes of the same
//! page skip the network round trip.

use crate::scrape::PageMetadata;
use moka::future::Cache;
use std::time::Duration;

/// Cache for scraped page metadata, keyed by URL
pub struct MetadataCache {
    cache: Cache<String, PageMetadata>,
}

impl MetadataCache {
    /// Create a new cache with the given TTL and capacity
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { cache }
    }

    /// Get a cached scrape
    pub async fn get(&self, url: &str) -> Option<PageMetadata> {
        self.cache.get(url).await
    }

    /// Store a scrape
    pub async fn set(&self, url: String, metadata: PageMetadata) {
        self.cache.insert(url, metadata).await;
    }

    /// Number of cached entries
    pub fn size(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for MetadataCache {
    fn default() -> Self {
        Self::new(300, 1000)
    }
}
