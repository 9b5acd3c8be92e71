//! Metrics collection
//!
//! Counters for simulations and scrapes. Handles live in application state
//! and are passed in explicitly; there is no process-global collector.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Metrics collector
pub struct Metrics {
    /// Total simulation count
    total_simulations: AtomicU64,
    /// Simulations that carried an injected result
    injected_simulations: AtomicU64,
    /// Provider search latencies (rolling window, ms)
    provider_latencies: RwLock<HashMap<String, Vec<u64>>>,
    /// Provider error counts
    provider_errors: RwLock<HashMap<String, u64>>,
    /// Total scrape count
    total_scrapes: AtomicU64,
    /// Scrapes that returned the error shape
    scrape_errors: AtomicU64,
    /// Process start time
    started_at: DateTime<Utc>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            total_simulations: AtomicU64::new(0),
            injected_simulations: AtomicU64::new(0),
            provider_latencies: RwLock::new(HashMap::new()),
            provider_errors: RwLock::new(HashMap::new()),
            total_scrapes: AtomicU64::new(0),
            scrape_errors: AtomicU64::new(0),
            started_at: Utc::now(),
        }
    }

    /// Record one simulation run
    pub fn record_simulation(&self, provider: &str, search_time_ms: u64, injected: bool) {
        self.total_simulations.fetch_add(1, Ordering::Relaxed);
        if injected {
            self.injected_simulations.fetch_add(1, Ordering::Relaxed);
        }

        let mut latencies = self.provider_latencies.write().unwrap();
        let entry = latencies.entry(provider.to_string()).or_default();

        // Keep last 100 latencies
        if entry.len() >= 100 {
            entry.remove(0);
        }
        entry.push(search_time_ms);
    }

    /// Record a provider failure
    pub fn record_provider_error(&self, provider: &str) {
        let mut errors = self.provider_errors.write().unwrap();
        *errors.entry(provider.to_string()).or_insert(0) += 1;
    }

    /// Record one scrape
    pub fn record_scrape(&self, success: bool) {
        self.total_scrapes.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.scrape_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn total_simulations(&self) -> u64 {
        self.total_simulations.load(Ordering::Relaxed)
    }

    pub fn injected_simulations(&self) -> u64 {
        self.injected_simulations.load(Ordering::Relaxed)
    }

    pub fn total_scrapes(&self) -> u64 {
        self.total_scrapes.load(Ordering::Relaxed)
    }

    pub fn scrape_errors(&self) -> u64 {
        self.scrape_errors.load(Ordering::Relaxed)
    }

    /// Average provider latency in ms over the rolling window
    pub fn avg_latency(&self, provider: &str) -> Option<u64> {
        let latencies = self.provider_latencies.read().unwrap();
        latencies.get(provider).and_then(|l| {
            if l.is_empty() {
                None
            } else {
                Some(l.iter().sum::<u64>() / l.len() as u64)
            }
        })
    }

    /// Errors recorded for a provider
    pub fn provider_errors(&self, provider: &str) -> u64 {
        *self
            .provider_errors
            .read()
            .unwrap()
            .get(provider)
            .unwrap_or(&0)
    }

    /// Seconds since the collector was created
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = Metrics::new();

        metrics.record_simulation("mock", 42, true);
        metrics.record_simulation("mock", 44, false);
        metrics.record_provider_error("duckduckgo");
        metrics.record_scrape(true);
        metrics.record_scrape(false);

        assert_eq!(metrics.total_simulations(), 2);
        assert_eq!(metrics.injected_simulations(), 1);
        assert_eq!(metrics.avg_latency("mock"), Some(43));
        assert_eq!(metrics.provider_errors("duckduckgo"), 1);
        assert_eq!(metrics.total_scrapes(), 2);
        assert_eq!(metrics.scrape_errors(), 1);
        assert!(metrics.uptime_seconds() >= 0);
    }
}
