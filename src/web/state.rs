//! Application state shared across handlers

use crate::config::{OutgoingSettings, Settings};
use crate::metrics::Metrics;
use crate::network::HttpClient;
use crate::providers;
use crate::scrape::MetadataScraper;
use crate::simulate::Simulator;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Simulation executor over the configured provider
    pub simulator: Arc<Simulator>,
    /// Page metadata scraper
    pub scraper: Arc<MetadataScraper>,
    /// Metrics collector
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Create new application state from settings
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let search_client = HttpClient::with_settings(&settings.outgoing)?;
        let provider = providers::from_settings(&settings, search_client);

        // scrape traffic gets its own timeout budget
        let scrape_outgoing = OutgoingSettings {
            request_timeout: settings.scrape.request_timeout,
            ..settings.outgoing.clone()
        };
        let scrape_client = HttpClient::with_settings(&scrape_outgoing)?;
        let scraper = MetadataScraper::new(scrape_client, &settings.scrape);

        Ok(Self {
            settings: Arc::new(settings),
            simulator: Arc::new(Simulator::new(provider)),
            scraper: Arc::new(scraper),
            metrics: Arc::new(Metrics::new()),
        })
    }

    /// Instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
