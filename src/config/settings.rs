//! Settings structures

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure, loaded from YAML with env-var overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub scrape: ScrapeSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SERPBAIT_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SERPBAIT_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("SERPBAIT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SERPBAIT_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SERPBAIT_PROVIDER") {
            match val.as_str() {
                "mock" => self.search.provider = ProviderKind::Mock,
                "duckduckgo" => self.search.provider = ProviderKind::DuckDuckGo,
                other => tracing::warn!(provider = other, "unknown provider, keeping configured"),
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name reported by /health
    pub instance_name: String,
    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "SerpBait".to_string(),
            enable_metrics: true,
        }
    }
}

/// Which search provider backs the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Mock,
    DuckDuckGo,
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Provider variant to use
    pub provider: ProviderKind,
    /// Cap on base results from the live provider
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Mock,
            max_results: 8,
        }
    }
}

/// Metadata scraping settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeSettings {
    /// Per-request timeout in seconds
    pub request_timeout: f64,
    /// Cache TTL for successful scrapes, in seconds
    pub cache_ttl: u64,
    /// Maximum cached pages
    pub cache_capacity: u64,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            cache_ttl: 300,
            cache_capacity: 1000,
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Outbound request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Connection pool size per host
    pub pool_maxsize: usize,
    /// Optional proxy URL for all outbound traffic
    pub proxy: Option<String>,
    /// Verify TLS certificates
    pub verify_ssl: bool,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 10,
            proxy: None,
            verify_ssl: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.search.provider, ProviderKind::Mock);
        assert_eq!(settings.search.max_results, 8);
        assert_eq!(settings.server.port, 8080);
        assert!(settings.outgoing.verify_ssl);
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
search:
  provider: duckduckgo
  max_results: 5
server:
  port: 9090
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.search.provider, ProviderKind::DuckDuckGo);
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.server.port, 9090);
        // untouched sections keep defaults
        assert_eq!(settings.scrape.cache_ttl, 300);
    }
}
