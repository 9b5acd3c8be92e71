//! Search provider module
//!
//! One `SearchProvider` interface with mock and live variants, selected by
//! explicit configuration.

mod traits;

pub mod duckduckgo;
pub mod mock;

pub use duckduckgo::DuckDuckGoProvider;
pub use mock::MockProvider;
pub use traits::*;

use crate::config::{ProviderKind, Settings};
use crate::network::HttpClient;
use std::sync::Arc;

/// Build the configured provider
pub fn from_settings(settings: &Settings, client: HttpClient) -> Arc<dyn SearchProvider> {
    match settings.search.provider {
        ProviderKind::Mock => Arc::new(MockProvider::new()),
        ProviderKind::DuckDuckGo => Arc::new(DuckDuckGoProvider::new(
            client,
            settings.search.max_results,
        )),
    }
}
