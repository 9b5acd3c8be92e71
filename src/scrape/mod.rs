//! URL metadata scraping
//!
//! Fetches a page and extracts its title and meta description. Every failure
//! is converted into a structured error result, never propagated.

mod metadata;

pub use metadata::{MetadataScraper, PageMetadata, ScrapeStatus};
