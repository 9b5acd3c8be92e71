//! Configuration
//!
//! Settings are loaded once by the hosting binary and passed through
//! application state; there is no process-global settings instance.

mod settings;

pub use settings::*;
