//! Weathersync - aggregated current conditions over the National Weather Service API
//!
//! This library provides the core functionality for the sync endpoint:
//! resolving each configured location to its grid forecast and collecting
//! the results into one ordered response.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod nws;
pub mod sync;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::{AppConfig, ServerConfig, UpstreamConfig};
pub use error::SyncError;
pub use models::{LOCATIONS, Location, WeatherRecord};
pub use nws::{ForecastPeriod, NwsClient};
pub use sync::{SkippedLocation, SyncReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
