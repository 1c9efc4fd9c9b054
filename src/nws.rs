//! HTTP client for the National Weather Service API
//!
//! Current conditions come from a two-step lookup: the points endpoint
//! resolves a coordinate pair to its grid-specific forecast URL, and that
//! URL yields the ordered forecast periods. Both requests carry the
//! identifying User-Agent header the service requires.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::error::SyncError;
use crate::models::Location;

pub use self::response::ForecastPeriod;

/// Client for the upstream weather API
pub struct NwsClient {
    /// HTTP client, built once with timeout and identifying header
    http: reqwest::Client,
    /// Base URL of the points endpoint host
    base_url: String,
}

impl NwsClient {
    /// Create a new upstream client from configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent())
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current (first) forecast period for a location
    ///
    /// Any transport failure, non-success status, or missing field along the
    /// two-step lookup is reported as a [`SyncError`] for the caller to
    /// handle at the per-location boundary.
    pub async fn current_period(&self, location: &Location) -> Result<ForecastPeriod, SyncError> {
        let points_url = self.points_url(location);
        debug!("Resolving grid point: {}", points_url);
        let points: response::Points = self.get_json(&points_url).await?;

        let forecast_url = points.properties.forecast;
        debug!("Fetching forecast: {}", forecast_url);
        let forecast: response::Forecast = self.get_json(&forecast_url).await?;

        forecast
            .properties
            .periods
            .into_iter()
            .next()
            .ok_or_else(|| SyncError::data_shape("forecast contained no periods"))
    }

    fn points_url(&self, location: &Location) -> String {
        format!(
            "{}/points/{},{}",
            self.base_url, location.latitude, location.longitude
        )
    }

    /// GET a URL and decode its JSON body
    ///
    /// Status is checked before decoding so a non-success answer surfaces as
    /// [`SyncError::UpstreamStatus`] rather than a decode failure.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SyncError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::upstream_status(status, url));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Upstream response shapes, reduced to the fields consulted here
mod response {
    use serde::{Deserialize, Serialize};

    /// Points-lookup response carrying the grid forecast URL
    #[derive(Debug, Deserialize)]
    pub struct Points {
        pub properties: PointsProperties,
    }

    #[derive(Debug, Deserialize)]
    pub struct PointsProperties {
        pub forecast: String,
    }

    /// Forecast response carrying the ordered periods
    #[derive(Debug, Deserialize)]
    pub struct Forecast {
        pub properties: ForecastProperties,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastProperties {
        pub periods: Vec<ForecastPeriod>,
    }

    /// One time-bucketed outlook ("Tonight", "Monday", ...), most current first
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct ForecastPeriod {
        pub name: String,
        pub temperature: i32,
        #[serde(rename = "temperatureUnit")]
        pub temperature_unit: String,
        #[serde(rename = "shortForecast")]
        pub short_forecast: String,
    }
}
