//! Sequential sync pass over the configured locations

use tracing::{error, info};

use crate::error::SyncError;
use crate::models::{Location, WeatherRecord};
use crate::nws::NwsClient;

/// Outcome of one sync pass
#[derive(Debug)]
pub struct SyncReport {
    /// Records for the locations that resolved, in configured order
    pub records: Vec<WeatherRecord>,
    /// Locations left out after a failed lookup, with the reason
    pub skipped: Vec<SkippedLocation>,
}

/// A location omitted from the response and the failure that caused it
#[derive(Debug)]
pub struct SkippedLocation {
    pub name: &'static str,
    pub error: SyncError,
}

/// Fetch current conditions for every location, strictly in list order
///
/// Locations are queried one at a time; a failed lookup skips that location
/// only and the pass always runs to the end of the list. No retries, no
/// placeholder entries.
pub async fn run(client: &NwsClient, locations: &[Location]) -> SyncReport {
    let mut records = Vec::with_capacity(locations.len());
    let mut skipped = Vec::new();

    for location in locations {
        match client.current_period(location).await {
            Ok(period) => records.push(WeatherRecord::assemble(location, period)),
            Err(err) => {
                error!("Could not fetch weather for {}: {}", location.name, err);
                skipped.push(SkippedLocation {
                    name: location.name,
                    error: err,
                });
            }
        }
    }

    info!(
        "Sync pass finished: {} fetched, {} skipped",
        records.len(),
        skipped.len()
    );

    SyncReport { records, skipped }
}
