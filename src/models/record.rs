//! Output record for one location's current conditions

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::Location;
use crate::nws::ForecastPeriod;

/// Capture timestamps use second precision with an explicit `Z` suffix
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One synced location as it appears in the response array
///
/// Wire names are PascalCase, matching what downstream consumers of the
/// endpoint expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherRecord {
    /// Display name of the location
    pub title: String,
    /// Literal `"lat, lon"` pair from the configured coordinate strings
    pub latitude_longitude: String,
    /// Forecast period name, e.g. "Tonight"
    pub name: String,
    /// Temperature in whole degrees
    pub temperature: i32,
    /// Temperature unit, e.g. "F"
    pub temperature_unit: String,
    /// Short human-readable forecast text
    pub short_forecast: String,
    /// UTC capture time, recorded when the record is assembled
    pub date_time: String,
}

impl WeatherRecord {
    /// Assemble a record from a location and its current forecast period,
    /// stamping the capture time
    #[must_use]
    pub fn assemble(location: &Location, period: ForecastPeriod) -> Self {
        Self {
            title: location.name.to_string(),
            latitude_longitude: location.coordinate_pair(),
            name: period.name,
            temperature: period.temperature,
            temperature_unit: period.temperature_unit,
            short_forecast: period.short_forecast,
            date_time: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde_json::json;

    use super::*;
    use crate::models::LOCATIONS;

    fn sample_period() -> ForecastPeriod {
        ForecastPeriod {
            name: "Tonight".to_string(),
            temperature: 55,
            temperature_unit: "F".to_string(),
            short_forecast: "Clear".to_string(),
        }
    }

    #[test]
    fn test_assemble_combines_location_and_period() {
        let location = Location {
            name: "New York, NY",
            latitude: "40.7128",
            longitude: "-74.0060",
        };

        let record = WeatherRecord::assemble(&location, sample_period());
        assert_eq!(record.title, "New York, NY");
        assert_eq!(record.latitude_longitude, "40.7128, -74.0060");
        assert_eq!(record.name, "Tonight");
        assert_eq!(record.temperature, 55);
        assert_eq!(record.temperature_unit, "F");
        assert_eq!(record.short_forecast, "Clear");
    }

    #[test]
    fn test_capture_time_is_current_and_well_formed() {
        let location = LOCATIONS[0];
        let before = Utc::now();
        let record = WeatherRecord::assemble(&location, sample_period());

        let parsed = NaiveDateTime::parse_from_str(&record.date_time, TIMESTAMP_FORMAT)
            .expect("capture time should match the timestamp format")
            .and_utc();
        assert!(parsed >= before - chrono::Duration::seconds(1));
        assert!(parsed <= Utc::now());
    }

    #[test]
    fn test_wire_names_are_pascal_case() {
        let location = LOCATIONS[0];
        let record = WeatherRecord::assemble(&location, sample_period());

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "Title",
            "LatitudeLongitude",
            "Name",
            "Temperature",
            "TemperatureUnit",
            "ShortForecast",
            "DateTime",
        ] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(object.len(), 7);
        assert_eq!(value["Title"], json!("New York, NY"));
        assert_eq!(value["Temperature"], json!(55));
    }
}
