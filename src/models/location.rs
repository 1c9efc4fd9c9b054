//! Reported locations and their coordinates

/// A place the sync pass reports on
///
/// Coordinates are kept as the verbatim decimal-degree strings that go into
/// upstream URLs and the output payload; they are never parsed or reformatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Display name (city, state)
    pub name: &'static str,
    /// Latitude in decimal degrees
    pub latitude: &'static str,
    /// Longitude in decimal degrees
    pub longitude: &'static str,
}

/// The fixed set of reported locations, in output order
pub const LOCATIONS: [Location; 5] = [
    Location {
        name: "New York, NY",
        latitude: "40.7128",
        longitude: "-74.0060",
    },
    Location {
        name: "Los Angeles, CA",
        latitude: "34.0522",
        longitude: "-118.2437",
    },
    Location {
        name: "Chicago, IL",
        latitude: "41.8781",
        longitude: "-87.6298",
    },
    Location {
        name: "Houston, TX",
        latitude: "29.7604",
        longitude: "-95.3698",
    },
    Location {
        name: "Phoenix, AZ",
        latitude: "33.4484",
        longitude: "-112.0740",
    },
];

impl Location {
    /// Format location as the `"lat, lon"` pair used in the output payload
    #[must_use]
    pub fn coordinate_pair(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }
}
