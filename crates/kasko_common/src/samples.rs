//! Bundled sample trips.
//!
//! Two pre-recorded trips from the telemetry simulator, one clean and one
//! eventful. They are the only trips the client can send.

use crate::telemetry::{TelemetryRecord, Trip};

/// Selector for the two bundled demo trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTrip {
    /// Steady mid-town cruise, no harsh events.
    Safe,
    /// Harsh braking, a hard turn and a speeding burst.
    Risky,
}

impl SampleTrip {
    pub const ALL: [SampleTrip; 2] = [SampleTrip::Safe, SampleTrip::Risky];

    /// Canonical dataset key.
    pub fn key(&self) -> &'static str {
        match self {
            SampleTrip::Safe => "safe_trip",
            SampleTrip::Risky => "risky_trip",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            SampleTrip::Safe => "steady city cruising, no harsh events",
            SampleTrip::Risky => "harsh braking, hard turning and a speeding burst",
        }
    }

    /// Look up a trip by dataset key. The short forms `safe` and `risky`
    /// are accepted as well.
    pub fn from_key(key: &str) -> Option<SampleTrip> {
        match key {
            "safe" | "safe_trip" => Some(SampleTrip::Safe),
            "risky" | "risky_trip" => Some(SampleTrip::Risky),
            _ => None,
        }
    }

    /// Materialize the fixture records for this trip.
    pub fn trip(&self) -> Trip {
        match self {
            SampleTrip::Safe => vec![
                record("2023-10-27T10:00:00", 40.7128, -74.0060, 45.0, 0.1, -0.2, 9.8),
                record("2023-10-27T10:00:01", 40.7129, -74.0061, 46.0, 0.2, 0.1, 9.8),
                record("2023-10-27T10:00:02", 40.7130, -74.0062, 44.0, -0.1, -0.1, 9.8),
            ],
            SampleTrip::Risky => vec![
                record("2023-10-27T11:00:00", 34.0522, -118.2437, 85.0, 1.5, 0.5, 9.8),
                // harsh braking event
                record("2023-10-27T11:00:01", 34.0523, -118.2438, 50.0, -3.0, 0.2, 9.8),
                // harsh turning event
                record("2023-10-27T11:00:02", 34.0524, -118.2439, 55.0, 0.5, 2.5, 9.8),
                // speeding
                record("2023-10-27T11:00:03", 34.0525, -118.2440, 95.0, 1.0, 0.1, 9.8),
            ],
        }
    }
}

impl std::fmt::Display for SampleTrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn record(
    timestamp: &str,
    latitude: f64,
    longitude: f64,
    speed_kmh: f64,
    accelerometer_x: f64,
    accelerometer_y: f64,
    accelerometer_z: f64,
) -> TelemetryRecord {
    TelemetryRecord {
        timestamp: timestamp.to_string(),
        latitude,
        longitude,
        speed_kmh,
        accelerometer_x,
        accelerometer_y,
        accelerometer_z,
    }
}
