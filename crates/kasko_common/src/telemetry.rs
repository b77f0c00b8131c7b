//! Raw trip telemetry as collectors emit it.

use serde::{Deserialize, Serialize};

/// One telemetry sample from a driving session.
///
/// The timestamp travels as an ISO-8601 string without timezone, exactly as
/// the collectors produce it; only the daemon's feature layer parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_kmh: f64,
    pub accelerometer_x: f64,
    pub accelerometer_y: f64,
    pub accelerometer_z: f64,
}

/// An ordered (oldest first) sequence of records for a single trip.
pub type Trip = Vec<TelemetryRecord>;
