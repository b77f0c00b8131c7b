//! Feature engineering over raw trip telemetry.
//!
//! Reproduces the training pipeline exactly: the thresholds and formulas
//! here must stay in lockstep with the ones the model was fitted against.

use chrono::{NaiveDateTime, Timelike};
use kasko_common::TelemetryRecord;
use thiserror::Error;

/// Longitudinal acceleration above this counts as a harsh acceleration.
pub const HARSH_ACCELERATION_THRESHOLD: f64 = 2.5;
/// Longitudinal acceleration below this counts as a harsh braking.
pub const HARSH_BRAKING_THRESHOLD: f64 = -2.5;
/// Lateral acceleration magnitude above this counts as a harsh turn.
pub const HARSH_TURNING_THRESHOLD: f64 = 2.0;
/// Speeds above this (km/h) count as speeding.
pub const SPEEDING_THRESHOLD_KMH: f64 = 90.0;

/// Late-night hours with elevated accident rates.
const RISKY_HOURS: [u32; 7] = [22, 23, 0, 1, 2, 3, 4];

/// Collector timestamp format: ISO-8601, no timezone, optional fraction.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The engineered feature row the model scores.
#[derive(Debug, Clone, PartialEq)]
pub struct TripFeatures {
    pub harsh_accelerations: u32,
    pub harsh_brakings: u32,
    pub harsh_turnings: u32,
    pub percent_time_speeding: f64,
    pub percent_time_risky_hours: f64,
}

/// Why a trip could not be turned into features.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("trip contains no records")]
    EmptyTrip,

    #[error("trip duration is zero")]
    ZeroDuration,

    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

impl TripFeatures {
    /// Engineer the feature row for a trip.
    ///
    /// Single-point trips have zero duration and are rejected; so are trips
    /// whose records all carry the same timestamp.
    pub fn extract(trip: &[TelemetryRecord]) -> Result<Self, FeatureError> {
        if trip.is_empty() {
            return Err(FeatureError::EmptyTrip);
        }

        let mut timestamps = Vec::with_capacity(trip.len());
        for record in trip {
            let parsed = NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT)
                .map_err(|source| FeatureError::Timestamp {
                    value: record.timestamp.clone(),
                    source,
                })?;
            timestamps.push(parsed);
        }

        let mut start = timestamps[0];
        let mut end = timestamps[0];
        for &ts in &timestamps[1..] {
            if ts < start {
                start = ts;
            }
            if ts > end {
                end = ts;
            }
        }
        let duration_seconds = (end - start).num_milliseconds() as f64 / 1000.0;
        if duration_seconds == 0.0 {
            return Err(FeatureError::ZeroDuration);
        }

        let harsh_accelerations = trip
            .iter()
            .filter(|r| r.accelerometer_x > HARSH_ACCELERATION_THRESHOLD)
            .count() as u32;
        let harsh_brakings = trip
            .iter()
            .filter(|r| r.accelerometer_x < HARSH_BRAKING_THRESHOLD)
            .count() as u32;
        let harsh_turnings = trip
            .iter()
            .filter(|r| r.accelerometer_y.abs() > HARSH_TURNING_THRESHOLD)
            .count() as u32;

        // sample counts stand in for seconds; collectors emit at 1 Hz
        let speeding_samples = trip
            .iter()
            .filter(|r| r.speed_kmh > SPEEDING_THRESHOLD_KMH)
            .count();
        let percent_time_speeding = speeding_samples as f64 / duration_seconds * 100.0;

        let risky_samples = timestamps
            .iter()
            .filter(|ts| RISKY_HOURS.contains(&ts.hour()))
            .count();
        let percent_time_risky_hours = risky_samples as f64 / duration_seconds * 100.0;

        Ok(TripFeatures {
            harsh_accelerations,
            harsh_brakings,
            harsh_turnings,
            percent_time_speeding,
            percent_time_risky_hours,
        })
    }
}
