//! Kasko Common - Shared types for the kasko quote demo.
//!
//! The wire contract between `kaskoctl` and `kaskod`, the bundled sample
//! trips, and the terminal styling helpers both binaries use.

pub mod error;
pub mod quote;
pub mod samples;
pub mod telemetry;
pub mod ui;

pub use error::QuoteError;
pub use quote::{
    ErrorResponse, HealthResponse, PremiumRequest, PremiumResponse, CALCULATE_PREMIUM_PATH,
    DEFAULT_ENDPOINT, HEALTH_PATH, SAFE_SCORE_CEILING,
};
pub use samples::SampleTrip;
pub use telemetry::{TelemetryRecord, Trip};
