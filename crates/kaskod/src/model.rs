//! Linear risk model over engineered trip features.
//!
//! Coefficients come from the offline training run against the simulator
//! corpus and ship bundled; a retrained set can be dropped in as a TOML
//! file without rebuilding the daemon. Scores are floored at zero.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::features::TripFeatures;

/// Weight per feature, named after the feature it multiplies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskModel {
    #[serde(default = "default_intercept")]
    pub intercept: f64,

    /// Per harsh acceleration event.
    #[serde(default = "default_harsh_accelerations")]
    pub harsh_accelerations: f64,

    /// Per harsh braking event.
    #[serde(default = "default_harsh_brakings")]
    pub harsh_brakings: f64,

    /// Per harsh turning event.
    #[serde(default = "default_harsh_turnings")]
    pub harsh_turnings: f64,

    /// Per percentage point of trip time spent speeding.
    #[serde(default = "default_percent_time_speeding")]
    pub percent_time_speeding: f64,

    /// Per percentage point of trip time in late-night hours.
    #[serde(default = "default_percent_time_risky_hours")]
    pub percent_time_risky_hours: f64,
}

fn default_intercept() -> f64 {
    1.8742
}

fn default_harsh_accelerations() -> f64 {
    8.1437
}

fn default_harsh_brakings() -> f64 {
    9.6718
}

fn default_harsh_turnings() -> f64 {
    7.2903
}

fn default_percent_time_speeding() -> f64 {
    0.7141
}

fn default_percent_time_risky_hours() -> f64 {
    0.3377
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            intercept: default_intercept(),
            harsh_accelerations: default_harsh_accelerations(),
            harsh_brakings: default_harsh_brakings(),
            harsh_turnings: default_harsh_turnings(),
            percent_time_speeding: default_percent_time_speeding(),
            percent_time_risky_hours: default_percent_time_risky_hours(),
        }
    }
}

impl RiskModel {
    /// The coefficients shipped with the daemon.
    pub fn bundled() -> Self {
        Self::default()
    }

    /// Load retrained coefficients from a TOML file. Missing keys keep
    /// their bundled values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file {}", path.display()))?;
        let model: RiskModel = toml::from_str(&content)
            .with_context(|| format!("Failed to parse model file {}", path.display()))?;
        info!("Loaded model coefficients from {}", path.display());
        Ok(model)
    }

    /// Score a feature row. Higher is riskier; never negative.
    pub fn predict(&self, features: &TripFeatures) -> f64 {
        let raw = self.intercept
            + self.harsh_accelerations * f64::from(features.harsh_accelerations)
            + self.harsh_brakings * f64::from(features.harsh_brakings)
            + self.harsh_turnings * f64::from(features.harsh_turnings)
            + self.percent_time_speeding * features.percent_time_speeding
            + self.percent_time_risky_hours * features.percent_time_risky_hours;
        raw.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kasko_common::{SampleTrip, SAFE_SCORE_CEILING};
    use std::io::Write;

    #[test]
    fn test_quiet_trip_scores_the_intercept() {
        let features = TripFeatures {
            harsh_accelerations: 0,
            harsh_brakings: 0,
            harsh_turnings: 0,
            percent_time_speeding: 0.0,
            percent_time_risky_hours: 0.0,
        };
        assert_relative_eq!(RiskModel::bundled().predict(&features), 1.8742);
    }

    #[test]
    fn test_score_never_negative() {
        let model = RiskModel {
            intercept: -5.0,
            ..RiskModel::bundled()
        };
        let features = TripFeatures {
            harsh_accelerations: 0,
            harsh_brakings: 0,
            harsh_turnings: 0,
            percent_time_speeding: 0.0,
            percent_time_risky_hours: 0.0,
        };
        assert_eq!(model.predict(&features), 0.0);
    }

    #[test]
    fn test_fixture_trips_straddle_the_safe_ceiling() {
        let model = RiskModel::bundled();

        let safe = TripFeatures::extract(&SampleTrip::Safe.trip()).unwrap();
        assert!(model.predict(&safe) < SAFE_SCORE_CEILING);

        let risky = TripFeatures::extract(&SampleTrip::Risky.trip()).unwrap();
        assert!(model.predict(&risky) >= SAFE_SCORE_CEILING);
    }

    #[test]
    fn test_load_full_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "intercept = 0.0\n\
             harsh_accelerations = 1.0\n\
             harsh_brakings = 2.0\n\
             harsh_turnings = 3.0\n\
             percent_time_speeding = 0.5\n\
             percent_time_risky_hours = 0.25"
        )
        .unwrap();

        let model = RiskModel::load(file.path()).unwrap();
        let features = TripFeatures {
            harsh_accelerations: 1,
            harsh_brakings: 1,
            harsh_turnings: 1,
            percent_time_speeding: 10.0,
            percent_time_risky_hours: 4.0,
        };
        assert_relative_eq!(model.predict(&features), 1.0 + 2.0 + 3.0 + 5.0 + 1.0);
    }

    #[test]
    fn test_load_partial_override_keeps_bundled_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "intercept = 10.0").unwrap();

        let model = RiskModel::load(file.path()).unwrap();
        assert_eq!(model.intercept, 10.0);
        assert_eq!(model.harsh_brakings, RiskModel::bundled().harsh_brakings);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = RiskModel::load(Path::new("/nonexistent/model.toml")).unwrap_err();
        assert!(err.to_string().contains("model file"));
    }
}
