//! Wire contract between the client and the scoring daemon.

use serde::{Deserialize, Serialize};

use crate::telemetry::Trip;

/// Default scoring daemon base URL.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Premium calculation route.
pub const CALCULATE_PREMIUM_PATH: &str = "/calculate_premium";

/// Daemon health route.
pub const HEALTH_PATH: &str = "/v1/health";

/// Scores strictly below this ceiling count as safe driving; at or above it
/// the trip renders with risky styling and no badge.
pub const SAFE_SCORE_CEILING: f64 = 40.0;

/// Body of `POST /calculate_premium`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumRequest {
    /// Raw records for a single trip, oldest first.
    #[serde(default)]
    pub trip_data: Trip,
}

/// Successful reply: the scored trip and its priced premium.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumResponse {
    pub risk_score: f64,
    pub calculated_premium_usd: f64,
}

impl PremiumResponse {
    /// Whether the score falls in the safe band (lower is safer).
    pub fn is_safe(&self) -> bool {
        self.risk_score < SAFE_SCORE_CEILING
    }
}

/// Error reply body, any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Reply of `GET /v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleTrip;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = PremiumRequest {
            trip_data: vec![SampleTrip::Safe.trip()[0].clone()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "trip_data": [{
                    "timestamp": "2023-10-27T10:00:00",
                    "latitude": 40.7128,
                    "longitude": -74.0060,
                    "speed_kmh": 45.0,
                    "accelerometer_x": 0.1,
                    "accelerometer_y": -0.2,
                    "accelerometer_z": 9.8,
                }]
            })
        );
    }

    #[test]
    fn test_request_tolerates_missing_trip_data() {
        let request: PremiumRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.trip_data.is_empty());
    }

    #[test]
    fn test_response_parses_and_classifies() {
        let response: PremiumResponse =
            serde_json::from_value(json!({"risk_score": 12.0, "calculated_premium_usd": 450.5}))
                .unwrap();
        assert!(response.is_safe());

        let boundary = PremiumResponse {
            risk_score: 40.0,
            calculated_premium_usd: 70.0,
        };
        assert!(!boundary.is_safe());

        let just_under = PremiumResponse {
            risk_score: 39.0,
            calculated_premium_usd: 69.5,
        };
        assert!(just_under.is_safe());
    }
}
