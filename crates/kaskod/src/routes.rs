//! API routes for kaskod.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use kasko_common::{
    ErrorResponse, HealthResponse, PremiumRequest, PremiumResponse, CALCULATE_PREMIUM_PATH,
    HEALTH_PATH,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::features::{FeatureError, TripFeatures};
use crate::pricing::{premium_for, round2};
use crate::server::AppState;

type AppStateArc = Arc<AppState>;

/// Error reply carrying the wire `{error}` envelope.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

// ============================================================================
// Quote Routes
// ============================================================================

pub fn quote_routes() -> Router<AppStateArc> {
    Router::new().route(CALCULATE_PREMIUM_PATH, post(calculate_premium))
}

async fn calculate_premium(
    State(state): State<AppStateArc>,
    Json(req): Json<PremiumRequest>,
) -> Result<Json<PremiumResponse>, ApiError> {
    let start = Instant::now();

    if req.trip_data.is_empty() {
        return Err(ApiError::bad_request("Request must include 'trip_data'."));
    }

    info!("[Q]  Scoring trip: {} records", req.trip_data.len());

    let features = TripFeatures::extract(&req.trip_data).map_err(|e| match e {
        FeatureError::EmptyTrip | FeatureError::ZeroDuration => {
            error!("[E]  Unusable trip: {}", e);
            ApiError::bad_request("Invalid trip data. Could not process features.")
        }
        FeatureError::Timestamp { .. } => {
            error!("[E]  Feature extraction failed: {}", e);
            ApiError::internal(format!("Failed to process features: {}", e))
        }
    })?;

    let risk_score = state.model.predict(&features);
    let premium = premium_for(risk_score, state.base_rate_usd);

    info!(
        "[A]  risk {:.2}  premium ${:.2}  in {}ms",
        risk_score,
        premium,
        start.elapsed().as_millis()
    );

    Ok(Json(PremiumResponse {
        risk_score: round2(risk_score),
        calculated_premium_usd: premium,
    }))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route(HEALTH_PATH, get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
