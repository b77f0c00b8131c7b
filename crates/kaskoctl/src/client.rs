//! HTTP client for the kaskod scoring API.

use anyhow::{bail, Context, Result};
use kasko_common::{
    ErrorResponse, HealthResponse, PremiumRequest, PremiumResponse, QuoteError, TelemetryRecord,
    CALCULATE_PREMIUM_PATH, HEALTH_PATH,
};

/// Client for communicating with kaskod
pub struct PremiumClient {
    client: reqwest::Client,
    base_url: String,
}

impl PremiumClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send a trip for scoring and return the priced outcome.
    ///
    /// One request, no timeout, no retry; every failure mode comes back as
    /// a tagged [`QuoteError`] whose display text is ready to render.
    pub async fn calculate_premium(
        &self,
        trip: &[TelemetryRecord],
    ) -> Result<PremiumResponse, QuoteError> {
        let url = format!("{}{}", self.base_url, CALCULATE_PREMIUM_PATH);
        let request = PremiumRequest {
            trip_data: trip.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the server-supplied message; fall back to the bare
            // status when the body is missing or not the error envelope.
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(reply) => QuoteError::Backend(reply.error),
                Err(_) => QuoteError::Status(status.as_u16()),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| QuoteError::Body(e.to_string()))
    }

    /// Check daemon health.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Cannot reach the kasko daemon")?;

        if !response.status().is_success() {
            bail!("Health check failed ({})", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse health response")
    }
}

/// Keep the whole source chain visible, so "connection refused" and friends
/// survive into the rendered message.
fn transport_error(err: reqwest::Error) -> QuoteError {
    QuoteError::Transport(format!("{:#}", anyhow::Error::new(err)))
}
