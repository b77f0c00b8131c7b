//! HTTP server for kaskod.

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::model::RiskModel;
use crate::routes;

/// Application state shared across handlers
pub struct AppState {
    pub model: RiskModel,
    pub base_rate_usd: f64,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(model: RiskModel, base_rate_usd: f64) -> Self {
        Self {
            model,
            base_rate_usd,
            start_time: Instant::now(),
        }
    }
}

/// Assemble the router. Split out so tests can drive it directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::quote_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until ctrl-c.
pub async fn run(bind: &str, state: AppState) -> Result<()> {
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("  Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down gracefully"),
        Err(err) => stay_up(err).await,
    }
}

/// A failed handler registration is not a shutdown request; log it and
/// keep serving until the service manager stops us.
async fn stay_up(err: std::io::Error) {
    error!("Cannot listen for ctrl-c: {}", err);
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_failure_keeps_the_daemon_up() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "ctrl-c unavailable");
        let outcome = tokio::time::timeout(Duration::from_millis(50), stay_up(err)).await;
        assert!(outcome.is_err(), "registration failure must not resolve the shutdown future");
    }
}
