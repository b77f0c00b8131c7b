//! Kasko Daemon - Trip scoring backend.
//!
//! Scores raw trip telemetry and prices premiums over a localhost HTTP API.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kaskod::config::{KaskodConfig, CONFIG_PATH};
use kaskod::model::RiskModel;
use kaskod::server::{self, AppState};

#[derive(Parser)]
#[command(name = "kaskod")]
#[command(about = "Kasko trip scoring daemon", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the daemon config file
    #[arg(long, default_value = CONFIG_PATH)]
    config: PathBuf,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Kasko Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = KaskodConfig::load(&args.config)?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    let model = match &config.model_path {
        Some(path) => RiskModel::load(path)?,
        None => RiskModel::bundled(),
    };
    info!(
        "Model ready (base rate ${:.2}/month)",
        config.base_rate_usd
    );

    server::run(&config.bind, AppState::new(model, config.base_rate_usd)).await
}
