//! Kasko Control - CLI client for the kasko scoring daemon.
//!
//! Sends bundled sample trips to the daemon and renders the quote.

use anyhow::Result;
use clap::{Parser, Subcommand};
use kasko_common::DEFAULT_ENDPOINT;
use kaskoctl::commands;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "kaskoctl")]
#[command(about = "Kasko - telematics insurance quotes", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Daemon endpoint
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a premium quote for a bundled sample trip
    Quote {
        /// Trip to quote (safe_trip or risky_trip)
        trip: String,
    },

    /// List the bundled sample trips
    Trips,

    /// Check daemon health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote { trip } => commands::handle_quote(&cli.endpoint, &trip).await,
        Commands::Trips => commands::handle_trips(),
        Commands::Health => commands::handle_health(&cli.endpoint).await,
    }
}
