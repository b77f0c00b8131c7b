//! Command handlers for kaskoctl.

use anyhow::{bail, Result};
use kasko_common::ui::{self, colors, symbols};
use kasko_common::SampleTrip;

use crate::client::PremiumClient;
use crate::render::{self, KEY_WIDTH};
use crate::view::QuoteCoordinator;

/// Handle the quote command: send a bundled trip to the daemon and render
/// the outcome. A failed quote is a rendered result, not a process error,
/// so the exit code stays zero.
pub async fn handle_quote(endpoint: &str, trip_key: &str) -> Result<()> {
    let Some(sample) = SampleTrip::from_key(trip_key) else {
        let known = SampleTrip::ALL
            .iter()
            .map(|t| t.key())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("unknown trip '{}' (known trips: {})", trip_key, known);
    };

    ui::print_header("kaskoctl", env!("CARGO_PKG_VERSION"));
    ui::print_kv("trip", &format!("{}   {}", sample.key(), sample.description()), KEY_WIDTH);
    println!();

    let client = PremiumClient::new(endpoint);
    let mut coordinator = QuoteCoordinator::new();
    let generation = coordinator.begin();

    let spinner = render::loading_spinner();
    let outcome = client.calculate_premium(&sample.trip()).await;
    spinner.finish_and_clear();

    coordinator.complete(generation, outcome);

    render::paint(coordinator.view());
    println!();
    ui::print_footer();
    Ok(())
}

/// Handle the trips command: list the bundled sample trips.
pub fn handle_trips() -> Result<()> {
    ui::print_header("kaskoctl", env!("CARGO_PKG_VERSION"));
    println!();
    for sample in SampleTrip::ALL {
        println!(
            "  {} {:width$} {} records   {}",
            symbols::ARROW,
            sample.key(),
            sample.trip().len(),
            sample.description(),
            width = KEY_WIDTH
        );
    }
    println!();
    ui::print_footer();
    Ok(())
}

/// Handle the health command: query the daemon and print its vitals.
pub async fn handle_health(endpoint: &str) -> Result<()> {
    let client = PremiumClient::new(endpoint);
    let health = client.health().await?;

    ui::print_header("kaskoctl", env!("CARGO_PKG_VERSION"));
    ui::print_kv(
        "daemon",
        &format!("{}{}{} {}", colors::OK, symbols::OK, colors::RESET, health.status),
        KEY_WIDTH,
    );
    ui::print_kv("version", &health.version, KEY_WIDTH);
    ui::print_kv("uptime", &format!("{}s", health.uptime_seconds), KEY_WIDTH);
    ui::print_footer();
    Ok(())
}
