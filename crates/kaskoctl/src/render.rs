//! Terminal rendering for quote view state.
//!
//! `paint` draws one [`ViewState`] in a single pass. Callers build the
//! state first and hand it over; nothing here mutates it.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use kasko_common::ui::{self, symbols};
use owo_colors::OwoColorize;

use crate::view::{ScoreStyle, ViewState};

/// Key column width for the results block.
pub const KEY_WIDTH: usize = 12;

/// Draw the full view: loading line, results block, error block.
pub fn paint(view: &ViewState) {
    if view.loading {
        println!("  {} calculating...", symbols::ARROW);
        return;
    }

    if view.results_visible {
        let score = match view.score_style {
            ScoreStyle::Safe => view.score_text.green().bold().to_string(),
            ScoreStyle::Risky => view.score_text.red().bold().to_string(),
            ScoreStyle::Neutral => view.score_text.clone(),
        };
        // pad the key by hand, the colored value would skew print_kv alignment
        println!("  {:width$} {}", "risk score", score, width = KEY_WIDTH);
        ui::print_kv("premium", &view.premium_text, KEY_WIDTH);
        if view.badge_visible {
            println!(
                "  {:width$} {} Safe Driver badge unlocked",
                "badge",
                symbols::BADGE.yellow(),
                width = KEY_WIDTH
            );
        }
    }

    if let Some(message) = &view.error {
        ui::print_err(message);
    }
}

/// Spinner shown while a quote request is in flight.
pub fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("calculating premium...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
