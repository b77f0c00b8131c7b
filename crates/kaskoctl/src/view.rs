//! View state for the quote cycle.
//!
//! Each cycle produces one immutable [`ViewState`] that the renderer paints
//! in a single pass; nothing mutates display state piecemeal. A generation
//! counter guards against a stale cycle overwriting a newer one.

use kasko_common::{PremiumResponse, QuoteError};

/// Placeholder score text before a result arrives or after a failure.
pub const SCORE_PLACEHOLDER: &str = "--";
/// Placeholder premium text.
pub const PREMIUM_PLACEHOLDER: &str = "$--";

/// How the score value is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStyle {
    Neutral,
    Safe,
    Risky,
}

/// Everything the renderer needs for one paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    pub results_visible: bool,
    pub error: Option<String>,
    pub score_text: String,
    pub premium_text: String,
    pub score_style: ScoreStyle,
    pub badge_visible: bool,
}

impl ViewState {
    /// Before the first cycle: placeholders, nothing highlighted.
    pub fn idle() -> Self {
        Self {
            loading: false,
            results_visible: false,
            error: None,
            score_text: SCORE_PLACEHOLDER.to_string(),
            premium_text: PREMIUM_PLACEHOLDER.to_string(),
            score_style: ScoreStyle::Neutral,
            badge_visible: false,
        }
    }

    /// A request is in flight: loader on, results and error cleared.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::idle()
        }
    }

    /// Successful outcome: score and premium texts, safe or risky styling,
    /// badge only for safe scores.
    pub fn success(response: &PremiumResponse) -> Self {
        let safe = response.is_safe();
        Self {
            loading: false,
            results_visible: true,
            error: None,
            score_text: format!("{}", response.risk_score),
            premium_text: format!("${}", response.calculated_premium_usd),
            score_style: if safe {
                ScoreStyle::Safe
            } else {
                ScoreStyle::Risky
            },
            badge_visible: safe,
        }
    }

    /// Failed outcome: back to placeholders, results hidden, message shown.
    pub fn failure(error: &QuoteError) -> Self {
        Self {
            loading: false,
            error: Some(error.to_string()),
            ..Self::idle()
        }
    }
}

/// Drives view state through one request cycle and drops stale completions.
///
/// `begin` advances the generation; a completion carrying an older
/// generation is discarded, so overlapping cycles resolve to the most
/// recently begun one instead of last-to-resolve-wins.
#[derive(Debug)]
pub struct QuoteCoordinator {
    generation: u64,
    view: ViewState,
}

impl QuoteCoordinator {
    pub fn new() -> Self {
        Self {
            generation: 0,
            view: ViewState::idle(),
        }
    }

    /// Start a cycle: flips the view to loading and returns the generation
    /// token the completion must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.view = ViewState::loading();
        self.generation
    }

    /// Apply an outcome. Returns false (and leaves the view untouched) when
    /// the generation is stale.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<PremiumResponse, QuoteError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view = match &outcome {
            Ok(response) => ViewState::success(response),
            Err(error) => ViewState::failure(error),
        };
        true
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

impl Default for QuoteCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(risk_score: f64, premium: f64) -> PremiumResponse {
        PremiumResponse {
            risk_score,
            calculated_premium_usd: premium,
        }
    }

    #[test]
    fn test_safe_score_gets_badge() {
        let view = ViewState::success(&response(39.0, 69.5));
        assert_eq!(view.score_style, ScoreStyle::Safe);
        assert!(view.badge_visible);
        assert!(view.results_visible);
        assert!(!view.loading);
    }

    #[test]
    fn test_boundary_score_is_risky() {
        let view = ViewState::success(&response(40.0, 70.0));
        assert_eq!(view.score_style, ScoreStyle::Risky);
        assert!(!view.badge_visible);
        assert!(view.results_visible);
    }

    #[test]
    fn test_premium_text_formatting() {
        let view = ViewState::success(&response(12.0, 450.5));
        assert_eq!(view.premium_text, "$450.5");
        assert_eq!(view.score_text, "12");
    }

    #[test]
    fn test_failure_resets_to_placeholders() {
        let view = ViewState::failure(&QuoteError::Backend("bad trip data".to_string()));
        assert_eq!(view.score_text, SCORE_PLACEHOLDER);
        assert_eq!(view.premium_text, PREMIUM_PLACEHOLDER);
        assert_eq!(view.score_style, ScoreStyle::Neutral);
        assert!(!view.badge_visible);
        assert!(!view.results_visible);
        assert_eq!(view.error.as_deref(), Some("bad trip data"));
    }

    #[test]
    fn test_loading_clears_previous_outcome() {
        let mut coordinator = QuoteCoordinator::new();
        let generation = coordinator.begin();
        assert!(coordinator.view().loading);
        assert!(!coordinator.view().results_visible);
        assert!(coordinator.view().error.is_none());

        assert!(coordinator.complete(generation, Ok(response(5.0, 52.5))));
        assert!(!coordinator.view().loading);
        assert!(coordinator.view().results_visible);

        coordinator.begin();
        assert!(coordinator.view().loading);
        assert!(!coordinator.view().results_visible);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut coordinator = QuoteCoordinator::new();
        let first = coordinator.begin();
        let second = coordinator.begin();

        // the older cycle resolves after the newer one began
        assert!(!coordinator.complete(first, Ok(response(99.0, 99.5))));
        assert!(coordinator.view().loading);

        assert!(coordinator.complete(second, Ok(response(5.0, 52.5))));
        assert_eq!(coordinator.view().score_text, "5");
    }

    #[test]
    fn test_error_path_keeps_results_hidden() {
        let mut coordinator = QuoteCoordinator::new();
        let generation = coordinator.begin();
        coordinator.complete(generation, Err(QuoteError::Status(500)));

        let view = coordinator.view();
        assert!(!view.loading);
        assert!(!view.results_visible);
        assert!(view.error.as_deref().unwrap_or_default().contains("500"));
    }
}
