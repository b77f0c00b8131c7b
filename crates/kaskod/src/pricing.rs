//! Pricing engine: risk score in, monthly premium out.

/// Base monthly premium in USD before the risk adjustment.
pub const DEFAULT_BASE_RATE_USD: f64 = 50.0;

/// Price a premium from a risk score.
///
/// A score of 0 leaves the base rate untouched; a score of 100 doubles it.
pub fn premium_for(risk_score: f64, base_rate_usd: f64) -> f64 {
    round2(base_rate_usd * (1.0 + risk_score / 100.0))
}

/// Round to two decimals, the wire precision for money and scores.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
