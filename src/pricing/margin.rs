//! Margin (vig) application
//!
//! The book bumps true probabilities up rather than shrinking payouts, so an
//! adjusted market sums to more than 1.0.

/// Upper bound for a single adjusted probability
pub const MAX_ADJUSTED_PROB: f64 = 0.9999;

/// Extra margin charged on two-way markets with a longshot side
pub const LONGSHOT_SURCHARGE_BPS: u32 = 125;

/// Sides below this probability trigger the longshot surcharge
const LONGSHOT_PROB: f64 = 0.05;

fn margin_from_bps(bps: u32) -> f64 {
    f64::from(bps) / 10_000.0
}

/// Apply margin to both sides of a two-way market
///
/// Returns `(over, under)` adjusted probabilities, each capped at
/// [`MAX_ADJUSTED_PROB`].
pub fn apply_margin(prob_over: f64, prob_under: f64, margin_bps: u32) -> (f64, f64) {
    let bps = if prob_over < LONGSHOT_PROB || prob_under < LONGSHOT_PROB {
        margin_bps.saturating_add(LONGSHOT_SURCHARGE_BPS)
    } else {
        margin_bps
    };
    let bump = 1.0 + margin_from_bps(bps);

    (
        (prob_over * bump).min(MAX_ADJUSTED_PROB),
        (prob_under * bump).min(MAX_ADJUSTED_PROB),
    )
}

/// Apply margin to a standalone (single-outcome) market
pub fn apply_single_vig(prob: f64, vig_bps: u32) -> f64 {
    (prob * (1.0 + margin_from_bps(vig_bps))).clamp(0.0, MAX_ADJUSTED_PROB)
}

/// Rescale a multi-runner book so it sums to `1 + margin`
///
/// A book with no positive mass falls back to uniform probabilities.
pub fn apply_multi_vig(probs: &[f64], margin_bps: u32) -> Vec<f64> {
    let total: f64 = probs.iter().sum();
    if total <= 0.0 || total.is_nan() {
        let uniform = 1.0 / probs.len() as f64;
        return vec![uniform; probs.len()];
    }
    let scale = (1.0 + margin_from_bps(margin_bps)) / total;
    probs.iter().map(|p| p * scale).collect()
}
