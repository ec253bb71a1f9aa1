//! Book-safety guardrails applied to raw American prices
//!
//! Three regimes, selected by the optional probability:
//! - overshoot (p > 1.0): a fixed banded favorite price replaces the raw value
//! - probability-aware (p <= 1.0): side-specific caps
//! - no probability: conservative symmetric caps

/// Hard cap for underdog prices (+5000)
pub const UNDERDOG_MAX: i64 = 5_000;

/// Absolute magnitude cap for favorite prices (-500000)
pub const FAVORITE_MAX: i64 = 500_000;

/// Probability above which a favorite is treated as near-certain
pub const NEAR_CERTAIN_PROB: f64 = 0.9995;

/// Overshoot band upper bounds and their fixed prices
const OVERSHOOT_BANDS: [(f64, i64); 2] = [(1.08, -100_000), (1.15, -200_000)];

/// Result of the guardrail pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded {
    /// Fixed banded price; skips tier rounding entirely
    Banded(i64),
    /// Capped raw price; still subject to tier rounding
    Capped(i64),
}

/// Fixed favorite price for a probability pushed over 1.0 by margin
pub fn overshoot_band(probability: f64) -> i64 {
    OVERSHOOT_BANDS
        .iter()
        .find(|(upper, _)| probability <= *upper)
        .map(|(_, price)| *price)
        .unwrap_or(-FAVORITE_MAX)
}

/// Apply the guardrail policy to a raw American price
///
/// A NaN probability is treated the same as no probability.
pub fn apply_guardrails(raw: i64, probability: Option<f64>) -> Guarded {
    match probability.filter(|p| !p.is_nan()) {
        Some(p) if p > 1.0 => Guarded::Banded(overshoot_band(p)),
        Some(p) => {
            let p = p.clamp(0.0, 1.0);
            // near-certain favorites (p > NEAR_CERTAIN_PROB) share the same floor
            let capped = if p < 0.5 {
                raw.min(UNDERDOG_MAX)
            } else {
                raw.max(-FAVORITE_MAX)
            };
            Guarded::Capped(capped)
        }
        None => Guarded::Capped(raw.min(UNDERDOG_MAX).clamp(-FAVORITE_MAX, FAVORITE_MAX)),
    }
}
