//! Probability to decimal odds

use crate::odds::NEAR_CERTAIN_PROB;

/// Visible decimal floor for underdog-side prices
pub const UNDERDOG_DECIMAL_FLOOR: f64 = 1.01;

/// Decimal floor for near-certain favorites (maps to roughly -200000)
pub const NEAR_CERTAIN_DECIMAL_FLOOR: f64 = 1.0005;

/// Probability-aware decimal floor
///
/// Favorites may approach 1.0 so they can scale to large negative American
/// prices; underdogs never show below 1.01.
fn dynamic_floor(p: f64) -> f64 {
    if p > NEAR_CERTAIN_PROB {
        NEAR_CERTAIN_DECIMAL_FLOOR
    } else if p > 0.5 {
        1.0
    } else {
        UNDERDOG_DECIMAL_FLOOR
    }
}

/// Convert a probability to decimal odds with the default floors
///
/// Non-positive or NaN probabilities return `f64::INFINITY`, which the
/// American conversion turns into its capped underdog price.
pub fn prob_to_decimal(p: f64) -> f64 {
    prob_to_decimal_with(p, None, None)
}

/// Convert a probability to decimal odds with an explicit floor and/or cap
pub fn prob_to_decimal_with(p: f64, floor: Option<f64>, cap: Option<f64>) -> f64 {
    if p.is_nan() || p <= 0.0 {
        return f64::INFINITY;
    }
    let odds = 1.0 / p;
    if !odds.is_finite() {
        return f64::INFINITY;
    }

    let floor = floor.unwrap_or_else(|| dynamic_floor(p));
    let odds = odds.max(floor);
    match cap {
        Some(cap) => odds.min(cap),
        None => odds,
    }
}
