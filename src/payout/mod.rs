//! Payout calculation
//!
//! Stake x decimal odds arithmetic. No currency rounding happens here;
//! callers round to cents when rendering.

mod selection;

pub use selection::{Selection, SelectionSide, SlipTotals};

/// Default minimum stake
pub const MIN_STAKE: f64 = 1.0;

/// Default maximum stake
pub const MAX_STAKE: f64 = 100_000.0;

/// Total return for a winning bet
pub fn compute_payout(stake: f64, decimal_odds: f64) -> f64 {
    stake * decimal_odds
}

/// Net winnings for a winning bet
pub fn compute_profit(stake: f64, decimal_odds: f64) -> f64 {
    compute_payout(stake, decimal_odds) - stake
}

/// Clamp a stake into `[min, max]`
///
/// Unlike `f64::clamp` this never panics: a misconfigured `min > max`
/// resolves to `min`, and NaN resolves to `min`.
pub fn clamp_stake(stake: f64, min: f64, max: f64) -> f64 {
    if stake.is_nan() {
        return min;
    }
    min.max(max.min(stake))
}

/// Clamp a stake into the default `[1, 100000]` range
pub fn clamp_stake_default(stake: f64) -> f64 {
    clamp_stake(stake, MIN_STAKE, MAX_STAKE)
}
