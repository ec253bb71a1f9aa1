//! Decimal <-> American odds conversion
//!
//! Both directions are total: invalid or unstable input degrades to a
//! sentinel instead of failing, since these sit on rendering hot paths.

use super::guardrail::{apply_guardrails, Guarded};
use super::tiers::format_american_from_int;

/// Raw sentinel for prices too extreme to compute (before guardrails)
pub const RAW_SENTINEL: i64 = 1_000_000_000;

/// Decimal odds closer than this to 1.0 are treated as certain favorites
const BREAKEVEN_EPSILON: f64 = 1e-12;

/// Round half toward positive infinity
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Convert an American price to decimal odds
///
/// Fractional input is truncated toward zero. Zero and non-finite input
/// return 1.0 (breakeven).
pub fn american_to_decimal(american: f64) -> f64 {
    if !american.is_finite() {
        return 1.0;
    }
    let american = american.trunc();
    if american > 0.0 {
        1.0 + american / 100.0
    } else if american < 0.0 {
        1.0 + 100.0 / american.abs()
    } else {
        1.0
    }
}

/// Unguarded inverse of [`american_to_decimal`]
///
/// Caller must have rejected NaN and non-positive input.
pub fn raw_american(decimal: f64) -> i64 {
    if !decimal.is_finite() {
        RAW_SENTINEL
    } else if decimal >= 2.0 {
        round_half_up((decimal - 1.0) * 100.0) as i64
    } else if decimal <= 1.0 + BREAKEVEN_EPSILON {
        -RAW_SENTINEL
    } else {
        round_half_up(-100.0 / (decimal - 1.0)) as i64
    }
}

/// Render an American price with an explicit sign for non-negative values
pub fn format_signed(american: i64) -> String {
    if american >= 0 {
        format!("+{american}")
    } else {
        american.to_string()
    }
}

/// Convert decimal odds to a guarded, tier-rounded American price string
///
/// Returns `"0"` for NaN or non-positive decimals. When `probability` is
/// above 1.0 the decimal is ignored and a banded favorite price is returned.
pub fn decimal_to_american(decimal: f64, probability: Option<f64>) -> String {
    if decimal.is_nan() || decimal <= 0.0 {
        return "0".to_string();
    }

    let raw = raw_american(decimal);
    match apply_guardrails(raw, probability) {
        Guarded::Banded(price) => price.to_string(),
        // integer tiers are always finite, so no raw fallback is needed here
        Guarded::Capped(capped) => format_signed(format_american_from_int(capped)),
    }
}
