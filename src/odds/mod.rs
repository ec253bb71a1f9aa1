//! Odds conversion module
//!
//! Decimal <-> American conversion with book-favoring guardrails and
//! display-tier rounding. Every function here is pure and total.

mod american;
mod guardrail;
mod tiers;

pub use american::{
    american_to_decimal, decimal_to_american, format_signed, raw_american, RAW_SENTINEL,
};
pub use guardrail::{
    apply_guardrails, overshoot_band, Guarded, FAVORITE_MAX, NEAR_CERTAIN_PROB, UNDERDOG_MAX,
};
pub use tiers::format_american_from_int;
