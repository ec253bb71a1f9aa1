//! Pricing module
//!
//! Turns fair probabilities into book prices:
//! fair probability -> margin -> decimal (with floors) -> guarded American
//! -> decimal re-derived from the American price.

mod margin;
mod probability;
mod quote;
mod tails;

pub use margin::{
    apply_margin, apply_multi_vig, apply_single_vig, LONGSHOT_SURCHARGE_BPS, MAX_ADJUSTED_PROB,
};
pub use probability::{
    prob_to_decimal, prob_to_decimal_with, NEAR_CERTAIN_DECIMAL_FLOOR, UNDERDOG_DECIMAL_FLOOR,
};
pub use quote::{quote_book, Quote, TwoWayQuote};
pub use tails::{appearance_probs, binomial_tail_probs, normal_cdf, normal_tail_probs, TailProbs};
