//! Consistent price quotes
//!
//! A quote carries both display prices. The decimal is re-derived from the
//! rounded American price so the two never disagree on screen.

use super::margin::{apply_margin, apply_multi_vig};
use super::probability::prob_to_decimal_with;
use crate::odds::decimal_to_american;
use crate::types::AmericanPrice;
use serde::Serialize;

/// A single priced outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Probability the price was built from (after margin)
    pub probability: f64,
    /// Decimal odds straight from the probability
    pub raw_decimal: f64,
    /// Guarded, tier-rounded American price
    pub american: String,
    /// Decimal odds matching the American price
    pub decimal: f64,
}

impl Quote {
    /// Price a probability with the default decimal floors
    pub fn from_probability(probability: f64) -> Self {
        Self::from_probability_capped(probability, None)
    }

    /// Price a probability, capping the decimal before conversion
    pub fn from_probability_capped(probability: f64, max_decimal: Option<f64>) -> Self {
        let raw_decimal = prob_to_decimal_with(probability, None, max_decimal);
        let american = decimal_to_american(raw_decimal, Some(probability));
        let decimal = american
            .parse::<AmericanPrice>()
            .map(AmericanPrice::to_decimal)
            .unwrap_or(raw_decimal);

        Self {
            probability,
            raw_decimal,
            american,
            decimal,
        }
    }
}

/// Both sides of an over/under (or yes/no) market
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoWayQuote {
    pub over: Quote,
    pub under: Quote,
}

impl TwoWayQuote {
    /// Apply margin to fair probabilities and price both sides
    pub fn price(fair_over: f64, fair_under: f64, margin_bps: u32) -> Self {
        Self::price_capped(fair_over, fair_under, margin_bps, None)
    }

    /// As [`TwoWayQuote::price`], capping both decimals at `max_decimal`
    pub fn price_capped(
        fair_over: f64,
        fair_under: f64,
        margin_bps: u32,
        max_decimal: Option<f64>,
    ) -> Self {
        let (over, under) = apply_margin(fair_over, fair_under, margin_bps);
        let quote = Self {
            over: Quote::from_probability_capped(over, max_decimal),
            under: Quote::from_probability_capped(under, max_decimal),
        };
        tracing::debug!(
            fair_over,
            fair_under,
            margin_bps,
            over = %quote.over.american,
            under = %quote.under.american,
            "Priced two-way market"
        );
        quote
    }

    /// Implied probability total of the adjusted market (> 1.0 with vig)
    pub fn overround(&self) -> f64 {
        self.over.probability + self.under.probability
    }
}

/// Price every runner of a multi-way market (e.g. a moneyline)
///
/// `fair` may be win counts or probabilities; the book is rescaled to
/// `1 + margin` before pricing. Output order matches input order.
pub fn quote_book(fair: &[f64], margin_bps: u32) -> Vec<Quote> {
    let quotes: Vec<Quote> = apply_multi_vig(fair, margin_bps)
        .into_iter()
        .map(Quote::from_probability)
        .collect();
    tracing::debug!(runners = quotes.len(), margin_bps, "Priced multi-way market");
    quotes
}
