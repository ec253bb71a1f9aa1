//! Pricing pipeline tests

use betgsis_odds::odds::american_to_decimal;
use betgsis_odds::pricing::{
    appearance_probs, binomial_tail_probs, normal_tail_probs, prob_to_decimal, quote_book, Quote,
    TwoWayQuote, MAX_ADJUSTED_PROB,
};

#[test]
fn test_trace_favorites() {
    // 0.999 -> 1.001001 -> -99900, already on the 100 tier
    let quote = Quote::from_probability(0.999);
    assert_eq!(quote.american, "-99900");

    // past the near-certain threshold the decimal floor pins the price
    assert_eq!(Quote::from_probability(0.9995).american, "-199900");
    assert_eq!(Quote::from_probability(0.9996).american, "-200000");
}

#[test]
fn test_trace_underdogs() {
    assert_eq!(Quote::from_probability(0.01).american, "+5000");
    assert_eq!(Quote::from_probability(0.02).american, "+4900");
}

#[test]
fn test_quote_decimal_agrees_with_american() {
    for p in [0.05, 0.18, 0.33, 0.5, 0.62, 0.8, 0.97] {
        let quote = Quote::from_probability(p);
        let american: f64 = quote.american.trim_start_matches('+').parse().unwrap();
        assert_eq!(quote.decimal, american_to_decimal(american), "p = {p}");
    }
}

#[test]
fn test_continent_market_is_priced_with_vig() {
    let fair = binomial_tail_probs(5, 0.35, 1.5);
    let quote = TwoWayQuote::price_capped(fair.over, fair.under, 850, Some(100.0));
    assert!(quote.overround() > 1.0);
    assert!(quote.over.raw_decimal <= 100.0);
    assert!(quote.under.raw_decimal <= 100.0);
}

#[test]
fn test_huge_margin_saturates_instead_of_wrapping() {
    let quote = TwoWayQuote::price(0.01, 0.99, u32::MAX);
    assert_eq!(quote.over.probability, MAX_ADJUSTED_PROB);
    assert_eq!(quote.under.probability, MAX_ADJUSTED_PROB);
}

#[test]
fn test_country_prop_pricing() {
    // 2.4% per round over 5 rounds
    let fair = appearance_probs(0.024, 5);
    assert!((fair.over - (1.0 - 0.976f64.powi(5))).abs() < 1e-12);

    let quote = TwoWayQuote::price(fair.over, fair.under, 700);
    assert!(quote.over.american.starts_with('+'));
    assert!(quote.under.american.starts_with('-'));
}

#[test]
fn test_player_line_pricing() {
    let fair = normal_tail_probs(15_000.0, 2_500.0, 15_000.0);
    let quote = TwoWayQuote::price(fair.over, fair.under, 640);
    // symmetric line, symmetric prices
    assert_eq!(quote.over.american, quote.under.american);
    assert!(quote.over.american.starts_with('-'));
}

#[test]
fn test_moneyline_book() {
    let quotes = quote_book(&[2_500.0, 1_500.0, 1_000.0], 800);
    assert_eq!(quotes.len(), 3);
    let total: f64 = quotes.iter().map(|q| q.probability).sum();
    assert!((total - 1.08).abs() < 1e-9);
    // favourite first, longest price last
    assert!(quotes[0].decimal < quotes[1].decimal);
    assert!(quotes[1].decimal < quotes[2].decimal);
}

#[test]
fn test_zero_probability_prices_as_capped_longshot() {
    assert_eq!(prob_to_decimal(0.0), f64::INFINITY);
    assert_eq!(Quote::from_probability(0.0).decimal, 51.0);
}
