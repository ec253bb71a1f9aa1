//! End-to-end integration tests

use betgsis_odds::bets::{parse_outcome, MarketType};
use betgsis_odds::config::Config;
use betgsis_odds::format::{format_currency, format_odds};
use betgsis_odds::payout::{Selection, SelectionSide, SlipTotals};
use betgsis_odds::pricing::TwoWayQuote;
use betgsis_odds::types::{Probability, Stake};
use rust_decimal_macros::dec;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.pricing.two_way_margin_bps, 440);
    assert_eq!(config.stake.max, 100_000.0);
}

#[test]
fn test_price_line_then_fill_slip() {
    let config = Config::default();
    let quote = TwoWayQuote::price(0.5, 0.5, config.pricing.two_way_margin_bps);

    let over = Selection::new(
        "Alice: Over 15500 Points",
        SelectionSide::Over,
        Stake::new(dec!(10)).unwrap(),
        quote.over.decimal,
    );
    let under = Selection::new(
        "Bob: Under 15500 Points",
        SelectionSide::Under,
        Stake::new(dec!(10)).unwrap(),
        quote.under.decimal,
    );

    // the slip shows the same American price the quote produced
    assert_eq!(over.american(), quote.over.american);

    let totals = SlipTotals::from_selections(&[over.clone(), under]);
    assert_eq!(totals.total_stake, dec!(20));
    // both sides carry vig, so backing both loses money
    assert!(totals.potential_payout < dec!(40));

    let parsed = parse_outcome(&over.outcome);
    assert_eq!(parsed.market_type, MarketType::Totals);
    assert_eq!(parsed.player_name.as_deref(), Some("Alice"));
}

#[test]
fn test_overshoot_probability_flows_from_boundary() {
    let p: Probability = "1.12".parse().unwrap();
    assert!(p.is_overshoot());
    assert_eq!(
        betgsis_odds::decimal_to_american(1.5, Some(p.value())),
        "-200000"
    );
}

#[test]
fn test_display_helpers() {
    assert_eq!(format_odds(3.5, Default::default()), "+250");
    assert_eq!(format_currency(betgsis_odds::compute_payout(10.0, 3.5), "$", 2), "$35.00");
}
