//! Conversion contract tests

use betgsis_odds::odds::{american_to_decimal, decimal_to_american, format_american_from_int};
use betgsis_odds::payout::{compute_payout, compute_profit};
use proptest::prelude::*;

fn american_value(s: &str) -> i64 {
    s.trim_start_matches('+').parse().unwrap()
}

#[test]
fn test_round_trip_conventional_prices() {
    for american in [100, 250, -110, -500, 5000, -100_000] {
        let decimal = american_to_decimal(american as f64);
        let back = american_value(&decimal_to_american(decimal, None));
        assert_eq!(back, format_american_from_int(american), "price {american}");
    }
}

#[test]
fn test_near_certainty_is_bounded() {
    let price = american_value(&decimal_to_american(1.0000000000001, None));
    assert!(price < 0);
    assert!(price >= -500_000);
}

#[test]
fn test_overshoot_bands() {
    assert_eq!(decimal_to_american(1.5, Some(1.05)), "-100000");
    assert_eq!(decimal_to_american(1.5, Some(1.10)), "-200000");
    assert_eq!(decimal_to_american(1.5, Some(1.20)), "-500000");
}

#[test]
fn test_overshoot_band_edges() {
    assert_eq!(decimal_to_american(1.5, Some(1.08)), "-100000");
    assert_eq!(decimal_to_american(1.5, Some(1.080_000_1)), "-200000");
    assert_eq!(decimal_to_american(1.5, Some(1.15)), "-200000");
    assert_eq!(decimal_to_american(1.5, Some(1.150_000_1)), "-500000");
}

#[test]
fn test_certain_probability_is_not_overshoot() {
    // exactly 1.0 takes the favorite floor, not a band
    assert_eq!(decimal_to_american(1.5, Some(1.0)), "-200");
    assert_eq!(decimal_to_american(2.5, Some(1.0)), "+150");
}

#[test]
fn test_even_probability_takes_favorite_branch() {
    // p = 0.5 is not an underdog, so +5000 does not apply
    assert_eq!(decimal_to_american(200.0, Some(0.5)), "+19900");
    assert_eq!(decimal_to_american(200.0, Some(0.499_999)), "+5000");
}

#[test]
fn test_near_certain_favorite_keeps_its_price() {
    // the -500000 floor only clamps prices beyond it
    assert_eq!(decimal_to_american(1.0005, Some(0.9996)), "-200000");
    assert_eq!(decimal_to_american(1.000_001, Some(0.9996)), "-500000");
}

#[test]
fn test_underdog_cap() {
    assert_eq!(decimal_to_american(200.0, Some(0.1)), "+5000");
}

#[test]
fn test_rounding_tiers() {
    assert_eq!(format_american_from_int(437), 435);
    assert_eq!(format_american_from_int(1234), 1230);
    assert_eq!(format_american_from_int(3456), 3400);
    assert_eq!(format_american_from_int(250), 250);
}

#[test]
fn test_invalid_input_safety() {
    assert_eq!(decimal_to_american(f64::NAN, None), "0");
    assert_eq!(decimal_to_american(-5.0, None), "0");
    assert_eq!(american_to_decimal(f64::NAN), 1.0);
}

proptest! {
    #[test]
    fn underdog_side_is_monotonic(a in 2.0f64..1000.0, b in 2.0f64..1000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_price = american_value(&decimal_to_american(lo, None));
        let hi_price = american_value(&decimal_to_american(hi, None));
        prop_assert!(lo_price <= hi_price);
    }

    #[test]
    fn profit_is_payout_minus_stake(stake in 0.0f64..1e6, odds in 1.0f64..1000.0) {
        prop_assert_eq!(compute_profit(stake, odds), compute_payout(stake, odds) - stake);
    }

    #[test]
    fn conversion_is_total(
        decimal in proptest::num::f64::ANY,
        prob in proptest::option::of(proptest::num::f64::ANY),
    ) {
        let out = decimal_to_american(decimal, prob);
        if out != "0" {
            prop_assert_ne!(american_value(&out), 0);
        }
    }

    #[test]
    fn favorite_side_never_below_floor(decimal in 1e-6f64..2.0, prob in 0.5f64..=1.0) {
        let price = american_value(&decimal_to_american(decimal, Some(prob)));
        prop_assert!(price >= -500_000);
    }

    #[test]
    fn capped_prices_without_probability(decimal in 1.0f64..1e9) {
        let price = american_value(&decimal_to_american(decimal, None));
        prop_assert!(price <= 5_000);
        prop_assert!(price >= -500_000);
    }

    #[test]
    fn tiers_never_increase_magnitude(raw in -10_000_000i64..10_000_000) {
        let rounded = format_american_from_int(raw);
        prop_assert!(rounded.abs() <= raw.abs());
        prop_assert_eq!(rounded.signum(), raw.signum());
    }
}
