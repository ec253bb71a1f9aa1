//! Display-tier rounding for American prices
//!
//! Books never quote arbitrary precision. The magnitude is floored into
//! conventional buckets, which always moves the price toward the house:
//! a smaller underdog payout or a larger favorite stake.

/// Floor `magnitude` to the nearest multiple of `base`
fn floor_to(magnitude: u64, base: u64) -> u64 {
    magnitude / base * base
}

/// Round a raw American price into its display tier, preserving sign
///
/// | magnitude      | rounding            |
/// |----------------|---------------------|
/// | < 400          | unchanged           |
/// | [400, 1000)    | floor to 5          |
/// | [1000, 3000)   | floor to 10         |
/// | >= 3000        | floor to 100        |
pub fn format_american_from_int(raw: i64) -> i64 {
    let magnitude = raw.unsigned_abs();
    let rounded = match magnitude {
        0..=399 => magnitude,
        400..=999 => floor_to(magnitude, 5),
        1_000..=2_999 => floor_to(magnitude, 10),
        _ => floor_to(magnitude, 100),
    };

    // i64::MIN floors to a multiple of 100 that fits back into i64
    let rounded = i64::try_from(rounded).unwrap_or(i64::MAX);
    if raw >= 0 {
        rounded
    } else {
        -rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_prices_unchanged() {
        assert_eq!(format_american_from_int(0), 0);
        assert_eq!(format_american_from_int(55), 55);
        assert_eq!(format_american_from_int(-99), -99);
    }

    #[test]
    fn test_hundred_to_four_hundred_unchanged() {
        assert_eq!(format_american_from_int(100), 100);
        assert_eq!(format_american_from_int(250), 250);
        assert_eq!(format_american_from_int(399), 399);
        assert_eq!(format_american_from_int(-137), -137);
    }

    #[test]
    fn test_floor_to_five() {
        assert_eq!(format_american_from_int(437), 435);
        assert_eq!(format_american_from_int(400), 400);
        assert_eq!(format_american_from_int(999), 995);
        assert_eq!(format_american_from_int(-437), -435);
    }

    #[test]
    fn test_floor_to_ten() {
        assert_eq!(format_american_from_int(1234), 1230);
        assert_eq!(format_american_from_int(2999), 2990);
        assert_eq!(format_american_from_int(-1005), -1000);
    }

    #[test]
    fn test_floor_to_hundred() {
        assert_eq!(format_american_from_int(3456), 3400);
        assert_eq!(format_american_from_int(5000), 5000);
        assert_eq!(format_american_from_int(-199_999), -199_900);
        assert_eq!(format_american_from_int(-500_000), -500_000);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(format_american_from_int(i64::MAX) % 100, 0);
        assert!(format_american_from_int(i64::MIN) < 0);
    }
}
