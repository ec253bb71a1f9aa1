//! Typed boundary values
//!
//! Untyped input (CLI arguments, request bodies, config) is parsed into these
//! before it reaches the pricing functions, which assume sane numbers.

use crate::odds::{american_to_decimal, format_signed};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Boundary validation errors
#[derive(Debug, Error, PartialEq)]
pub enum OddsError {
    /// Probability was NaN, infinite or negative
    #[error("Invalid probability: {0}")]
    InvalidProbability(f64),
    /// American price of zero
    #[error("American odds cannot be zero")]
    InvalidAmerican,
    /// Negative stake
    #[error("Invalid stake: {0}")]
    InvalidStake(Decimal),
    /// Input was not a number
    #[error("Could not parse {kind} from {input:?}")]
    Parse { kind: &'static str, input: String },
}

/// Implied probability of an outcome
///
/// Values above 1.0 are valid: margin can push implied probability past
/// certainty, and the guardrails price that overshoot explicitly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// Validate a probability
    pub fn new(value: f64) -> Result<Self, OddsError> {
        if !value.is_finite() || value < 0.0 {
            return Err(OddsError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    /// Raw value
    pub fn value(self) -> f64 {
        self.0
    }

    /// True when margin has pushed the probability past certainty
    pub fn is_overshoot(self) -> bool {
        self.0 > 1.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = OddsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl FromStr for Probability {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| OddsError::Parse {
            kind: "probability",
            input: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-zero American moneyline price
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AmericanPrice(i64);

impl AmericanPrice {
    /// Validate an American price
    pub fn new(value: i64) -> Result<Self, OddsError> {
        if value == 0 {
            return Err(OddsError::InvalidAmerican);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Underdog prices are positive
    pub fn is_underdog(self) -> bool {
        self.0 > 0
    }

    /// Decimal multiplier for this price
    pub fn to_decimal(self) -> f64 {
        american_to_decimal(self.0 as f64)
    }
}

impl TryFrom<i64> for AmericanPrice {
    type Error = OddsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AmericanPrice> for i64 {
    fn from(price: AmericanPrice) -> Self {
        price.0
    }
}

impl FromStr for AmericanPrice {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let value: i64 = digits.parse().map_err(|_| OddsError::Parse {
            kind: "American odds",
            input: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for AmericanPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_signed(self.0))
    }
}

/// A non-negative wager amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Stake(Decimal);

impl Stake {
    /// Validate a stake
    pub fn new(amount: Decimal) -> Result<Self, OddsError> {
        if amount < Decimal::ZERO {
            return Err(OddsError::InvalidStake(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Stake {
    type Error = OddsError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Stake> for Decimal {
    fn from(stake: Stake) -> Self {
        stake.0
    }
}

impl FromStr for Stake {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| OddsError::Parse {
            kind: "stake",
            input: s.to_string(),
        })?;
        Self::new(amount)
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
