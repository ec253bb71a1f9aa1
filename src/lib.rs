//! betgsis-odds: odds conversion and payout library for the betGSIS book
//!
//! This library provides:
//! - Decimal <-> American odds conversion with book-favoring guardrails
//! - Display-tier rounding of American prices
//! - Payout and profit arithmetic for bet-slip selections
//! - Probability-to-price pipeline with margin application
//! - Typed boundary values for untrusted numeric input
//! - Bet history helpers (outcome parsing, UTC timestamps)
//!
//! Every pricing function is pure and total: invalid input degrades to a
//! defined sentinel instead of an error.

pub mod bets;
pub mod cli;
pub mod config;
pub mod format;
pub mod odds;
pub mod payout;
pub mod pricing;
pub mod telemetry;
pub mod types;

pub use odds::{american_to_decimal, decimal_to_american, format_american_from_int};
pub use payout::{clamp_stake, clamp_stake_default, compute_payout, compute_profit};
