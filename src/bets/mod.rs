//! Bet history helpers
//!
//! Outcome parsing and timestamp rendering used by the bets and portfolio views.

mod outcome;
mod timestamp;

pub use outcome::{parse_outcome, MarketType, ParsedOutcome};
pub use timestamp::{format_datetime_utc, format_timestamp_utc, parse_timestamp};
