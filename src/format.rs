//! Display formatting for odds, currency and percentages

use crate::odds::decimal_to_american;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Odds display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    Decimal,
    #[default]
    American,
}

/// Format decimal odds in the requested style
pub fn format_odds(decimal: f64, format: OddsFormat) -> String {
    match format {
        OddsFormat::Decimal => format!("{decimal:.2}"),
        OddsFormat::American => decimal_to_american(decimal, None),
    }
}

/// Format a currency amount, e.g. `$12.50`
pub fn format_currency(value: f64, symbol: &str, decimals: usize) -> String {
    format!("{symbol}{value:.decimals$}")
}

/// Format a P&L figure with an explicit sign, e.g. `+$12.50` or `-$3.00`
pub fn format_signed_currency(value: f64, symbol: &str) -> String {
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{sign}{}", format_currency(value.abs(), symbol, 2))
}

/// Format a ratio as a percentage, e.g. `0.1234` -> `12.34%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0)
}
