//! Payout command implementation

use super::{print_json, OutputFormat};
use crate::config::Config;
use crate::format::{format_currency, format_odds, format_signed_currency, OddsFormat};
use crate::odds::american_to_decimal;
use crate::payout::{clamp_stake, compute_payout, compute_profit};
use crate::types::AmericanPrice;
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct PayoutArgs {
    /// Stake amount (clamped to the configured limits)
    #[arg(long)]
    pub stake: f64,

    /// Decimal odds
    #[arg(long, conflicts_with = "american", required_unless_present = "american")]
    pub decimal: Option<f64>,

    /// American price, e.g. +150 or -110
    #[arg(long, allow_hyphen_values = true)]
    pub american: Option<AmericanPrice>,

    /// Odds display format (defaults to the configured one)
    #[arg(long, value_enum)]
    pub odds_format: Option<OddsFormat>,
}

#[derive(Debug, Serialize)]
struct PayoutReport {
    requested_stake: f64,
    stake: f64,
    decimal_odds: f64,
    odds: String,
    payout: f64,
    profit: f64,
}

impl PayoutArgs {
    fn report(&self, config: &Config) -> PayoutReport {
        let decimal_odds = match (self.decimal, self.american) {
            (Some(decimal), _) => decimal,
            (None, Some(american)) => american.to_decimal(),
            (None, None) => american_to_decimal(0.0),
        };

        let stake = clamp_stake(self.stake, config.stake.min, config.stake.max);
        if stake != self.stake {
            tracing::warn!(
                requested = self.stake,
                clamped = stake,
                min = config.stake.min,
                max = config.stake.max,
                "Stake outside limits, clamped"
            );
        }

        PayoutReport {
            requested_stake: self.stake,
            stake,
            decimal_odds,
            odds: format_odds(
                decimal_odds,
                self.odds_format.unwrap_or(config.display.odds_format),
            ),
            payout: compute_payout(stake, decimal_odds),
            profit: compute_profit(stake, decimal_odds),
        }
    }

    pub fn execute(&self, config: &Config, output: OutputFormat) -> anyhow::Result<()> {
        let report = self.report(config);
        let symbol = &config.display.currency_symbol;

        match output {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Text => {
                println!("Stake:  {}", format_currency(report.stake, symbol, 2));
                println!("Odds:   {}", report.odds);
                println!("Payout: {}", format_currency(report.payout, symbol, 2));
                println!("Profit: {}", format_signed_currency(report.profit, symbol));
            }
        }
        Ok(())
    }
}
