//! Outcome command implementation

use super::{print_json, OutputFormat};
use crate::bets::{format_timestamp_utc, parse_outcome, ParsedOutcome};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct OutcomeArgs {
    /// Stored outcome string, e.g. "Alice: Over 15500 Points"
    pub outcome: String,

    /// Placement timestamp (RFC 3339 or epoch millis)
    #[arg(long)]
    pub placed_at: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutcomeReport {
    #[serde(flatten)]
    parsed: ParsedOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    placed_at: Option<String>,
}

impl OutcomeArgs {
    pub fn execute(&self, output: OutputFormat) -> anyhow::Result<()> {
        let report = OutcomeReport {
            parsed: parse_outcome(&self.outcome),
            placed_at: self.placed_at.as_deref().map(format_timestamp_utc),
        };

        match output {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Text => {
                let parsed = &report.parsed;
                println!("Market:  {:?}", parsed.market_type);
                if let Some(player) = &parsed.player_name {
                    println!("Player:  {player}");
                }
                if let Some(country) = &parsed.country_name {
                    println!("Country: {country}");
                }
                println!("Display: {}", parsed.market_display);
                if let Some(placed_at) = &report.placed_at {
                    println!("Placed:  {placed_at}");
                }
            }
        }
        Ok(())
    }
}
