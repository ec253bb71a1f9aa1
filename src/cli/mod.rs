//! CLI interface for betgsis-odds
//!
//! Provides subcommands for:
//! - `convert`: American <-> decimal conversion with guardrails
//! - `payout`: Payout and profit for a stake
//! - `quote`: Trace a probability through the pricing pipeline
//! - `outcome`: Parse a stored bet outcome string
//! - `config`: Show configuration

mod convert;
mod outcome;
mod payout;
mod quote;

pub use convert::ConvertArgs;
pub use outcome::OutcomeArgs;
pub use payout::PayoutArgs;
pub use quote::{Market, QuoteArgs};

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "betgsis-odds")]
#[command(about = "Odds conversion, guardrail and payout tools for the betGSIS book")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert between American and decimal odds
    Convert(ConvertArgs),
    /// Compute payout and profit for a stake
    Payout(PayoutArgs),
    /// Price a probability and show every step
    Quote(QuoteArgs),
    /// Parse a bet outcome string
    Outcome(OutcomeArgs),
    /// Show configuration
    Config,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a serializable value as pretty JSON on stdout
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
