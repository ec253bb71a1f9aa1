//! Quote command implementation
//!
//! Traces a probability through every pricing step: margin, decimal,
//! guarded American price and the decimal re-derived from it.

use super::{print_json, OutputFormat};
use crate::config::{Config, PricingConfig};
use crate::pricing::{apply_single_vig, quote_book, Quote, TwoWayQuote};
use crate::types::Probability;
use anyhow::Context;
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Two-way market families, each with its own configured margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Market {
    /// Player over/under point lines
    Line,
    /// Country "to appear" props
    Props,
    /// Continent count over/unders, capped at the configured max decimal
    Continent,
}

impl Market {
    fn margin_bps(self, pricing: &PricingConfig) -> u32 {
        match self {
            Market::Line => pricing.two_way_margin_bps,
            Market::Props => pricing.props_margin_bps,
            Market::Continent => pricing.continent_margin_bps,
        }
    }

    fn max_decimal(self, pricing: &PricingConfig) -> Option<f64> {
        match self {
            Market::Continent => Some(pricing.max_decimal_odds),
            Market::Line | Market::Props => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Fair probability of the outcome
    #[arg(long, required_unless_present = "book", conflicts_with = "book")]
    pub prob: Option<Probability>,

    /// Price both sides of a two-way market using 1 - prob for the other side
    #[arg(long, value_enum)]
    pub market: Option<Market>,

    /// Moneyline runner weights (win counts or probabilities), comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., conflicts_with = "market")]
    pub book: Vec<f64>,

    /// Margin in basis points (defaults: none for a single outcome,
    /// otherwise the configured margin for the market)
    #[arg(long)]
    pub margin_bps: Option<u32>,

    /// Cap decimal odds before conversion
    #[arg(long)]
    pub max_decimal: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum QuoteReport {
    Single { fair: f64, quote: Quote },
    TwoWay { fair: f64, overround: f64, quote: TwoWayQuote },
    Book { fair: Vec<f64>, overround: f64, quotes: Vec<Quote> },
}

impl QuoteArgs {
    fn report(&self, config: &Config) -> anyhow::Result<QuoteReport> {
        let pricing = &config.pricing;
        if !self.book.is_empty() {
            let margin = self.margin_bps.unwrap_or(pricing.multi_margin_bps);
            let quotes = quote_book(&self.book, margin);
            return Ok(QuoteReport::Book {
                fair: self.book.clone(),
                overround: quotes.iter().map(|q| q.probability).sum(),
                quotes,
            });
        }

        let fair = self
            .prob
            .context("--prob or --book is required")?
            .value();
        let report = match self.market {
            Some(market) => {
                let margin = self.margin_bps.unwrap_or(market.margin_bps(pricing));
                let max_decimal = self.max_decimal.or(market.max_decimal(pricing));
                let quote = TwoWayQuote::price_capped(fair, 1.0 - fair, margin, max_decimal);
                QuoteReport::TwoWay {
                    fair,
                    overround: quote.overround(),
                    quote,
                }
            }
            None => {
                let adjusted = match self.margin_bps {
                    Some(bps) => apply_single_vig(fair, bps),
                    None => fair,
                };
                QuoteReport::Single {
                    fair,
                    quote: Quote::from_probability_capped(adjusted, self.max_decimal),
                }
            }
        };
        Ok(report)
    }

    pub fn execute(&self, config: &Config, output: OutputFormat) -> anyhow::Result<()> {
        let report = self.report(config)?;
        match output {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Text => match &report {
                QuoteReport::Single { fair, quote } => {
                    println!("--- TRACE p={fair} ---");
                    print_trace(quote);
                }
                QuoteReport::TwoWay {
                    fair,
                    overround,
                    quote,
                } => {
                    println!("--- OVER p={fair} ---");
                    print_trace(&quote.over);
                    println!("--- UNDER p={} ---", 1.0 - fair);
                    print_trace(&quote.under);
                    println!("overround = {overround:.4}");
                }
                QuoteReport::Book {
                    fair,
                    overround,
                    quotes,
                } => {
                    for (weight, quote) in fair.iter().zip(quotes) {
                        println!("--- RUNNER w={weight} ---");
                        print_trace(quote);
                    }
                    println!("overround = {overround:.4}");
                }
            },
        }
        Ok(())
    }
}

fn print_trace(quote: &Quote) {
    println!("prob (after margin) = {}", quote.probability);
    println!("decimal from prob   = {}", quote.raw_decimal);
    println!("american            = {}", quote.american);
    println!("decimal from price  = {}", quote.decimal);
}
