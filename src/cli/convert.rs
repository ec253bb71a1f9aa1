//! Convert command implementation

use super::{print_json, OutputFormat};
use crate::odds::{decimal_to_american, raw_american};
use crate::types::{AmericanPrice, Probability};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// American price to convert, e.g. +150 or -110
    #[arg(
        long,
        allow_hyphen_values = true,
        conflicts_with = "decimal",
        required_unless_present = "decimal"
    )]
    pub american: Option<AmericanPrice>,

    /// Decimal odds to convert
    #[arg(long, allow_hyphen_values = true)]
    pub decimal: Option<f64>,

    /// Implied probability for probability-aware guardrails
    #[arg(long, requires = "decimal")]
    pub prob: Option<Probability>,
}

#[derive(Debug, Serialize)]
struct Conversion {
    american: String,
    decimal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_american: Option<i64>,
}

impl ConvertArgs {
    fn convert(&self) -> Conversion {
        match (self.american, self.decimal) {
            (Some(american), _) => Conversion {
                american: american.to_string(),
                decimal: american.to_decimal(),
                raw_american: None,
            },
            (None, Some(decimal)) => {
                let probability = self.prob.map(Probability::value);
                // raw inverse is undefined below the validity gate
                let raw = (decimal > 0.0).then(|| raw_american(decimal));
                Conversion {
                    american: decimal_to_american(decimal, probability),
                    decimal,
                    raw_american: raw,
                }
            }
            // clap enforces one of the two
            (None, None) => Conversion {
                american: "0".to_string(),
                decimal: 1.0,
                raw_american: None,
            },
        }
    }

    pub fn execute(&self, output: OutputFormat) -> anyhow::Result<()> {
        let conversion = self.convert();
        tracing::debug!(?conversion, "Converted odds");

        match output {
            OutputFormat::Json => print_json(&conversion)?,
            OutputFormat::Text => {
                println!("American: {}", conversion.american);
                println!("Decimal:  {:.4}", conversion.decimal);
                if let Some(raw) = conversion.raw_american {
                    println!("Raw:      {raw}");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(american: Option<i64>, decimal: Option<f64>, prob: Option<f64>) -> ConvertArgs {
        ConvertArgs {
            american: american.map(|a| AmericanPrice::new(a).unwrap()),
            decimal,
            prob: prob.map(|p| Probability::new(p).unwrap()),
        }
    }

    #[test]
    fn test_convert_american() {
        let conversion = args(Some(-200), None, None).convert();
        assert_eq!(conversion.american, "-200");
        assert_eq!(conversion.decimal, 1.5);
    }

    #[test]
    fn test_convert_decimal_with_probability() {
        let conversion = args(None, Some(1.5), Some(1.2)).convert();
        assert_eq!(conversion.american, "-500000");
        assert_eq!(conversion.raw_american, Some(-200));
    }

    #[test]
    fn test_convert_invalid_decimal() {
        let conversion = args(None, Some(-5.0), None).convert();
        assert_eq!(conversion.american, "0");
        assert_eq!(conversion.raw_american, None);
    }
}
