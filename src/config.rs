//! Configuration types for betgsis-odds

use crate::format::OddsFormat;
use crate::payout::{MAX_STAKE, MIN_STAKE};
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub stake: StakeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Default margins for each market family, in basis points
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Player over/under point lines
    #[serde(default = "default_two_way_margin_bps")]
    pub two_way_margin_bps: u32,

    /// Moneyline (multi-runner) markets
    #[serde(default = "default_multi_margin_bps")]
    pub multi_margin_bps: u32,

    /// Country "to appear" props and specials
    #[serde(default = "default_props_margin_bps")]
    pub props_margin_bps: u32,

    /// Continent count over/unders
    #[serde(default = "default_continent_margin_bps")]
    pub continent_margin_bps: u32,

    /// Cap applied to continent market decimals before conversion
    #[serde(default = "default_max_decimal_odds")]
    pub max_decimal_odds: f64,
}

fn default_two_way_margin_bps() -> u32 {
    440
}
fn default_multi_margin_bps() -> u32 {
    800
}
fn default_props_margin_bps() -> u32 {
    700
}
fn default_continent_margin_bps() -> u32 {
    850
}
fn default_max_decimal_odds() -> f64 {
    100.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            two_way_margin_bps: default_two_way_margin_bps(),
            multi_margin_bps: default_multi_margin_bps(),
            props_margin_bps: default_props_margin_bps(),
            continent_margin_bps: default_continent_margin_bps(),
            max_decimal_odds: default_max_decimal_odds(),
        }
    }
}

/// Stake sanitizer limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StakeConfig {
    #[serde(default = "default_min_stake")]
    pub min: f64,
    #[serde(default = "default_max_stake")]
    pub max: f64,
}

fn default_min_stake() -> f64 {
    MIN_STAKE
}
fn default_max_stake() -> f64 {
    MAX_STAKE
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            min: default_min_stake(),
            max: default_max_stake(),
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub odds_format: OddsFormat,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            odds_format: OddsFormat::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
