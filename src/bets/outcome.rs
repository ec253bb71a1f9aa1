//! Outcome string parsing
//!
//! Bets are stored with a free-form outcome such as
//! `"Alice: First Round - Over 2400 Points"`. History views split these
//! back into player, market type and a short display label.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn to_appear() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(.+):\s*To Appear\s*-\s*(YES|NO)$").expect("valid regex")
    })
}

fn first_last() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(.+):\s*(First Round|Last Round)\s*-\s*(Over|Under)\s*(\d+)?\s*Points$")
            .expect("valid regex")
    })
}

fn totals() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(.+):\s*(Over|Under)\s*(\d+)?\s*Points$").expect("valid regex")
    })
}

/// Market family an outcome belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketType {
    /// Country "to appear" yes/no props
    CountryProps,
    /// First- or last-round point lines
    FirstLast,
    /// Full-game point totals
    Totals,
    /// Anything else, shown verbatim
    Special,
}

/// Parsed outcome string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedOutcome {
    pub player_name: Option<String>,
    pub country_name: Option<String>,
    pub market_type: MarketType,
    pub market_display: String,
}

impl ParsedOutcome {
    fn special(outcome: &str) -> Self {
        Self {
            player_name: None,
            country_name: None,
            market_type: MarketType::Special,
            market_display: outcome.to_string(),
        }
    }
}

/// Parse an outcome string; unrecognised input becomes a special market
pub fn parse_outcome(outcome: &str) -> ParsedOutcome {
    if outcome.is_empty() {
        return ParsedOutcome::special(outcome);
    }

    if let Some(caps) = to_appear().captures(outcome) {
        return ParsedOutcome {
            player_name: None,
            country_name: Some(caps[1].trim().to_string()),
            market_type: MarketType::CountryProps,
            market_display: format!("To Appear - {}", caps[2].to_uppercase()),
        };
    }

    if let Some(caps) = first_last().captures(outcome) {
        let points = caps.get(4).map_or("", |m| m.as_str());
        return ParsedOutcome {
            player_name: Some(caps[1].trim().to_string()),
            country_name: None,
            market_type: MarketType::FirstLast,
            market_display: format!("{} - {} {} Points", &caps[2], &caps[3], points),
        };
    }

    if let Some(caps) = totals().captures(outcome) {
        let points = caps.get(3).map_or("", |m| m.as_str());
        return ParsedOutcome {
            player_name: Some(caps[1].trim().to_string()),
            country_name: None,
            market_type: MarketType::Totals,
            market_display: format!("{} {} Points", &caps[2], points),
        };
    }

    ParsedOutcome::special(outcome)
}
