//! Bet-slip selections
//!
//! Each selection is settled on its own (no parlays), so slip totals are
//! plain sums over the individual payouts.

use crate::odds::decimal_to_american;
use crate::types::Stake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Side of a two-way market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSide {
    Over,
    Under,
}

/// A single priced selection on the slip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// Human-readable outcome, e.g. "Alice: Over 15500 Points"
    pub outcome: String,
    pub side: SelectionSide,
    pub stake: Stake,
    pub decimal_odds: f64,
}

impl Selection {
    pub fn new(
        outcome: impl Into<String>,
        side: SelectionSide,
        stake: Stake,
        decimal_odds: f64,
    ) -> Self {
        Self {
            outcome: outcome.into(),
            side,
            stake,
            decimal_odds,
        }
    }

    /// Replace the stake
    pub fn with_stake(mut self, stake: Stake) -> Self {
        self.stake = stake;
        self
    }

    /// Decimal odds as an exact decimal, falling back to breakeven
    ///
    /// Odds that are not positive have no valid price and settle at breakeven.
    fn odds_decimal(&self) -> Decimal {
        Decimal::try_from(self.decimal_odds)
            .ok()
            .filter(|d| d.is_sign_positive() && !d.is_zero())
            .unwrap_or(Decimal::ONE)
    }

    /// Total return if the selection wins
    ///
    /// Saturates at `Decimal::MAX` when the product does not fit.
    pub fn payout(&self) -> Decimal {
        self.stake
            .amount()
            .checked_mul(self.odds_decimal())
            .unwrap_or(Decimal::MAX)
    }

    /// Net winnings if the selection wins
    pub fn profit(&self) -> Decimal {
        self.payout() - self.stake.amount()
    }

    /// Payout rounded to cents for display
    pub fn payout_cents(&self) -> Decimal {
        self.payout().round_dp(2)
    }

    /// American price as shown on the slip
    pub fn american(&self) -> String {
        decimal_to_american(self.decimal_odds, None)
    }
}

/// Aggregate figures for a whole slip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlipTotals {
    pub selections: usize,
    pub total_stake: Decimal,
    pub potential_payout: Decimal,
    pub potential_profit: Decimal,
}

impl SlipTotals {
    /// Sum a slip
    pub fn from_selections(selections: &[Selection]) -> Self {
        let mut totals = selections.iter().fold(Self::default(), |mut acc, s| {
            acc.selections += 1;
            acc.total_stake = saturating_sum(acc.total_stake, s.stake.amount());
            acc.potential_payout = saturating_sum(acc.potential_payout, s.payout());
            acc
        });
        totals.potential_profit = totals.potential_payout - totals.total_stake;
        totals
    }

    /// Return on stake (0 for an empty slip)
    pub fn return_pct(&self) -> Decimal {
        if self.total_stake == dec!(0) {
            return dec!(0);
        }
        self.potential_profit
            .checked_div(self.total_stake)
            .unwrap_or(if self.potential_profit.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }
}

// both operands are non-negative
fn saturating_sum(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}
