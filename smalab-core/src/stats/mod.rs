//! Trade statistics — pure reductions over the completed trade list.
//!
//! Every field is computed in one pass over the input; empty subsets reduce
//! to 0.0 rather than NaN. Values stay unrounded here; the report layer owns
//! presentation rounding.

use crate::domain::{Outcome, Trade};
use serde::{Deserialize, Serialize};

/// Aggregate summary over a trade collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStats {
    pub total_trades: usize,
    pub profitable_trades: usize,
    pub loss_making_trades: usize,
    pub pct_profitable: f64,
    pub pct_loss_making: f64,
    /// Mean profit_loss_pct over profitable trades only.
    pub avg_profit_pct: f64,
    /// Mean profit_loss_pct over loss-making trades only.
    pub avg_loss_pct: f64,
    pub avg_duration_days: f64,
    pub avg_profit_duration_days: f64,
    pub avg_loss_duration_days: f64,
}

impl TradeStats {
    /// Reduce a trade collection into its summary.
    pub fn compute(trades: &[Trade]) -> Self {
        let winners: Vec<&Trade> = trades
            .iter()
            .filter(|t| t.outcome == Outcome::Profit)
            .collect();
        let losers: Vec<&Trade> = trades
            .iter()
            .filter(|t| t.outcome == Outcome::Loss)
            .collect();

        Self {
            total_trades: trades.len(),
            profitable_trades: winners.len(),
            loss_making_trades: losers.len(),
            pct_profitable: percentage(winners.len(), trades.len()),
            pct_loss_making: percentage(losers.len(), trades.len()),
            avg_profit_pct: mean(winners.iter().map(|t| t.profit_loss_pct)),
            avg_loss_pct: mean(losers.iter().map(|t| t.profit_loss_pct)),
            avg_duration_days: mean(trades.iter().map(|t| t.duration_days as f64)),
            avg_profit_duration_days: mean(winners.iter().map(|t| t.duration_days as f64)),
            avg_loss_duration_days: mean(losers.iter().map(|t| t.duration_days as f64)),
        }
    }
}

/// Share of `part` in `total` as a percentage; 0.0 when `total` is 0.
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Arithmetic mean; 0.0 for an empty iterator.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
