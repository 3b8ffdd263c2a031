//! Trade — a completed round-trip with entry, stop, target, and outcome.

use super::date::SerialDate;
use serde::{Deserialize, Serialize};

/// Direction implied by the setup that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Bullish,
    Bearish,
}

/// Profit/loss classification of a closed trade. Break-even exits count as
/// losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Profit,
    Loss,
}

/// A completed trade. Immutable once constructed by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    // ── Signal ──
    pub signal_date: SerialDate,
    pub direction: Direction,

    // ── Entry ──
    pub entry_date: SerialDate,
    pub entry_price: f64,
    pub initial_stop_loss: f64,
    pub target_price: f64,

    // ── Exit ──
    pub exit_date: SerialDate,
    pub exit_price: f64,

    // ── Result ──
    pub duration_days: usize,
    pub outcome: Outcome,
    pub profit_loss: f64,
    pub profit_loss_pct: f64,
}

impl Trade {
    pub fn is_profitable(&self) -> bool {
        matches!(self.outcome, Outcome::Profit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade {
            signal_date: SerialDate(45560),
            direction: Direction::Bullish,
            entry_date: SerialDate(45561),
            entry_price: 100.0,
            initial_stop_loss: 98.0,
            target_price: 104.0,
            exit_date: SerialDate(45568),
            exit_price: 105.0,
            duration_days: 5,
            outcome: Outcome::Profit,
            profit_loss: 5.0,
            profit_loss_pct: 5.0,
        }
    }

    #[test]
    fn is_profitable() {
        assert!(sample_trade().is_profitable());
        let mut losing = sample_trade();
        losing.outcome = Outcome::Loss;
        assert!(!losing.is_profitable());
    }

    #[test]
    fn trade_serialization_roundtrip() {
        let trade = sample_trade();
        let json = serde_json::to_string(&trade).unwrap();
        let deser: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deser);
    }

    #[test]
    fn dates_are_ordered() {
        let trade = sample_trade();
        assert!(trade.signal_date < trade.entry_date);
        assert!(trade.entry_date <= trade.exit_date);
    }
}
