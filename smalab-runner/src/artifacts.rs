//! Trade tape and result export (CSV/JSON).

use anyhow::{Context, Result};
use smalab_core::domain::{Direction, Outcome, Trade};
use std::path::Path;

/// Write the trade tape as CSV, one row per completed trade in signal order.
pub fn write_trades_csv(path: &Path, trades: &[Trade]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create trade tape {}", path.display()))?;

    writer.write_record([
        "signal_date",
        "direction",
        "entry_date",
        "entry_price",
        "initial_stop_loss",
        "target_price",
        "exit_date",
        "exit_price",
        "duration_days",
        "outcome",
        "profit_loss",
        "profit_loss_pct",
    ])?;

    for trade in trades {
        let direction = match trade.direction {
            Direction::Bullish => "Bullish",
            Direction::Bearish => "Bearish",
        };
        let outcome = match trade.outcome {
            Outcome::Profit => "Profit",
            Outcome::Loss => "Loss",
        };
        writer.write_record([
            trade.signal_date.display(),
            direction.to_string(),
            trade.entry_date.display(),
            format!("{:.2}", trade.entry_price),
            format!("{:.2}", trade.initial_stop_loss),
            format!("{:.2}", trade.target_price),
            trade.exit_date.display(),
            format!("{:.2}", trade.exit_price),
            trade.duration_days.to_string(),
            outcome.to_string(),
            format!("{:.2}", trade.profit_loss),
            format!("{:.2}", trade.profit_loss_pct),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write trade tape {}", path.display()))?;
    Ok(())
}

/// Write a serializable value as pretty JSON.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write result JSON {}", path.display()))?;
    Ok(())
}
