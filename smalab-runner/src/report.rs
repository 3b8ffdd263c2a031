//! Flat-text report rendering and writing.
//!
//! The report is one preformatted block: a title line, the overall
//! statistics, then per-trade detail sections listed newest trade first.
//! Percentages and prices round to 2 decimals, durations to 1; all
//! rounding happens here and nowhere upstream.

use anyhow::{Context, Result};
use smalab_core::domain::{Outcome, Trade};
use smalab_core::stats::TradeStats;
use std::fmt::Write as _;
use std::path::Path;

/// Render the full report text.
pub fn render_report(title: &str, trades: &[Trade], stats: &TradeStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "=== OVERALL STATISTICS ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Trades: {}", stats.total_trades);
    let _ = writeln!(out, "Profitable Trades: {}", stats.profitable_trades);
    let _ = writeln!(out, "Loss-Making Trades: {}", stats.loss_making_trades);
    let _ = writeln!(
        out,
        "Percentage of Profitable Trades: {:.2}%",
        stats.pct_profitable
    );
    let _ = writeln!(
        out,
        "Percentage of Loss-Making Trades: {:.2}%",
        stats.pct_loss_making
    );
    let _ = writeln!(
        out,
        "Average Profit Percentage (Profitable Trades): {:.2}%",
        stats.avg_profit_pct
    );
    let _ = writeln!(
        out,
        "Average Loss Percentage (Loss-Making Trades): {:.2}%",
        stats.avg_loss_pct
    );
    let _ = writeln!(
        out,
        "Average Trade Duration (All Trades): {:.1} days",
        stats.avg_duration_days
    );
    let _ = writeln!(
        out,
        "Average Duration of Profitable Trades: {:.1} days",
        stats.avg_profit_duration_days
    );
    let _ = writeln!(
        out,
        "Average Duration of Loss-Making Trades: {:.1} days",
        stats.avg_loss_duration_days
    );

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "=== INDIVIDUAL TRADE DETAILS ===");
    let _ = writeln!(out);

    for (index, trade) in trades.iter().enumerate().rev() {
        let status = match trade.outcome {
            Outcome::Profit => "Profit",
            Outcome::Loss => "Loss",
        };
        let _ = writeln!(out, "TRADE #{}:", index + 1);
        let _ = writeln!(out, "SIGNAL DATE: {}", trade.signal_date.display());
        let _ = writeln!(out, "ENTRY DATE: {}", trade.entry_date.display());
        let _ = writeln!(out, "ENTRY PRICE: {:.2}", trade.entry_price);
        let _ = writeln!(out, "INITIAL STOP LOSS: {:.2}", trade.initial_stop_loss);
        let _ = writeln!(out, "TARGET PRICE: {:.2}", trade.target_price);
        let _ = writeln!(out, "EXIT DATE: {}", trade.exit_date.display());
        let _ = writeln!(out, "EXIT PRICE: {:.2}", trade.exit_price);
        let _ = writeln!(out, "TRADE TIME IN DAYS: {}", trade.duration_days);
        let _ = writeln!(out, "STATUS OF TRADE: {status}");
        let _ = writeln!(out, "P/L: {:.2}", trade.profit_loss);
        let _ = writeln!(out, "P/L PERCENTAGE: {:.2}%", trade.profit_loss_pct);
        let _ = writeln!(out);
    }

    out
}

/// Persist the rendered report verbatim.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report)
        .with_context(|| format!("failed to write report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smalab_core::domain::{Direction, SerialDate};

    fn sample_trades() -> Vec<Trade> {
        vec![
            Trade {
                signal_date: SerialDate(45560),
                direction: Direction::Bullish,
                entry_date: SerialDate(45561),
                entry_price: 100.0,
                initial_stop_loss: 98.0,
                target_price: 104.0,
                exit_date: SerialDate(45565),
                exit_price: 105.0,
                duration_days: 4,
                outcome: Outcome::Profit,
                profit_loss: 5.0,
                profit_loss_pct: 5.0,
            },
            Trade {
                signal_date: SerialDate(45566),
                direction: Direction::Bullish,
                entry_date: SerialDate(45567),
                entry_price: 110.0,
                initial_stop_loss: 108.5,
                target_price: 113.0,
                exit_date: SerialDate(45568),
                exit_price: 108.0,
                duration_days: 1,
                outcome: Outcome::Loss,
                profit_loss: -2.0,
                profit_loss_pct: -1.8181818,
            },
        ]
    }

    #[test]
    fn report_contains_overall_statistics() {
        let trades = sample_trades();
        let stats = TradeStats::compute(&trades);
        let report = render_report("* TEST RESULTS *", &trades, &stats);

        assert!(report.starts_with("* TEST RESULTS *\n\n=== OVERALL STATISTICS ===\n\n"));
        assert!(report.contains("Total Trades: 2\n"));
        assert!(report.contains("Profitable Trades: 1\n"));
        assert!(report.contains("Loss-Making Trades: 1\n"));
        assert!(report.contains("Percentage of Profitable Trades: 50.00%\n"));
        assert!(report.contains("Average Profit Percentage (Profitable Trades): 5.00%\n"));
        assert!(report.contains("Average Loss Percentage (Loss-Making Trades): -1.82%\n"));
        assert!(report.contains("Average Trade Duration (All Trades): 2.5 days\n"));
    }

    #[test]
    fn trades_are_listed_newest_first() {
        let trades = sample_trades();
        let stats = TradeStats::compute(&trades);
        let report = render_report("* TEST RESULTS *", &trades, &stats);

        let pos_2 = report.find("TRADE #2:").unwrap();
        let pos_1 = report.find("TRADE #1:").unwrap();
        assert!(pos_2 < pos_1, "newest trade must come first");
    }

    #[test]
    fn trade_detail_fields_are_formatted() {
        let trades = sample_trades();
        let stats = TradeStats::compute(&trades);
        let report = render_report("* TEST RESULTS *", &trades, &stats);

        assert!(report.contains("SIGNAL DATE: 25-Sep-24\n"));
        assert!(report.contains("ENTRY DATE: 26-Sep-24\n"));
        assert!(report.contains("EXIT DATE: 30-Sep-24\n"));
        assert!(report.contains("ENTRY PRICE: 100.00\n"));
        assert!(report.contains("INITIAL STOP LOSS: 98.00\n"));
        assert!(report.contains("TARGET PRICE: 104.00\n"));
        assert!(report.contains("TRADE TIME IN DAYS: 4\n"));
        assert!(report.contains("STATUS OF TRADE: Profit\n"));
        assert!(report.contains("STATUS OF TRADE: Loss\n"));
        assert!(report.contains("P/L: 5.00\n"));
        assert!(report.contains("P/L PERCENTAGE: -1.82%\n"));
    }

    #[test]
    fn empty_run_renders_zeroed_statistics() {
        let stats = TradeStats::compute(&[]);
        let report = render_report("* TEST RESULTS *", &[], &stats);

        assert!(report.contains("Total Trades: 0\n"));
        assert!(report.contains("Percentage of Profitable Trades: 0.00%\n"));
        assert!(report.contains("Average Trade Duration (All Trades): 0.0 days\n"));
        assert!(report.contains("=== INDIVIDUAL TRADE DETAILS ==="));
        assert!(!report.contains("TRADE #"));
    }

    #[test]
    fn write_report_persists_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.txt");
        write_report(&path, "line one\nline two\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "line one\nline two\n"
        );
    }
}
