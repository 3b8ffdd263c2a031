//! Single-run orchestration: load, enrich, scan, simulate, aggregate.
//!
//! `run_analysis` is the read-only pipeline; it touches the filesystem only
//! to load the input. Artifact writing lives in `run_enrichment` and
//! `save_artifacts`, so a failed run never leaves a partial report behind.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smalab_core::domain::{enrich, Trade};
use smalab_core::engine::{simulate_trade, SimulatorConfig};
use smalab_core::indicators::{Indicator, Sma};
use smalab_core::signal::{scan_signals, Signal, SmaPullback};
use smalab_core::stats::TradeStats;
use std::path::PathBuf;

use crate::artifacts::{write_json, write_trades_csv};
use crate::config::AnalysisConfig;
use crate::data_loader::load_price_table;
use crate::enrichment::write_enriched_table;
use crate::report::{render_report, write_report};

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Fingerprint of the configuration that produced this result.
    pub run_id: String,
    /// Rows in the input table.
    pub bar_count: usize,
    /// Rows surviving the both-SMAs-present filter.
    pub enriched_count: usize,
    /// Whether the SMA columns came from the input table.
    pub used_precomputed_sma: bool,
    /// Data-quality notes from the loader (inconsistent OHLC rows).
    pub data_quality_warnings: Vec<String>,
    pub signals: Vec<Signal>,
    pub trades: Vec<Trade>,
    pub stats: TradeStats,
}

/// Paths of the artifacts written by `save_artifacts`.
#[derive(Debug, Clone)]
pub struct SavedArtifacts {
    pub report: PathBuf,
    pub trades: PathBuf,
    pub result: PathBuf,
}

/// Run the full pipeline: load → SMA → filter → scan → simulate → stats.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisResult> {
    config.validate().context("validating configuration")?;

    let table = load_price_table(&config.data.input).context("loading price table")?;
    let bar_count = table.bars.len();
    let data_quality_warnings = table.warnings.clone();

    let use_precomputed = config.data.use_precomputed_sma && table.has_precomputed_sma();
    let (sma_fast, sma_slow) = if use_precomputed {
        (table.sma20, table.sma50)
    } else {
        (
            Sma::new(config.strategy.fast_period).compute(&table.bars),
            Sma::new(config.strategy.slow_period).compute(&table.bars),
        )
    };

    let series = enrich(&table.bars, &sma_fast, &sma_slow);

    let detector = SmaPullback::default();
    let signals = scan_signals(&series, &detector, &config.strategy.directions.directions());

    let simulator_config = SimulatorConfig {
        reward_multiple: config.strategy.reward_multiple,
    };
    let trades: Vec<Trade> = signals
        .iter()
        .filter_map(|signal| simulate_trade(&series, signal, &simulator_config))
        .collect();

    let stats = TradeStats::compute(&trades);

    Ok(AnalysisResult {
        run_id: config.run_id(),
        bar_count,
        enriched_count: series.len(),
        used_precomputed_sma: use_precomputed,
        data_quality_warnings,
        signals,
        trades,
        stats,
    })
}

/// Compute SMA columns for the input table and write the enriched CSV.
///
/// Returns the path of the written table.
pub fn run_enrichment(config: &AnalysisConfig) -> Result<PathBuf> {
    config.validate().context("validating configuration")?;

    let table = load_price_table(&config.data.input).context("loading price table")?;
    let sma_fast = Sma::new(config.strategy.fast_period).compute(&table.bars);
    let sma_slow = Sma::new(config.strategy.slow_period).compute(&table.bars);

    write_enriched_table(
        &config.output.dir,
        &config.output.enriched_table,
        &table.bars,
        &sma_fast,
        &sma_slow,
    )
    .context("writing enriched table")
}

/// Write the report, trade tape, and result JSON into the output directory.
pub fn save_artifacts(result: &AnalysisResult, config: &AnalysisConfig) -> Result<SavedArtifacts> {
    let dir = &config.output.dir;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let report_path = dir.join(&config.output.report_file);
    let report = render_report(&config.output.report_title, &result.trades, &result.stats);
    write_report(&report_path, &report).context("writing report")?;

    let trades_path = dir.join("trades.csv");
    write_trades_csv(&trades_path, &result.trades).context("writing trade tape")?;

    let result_path = dir.join("result.json");
    write_json(&result_path, result).context("writing result JSON")?;

    Ok(SavedArtifacts {
        report: report_path,
        trades: trades_path,
        result: result_path,
    })
}
