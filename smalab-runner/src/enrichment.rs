//! Enriched-table artifact — the input rows plus both SMA columns.

use anyhow::{Context, Result};
use smalab_core::domain::Bar;
use std::path::{Path, PathBuf};

/// Write `<table_name>.csv` into `dir`, replacing any existing file of the
/// same name. SMA cells are empty while the window is not yet full.
pub fn write_enriched_table(
    dir: &Path,
    table_name: &str,
    bars: &[Bar],
    sma20: &[Option<f64>],
    sma50: &[Option<f64>],
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{table_name}.csv"));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create enriched table {}", path.display()))?;

    writer.write_record(["Date", "Open", "High", "Low", "Close", "SMA_20", "SMA_50"])?;
    for (i, bar) in bars.iter().enumerate() {
        writer.write_record([
            bar.date.0.to_string(),
            format!("{:.2}", bar.open),
            format!("{:.2}", bar.high),
            format!("{:.2}", bar.low),
            format!("{:.2}", bar.close),
            format_sma(sma20[i]),
            format_sma(sma50[i]),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write enriched table {}", path.display()))?;

    Ok(path)
}

fn format_sma(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}
