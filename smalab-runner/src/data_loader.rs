//! Price-table loading and validation.
//!
//! Reads a CSV with named columns `Date`, `Open`, `High`, `Low`, `Close`
//! and optional `SMA_20`/`SMA_50` columns for pre-enriched input. Prices
//! are rounded to 2 decimals on parse so downstream comparisons see the
//! same values the table shows. The loader owns the ordering invariant:
//! rows must be strictly oldest-to-newest with no duplicate dates.

use serde::Deserialize;
use smalab_core::domain::{Bar, SerialDate};
use smalab_core::indicators::round2;
use std::path::Path;
use thiserror::Error;

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open price table {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("malformed row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("rows out of order at row {row}: serial {current} follows {previous}")]
    OutOfOrder {
        row: usize,
        previous: i64,
        current: i64,
    },

    #[error("price table {path} contains no rows")]
    Empty { path: String },
}

/// One raw input row. Field names match the source table headers.
#[derive(Debug, Clone, Deserialize)]
struct PriceRow {
    #[serde(rename = "Date")]
    date: i64,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "SMA_20", default)]
    sma20: Option<f64>,
    #[serde(rename = "SMA_50", default)]
    sma50: Option<f64>,
}

/// A loaded price table: bars plus any pre-enriched SMA columns.
#[derive(Debug, Clone)]
pub struct PriceTable {
    pub bars: Vec<Bar>,
    pub sma20: Vec<Option<f64>>,
    pub sma50: Vec<Option<f64>>,
    /// Data-quality notes (inconsistent OHLC rows). The rows are kept;
    /// these only surface in the run summary.
    pub warnings: Vec<String>,
}

impl PriceTable {
    /// True when the input carried at least one value in each SMA column.
    pub fn has_precomputed_sma(&self) -> bool {
        self.sma20.iter().any(Option::is_some) && self.sma50.iter().any(Option::is_some)
    }
}

/// Load a price table from a CSV file.
pub fn load_price_table(path: &Path) -> Result<PriceTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut bars: Vec<Bar> = Vec::new();
    let mut sma20 = Vec::new();
    let mut sma50 = Vec::new();
    let mut warnings = Vec::new();

    for (i, record) in reader.deserialize::<PriceRow>().enumerate() {
        // Header is line 1; data rows are 1-based after it.
        let row = i + 2;
        let parsed = record.map_err(|source| LoadError::Malformed { row, source })?;

        if let Some(prev) = bars.last() {
            if parsed.date <= prev.date.0 {
                return Err(LoadError::OutOfOrder {
                    row,
                    previous: prev.date.0,
                    current: parsed.date,
                });
            }
        }

        let bar = Bar {
            date: SerialDate(parsed.date),
            open: round2(parsed.open),
            high: round2(parsed.high),
            low: round2(parsed.low),
            close: round2(parsed.close),
        };
        if !bar.is_sane() {
            warnings.push(format!(
                "row {row} (serial {}): inconsistent OHLC",
                parsed.date
            ));
        }

        bars.push(bar);
        sma20.push(parsed.sma20);
        sma50.push(parsed.sma50);
    }

    if bars.is_empty() {
        return Err(LoadError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(PriceTable {
        bars,
        sma20,
        sma50,
        warnings,
    })
}
