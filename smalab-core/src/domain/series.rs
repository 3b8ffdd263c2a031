//! Enriched series — bars carrying both moving averages.
//!
//! Setup detection and trade simulation operate on this filtered view: only
//! rows where both SMA columns are available survive.

use super::bar::Bar;
use super::date::SerialDate;
use serde::{Deserialize, Serialize};

/// A bar with both SMA columns present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBar {
    pub date: SerialDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub sma20: f64,
    pub sma50: f64,
}

/// Zip a bar series with its two SMA columns, keeping only rows where both
/// averages are available.
///
/// A value of exactly 0.0 counts as unavailable: pre-enriched input tables
/// use 0 where the window was not yet full, so the filter treats it the same
/// as an absent cell.
///
/// # Panics
/// Panics if the column lengths differ from the bar count.
pub fn enrich(bars: &[Bar], sma20: &[Option<f64>], sma50: &[Option<f64>]) -> Vec<EnrichedBar> {
    assert_eq!(bars.len(), sma20.len(), "sma20 column length mismatch");
    assert_eq!(bars.len(), sma50.len(), "sma50 column length mismatch");

    bars.iter()
        .zip(sma20.iter().zip(sma50.iter()))
        .filter_map(|(bar, (s20, s50))| match (s20, s50) {
            (Some(s20), Some(s50)) if *s20 != 0.0 && *s50 != 0.0 => Some(EnrichedBar {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                sma20: *s20,
                sma50: *s50,
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bars(n: usize) -> Vec<Bar> {
        (0..n)
            .map(|i| Bar {
                date: SerialDate(45000 + i as i64),
                open: 100.0 + i as f64,
                high: 102.0 + i as f64,
                low: 99.0 + i as f64,
                close: 101.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn keeps_only_rows_with_both_averages() {
        let bars = make_bars(4);
        let sma20 = vec![None, Some(100.0), Some(101.0), Some(102.0)];
        let sma50 = vec![None, None, Some(99.0), Some(100.0)];

        let series = enrich(&bars, &sma20, &sma50);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, SerialDate(45002));
        assert_eq!(series[0].sma20, 101.0);
        assert_eq!(series[0].sma50, 99.0);
    }

    #[test]
    fn zero_counts_as_unavailable() {
        let bars = make_bars(3);
        let sma20 = vec![Some(0.0), Some(100.0), Some(101.0)];
        let sma50 = vec![Some(95.0), Some(0.0), Some(99.0)];

        let series = enrich(&bars, &sma20, &sma50);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, SerialDate(45002));
    }

    #[test]
    fn preserves_input_order() {
        let bars = make_bars(3);
        let sma20 = vec![Some(100.0), Some(101.0), Some(102.0)];
        let sma50 = vec![Some(95.0), Some(96.0), Some(97.0)];

        let series = enrich(&bars, &sma20, &sma50);
        assert_eq!(series.len(), 3);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    #[should_panic(expected = "sma20 column length mismatch")]
    fn rejects_mismatched_columns() {
        let bars = make_bars(3);
        enrich(&bars, &[None, None], &[None, None, None]);
    }
}
