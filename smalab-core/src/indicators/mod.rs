//! Indicators — pure functions over bar history.
//!
//! An indicator takes the full bar series and produces a same-length output
//! column, precomputed once before scanning begins. Values are `None` until
//! the lookback window fills; absence is always explicit, never a numeric
//! sentinel.

pub mod sma;

pub use sma::Sma;

use crate::domain::Bar;

/// Trait for indicators.
///
/// Indicators take the full bar series and produce an output column of the
/// same length. The first `lookback()` values are `None` (warmup).
///
/// # Look-ahead guard
/// No value at index t may depend on bars after t.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20").
    fn name(&self) -> &str;

    /// Number of bars consumed before the first available value.
    fn lookback(&self) -> usize;

    /// Compute the column for the entire series.
    ///
    /// Returns a `Vec<Option<f64>>` of the same length as `bars`, with the
    /// first `lookback()` entries `None`.
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>>;
}

/// Round to 2 decimal places, half away from zero.
///
/// Applied at computation and parse time: stop levels and proximity bands
/// compare the rounded values, so rounding later would change trade outcomes.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLC: open = prev close (or close for the first bar),
/// high = max(open, close) + 1.0, low = min(open, close) - 1.0.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    use crate::domain::SerialDate;
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: SerialDate(45000 + i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_away_from_zero() {
        // 0.125 is exactly representable, so the half really is a half.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(1.236), 1.24);
    }

    #[test]
    fn round2_leaves_two_decimals_alone() {
        assert_eq!(round2(102.57), 102.57);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0 / 3.0), 33.33);
    }
}
