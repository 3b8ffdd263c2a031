//! Simple Moving Average (SMA).
//!
//! Trailing mean of close prices over a fixed window, rounded to 2 decimals
//! per value. Lookback: period - 1 (first available value at index period-1).

use super::{round2, Indicator};
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let n = bars.len();
        let mut result = vec![None; n];

        if n < self.period {
            return result;
        }

        // Fresh window sum per index: each value is a plain mean of its own
        // window, independent of accumulation order.
        for i in (self.period - 1)..n {
            let sum: f64 = bars[(i + 1 - self.period)..=i]
                .iter()
                .map(|bar| bar.close)
                .sum();
            result[i] = Some(round2(sum / self.period as f64));
        }

        result
    }
}
