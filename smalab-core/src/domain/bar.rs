//! Bar — one trading day of OHLC data.

use super::date::SerialDate;
use serde::{Deserialize, Serialize};

/// OHLC bar for a single trading day.
///
/// Prices carry 2-decimal precision; the loader rounds on parse so every
/// downstream comparison sees the same values the table shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: SerialDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// Basic OHLC sanity check: high is the top, low is the bottom,
    /// prices positive.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}
