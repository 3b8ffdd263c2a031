//! SMA pullback setup — trend-continuation entries near a rising SMA 20.
//!
//! Bullish: both SMAs rising three days straight, SMA 20 above SMA 50, and a
//! close that either reclaims the SMA 20 from below or holds above it on an
//! up day, within 1.5% of the average. The bearish setup mirrors every
//! inequality but keeps its own 1.0–1.5% proximity band.

use super::SetupDetector;
use crate::domain::{Direction, EnrichedBar};
use serde::{Deserialize, Serialize};

/// Inclusive band on `|close - sma20| / sma20 * 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityBand {
    pub min_pct: f64,
    pub max_pct: f64,
}

impl ProximityBand {
    pub fn contains(&self, diff_pct: f64) -> bool {
        diff_pct >= self.min_pct && diff_pct <= self.max_pct
    }
}

/// Pullback detector over the enriched series.
#[derive(Debug, Clone)]
pub struct SmaPullback {
    pub bullish_band: ProximityBand,
    pub bearish_band: ProximityBand,
}

impl Default for SmaPullback {
    fn default() -> Self {
        Self {
            bullish_band: ProximityBand {
                min_pct: 0.0,
                max_pct: 1.5,
            },
            // Offset band: the bearish setup only fires once the close has
            // already pulled at least 1% away from the SMA 20.
            bearish_band: ProximityBand {
                min_pct: 1.0,
                max_pct: 1.5,
            },
        }
    }
}

impl SmaPullback {
    fn bullish_at(&self, series: &[EnrichedBar], i: usize) -> bool {
        let bar = &series[i];

        let sma20_rising = series[i].sma20 > series[i - 1].sma20
            && series[i - 1].sma20 > series[i - 2].sma20
            && series[i - 2].sma20 > series[i - 3].sma20;

        let sma50_rising = series[i].sma50 > series[i - 1].sma50
            && series[i - 1].sma50 > series[i - 2].sma50
            && series[i - 2].sma50 > series[i - 3].sma50;

        let sma20_above_sma50 = bar.sma20 > bar.sma50;

        // Reclaim from below, or an up day that stayed above the average.
        let price_condition = (bar.open < bar.sma20 && bar.close > bar.sma20)
            || (bar.open > bar.sma20 && bar.close > bar.open);

        let close_near_sma20 = self.bullish_band.contains(diff_pct(bar));

        sma20_rising && sma50_rising && sma20_above_sma50 && price_condition && close_near_sma20
    }

    fn bearish_at(&self, series: &[EnrichedBar], i: usize) -> bool {
        let bar = &series[i];

        let sma20_falling = series[i].sma20 < series[i - 1].sma20
            && series[i - 1].sma20 < series[i - 2].sma20
            && series[i - 2].sma20 < series[i - 3].sma20;

        let sma50_falling = series[i].sma50 < series[i - 1].sma50
            && series[i - 1].sma50 < series[i - 2].sma50
            && series[i - 2].sma50 < series[i - 3].sma50;

        let sma20_below_sma50 = bar.sma20 < bar.sma50;

        let price_condition = (bar.open > bar.sma20 && bar.close < bar.sma20)
            || (bar.open < bar.sma20 && bar.close < bar.open);

        let close_near_sma20 = self.bearish_band.contains(diff_pct(bar));

        sma20_falling && sma50_falling && sma20_below_sma50 && price_condition && close_near_sma20
    }
}

fn diff_pct(bar: &EnrichedBar) -> f64 {
    ((bar.close - bar.sma20) / bar.sma20).abs() * 100.0
}

impl SetupDetector for SmaPullback {
    fn name(&self) -> &str {
        "sma_pullback"
    }

    fn lookback(&self) -> usize {
        3
    }

    fn matches(&self, series: &[EnrichedBar], index: usize, direction: Direction) -> bool {
        if index < self.lookback() || index >= series.len() {
            return false;
        }
        match direction {
            Direction::Bullish => self.bullish_at(series, index),
            Direction::Bearish => self.bearish_at(series, index),
        }
    }
}
