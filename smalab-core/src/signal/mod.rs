//! Setup detection — scans the enriched series for entry patterns.
//!
//! Detectors are pure: enriched bar history in, yes/no out. They never see
//! trades, statistics, or any other downstream state, and a detector must
//! only read `series[..=index]`. Scanning returns an owned signal list; no
//! accumulator is shared across stages.

pub mod sma_pullback;

pub use sma_pullback::{ProximityBand, SmaPullback};

use crate::domain::{Direction, EnrichedBar, SerialDate};
use serde::{Deserialize, Serialize};

/// A bar index in the enriched series where a setup predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub index: usize,
    pub date: SerialDate,
    pub direction: Direction,
}

/// Trait for entry-setup detectors.
pub trait SetupDetector: Send + Sync {
    /// Human-readable name (e.g., "sma_pullback").
    fn name(&self) -> &str;

    /// Bars of history required before `index` for the predicate to be
    /// evaluable.
    fn lookback(&self) -> usize;

    /// Whether the setup holds at `index` in the given direction.
    fn matches(&self, series: &[EnrichedBar], index: usize, direction: Direction) -> bool;
}

/// Scan the series and collect every signal in the enabled directions.
///
/// Indices run from `lookback()` to `len - 2` inclusive: the trailing bar is
/// reserved so every signal has at least one bar of lookahead for entry.
/// Signals may land arbitrarily close together; there is no cooldown.
pub fn scan_signals(
    series: &[EnrichedBar],
    detector: &dyn SetupDetector,
    directions: &[Direction],
) -> Vec<Signal> {
    let mut signals = Vec::new();
    if series.len() < 2 {
        return signals;
    }

    for index in detector.lookback()..series.len() - 1 {
        for &direction in directions {
            if detector.matches(series, index, direction) {
                signals.push(Signal {
                    index,
                    date: series[index].date,
                    direction,
                });
            }
        }
    }

    signals
}

/// Null detector — never matches. Used as a stub in tests that don't need
/// real setup detection.
pub struct NullSetup;

impl SetupDetector for NullSetup {
    fn name(&self) -> &str {
        "null"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn matches(&self, _series: &[EnrichedBar], _index: usize, _direction: Direction) -> bool {
        false
    }
}
