//! Day-by-day trade walk from a signal to a resolved exit.
//!
//! Entry is the open one bar after the signal. The stop starts at the signal
//! bar's SMA 20 and ratchets with the average thereafter; the target sits at
//! a configurable multiple of the initial risk. Exits realize on the next
//! bar's open, except at the end of the series where the last close is used.

use crate::domain::{Direction, EnrichedBar, Outcome, SerialDate, Trade};
use crate::signal::Signal;
use serde::{Deserialize, Serialize};

/// Tunables for the trade walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Target distance as a multiple of the initial risk.
    pub reward_multiple: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            reward_multiple: 2.0,
        }
    }
}

/// Walk forward from `signal` and produce a completed trade, or `None` when
/// the entry is rejected or there is no bar left to enter on.
pub fn simulate_trade(
    series: &[EnrichedBar],
    signal: &Signal,
    config: &SimulatorConfig,
) -> Option<Trade> {
    let s = signal.index;
    let entry_index = s + 1;
    if entry_index >= series.len() {
        return None;
    }

    let signal_bar = &series[s];
    let entry_bar = &series[entry_index];
    let entry_price = entry_bar.open;
    let initial_stop_loss = signal_bar.sma20;

    // Entry filter: an open below any of the signal bar's reference levels
    // invalidates the setup. Applied as-is for both directions.
    if entry_price < signal_bar.sma20
        || entry_price < signal_bar.open
        || entry_price < signal_bar.close
    {
        return None;
    }

    let bullish = signal.direction == Direction::Bullish;
    let risk = (entry_price - initial_stop_loss).abs();
    let target_price = if bullish {
        entry_price + risk * config.reward_multiple
    } else {
        entry_price - risk * config.reward_multiple
    };

    let mut stop = initial_stop_loss;
    let mut duration_days = 0usize;
    let mut exit: Option<(SerialDate, f64)> = None;

    let last = series.len() - 1;
    for i in entry_index..series.len() {
        let bar = &series[i];
        duration_days += 1;

        // Ratchet: the stop never moves against the trade.
        if bullish {
            if bar.sma20 > stop {
                stop = bar.sma20;
            }
        } else if bar.sma20 < stop {
            stop = bar.sma20;
        }

        let stop_hit = if bullish {
            bar.close <= stop
        } else {
            bar.close >= stop
        };
        // Stop before target: on a bar that satisfies both, the stop wins.
        let target_hit = if bullish {
            bar.close >= target_price
        } else {
            bar.close <= target_price
        };

        if stop_hit || target_hit {
            exit = Some(if i < last {
                (series[i + 1].date, series[i + 1].open)
            } else {
                // No lookahead bar left; settle at the final close.
                (bar.date, bar.close)
            });
            break;
        }

        if i == last {
            exit = Some((bar.date, bar.close));
        }
    }

    let (exit_date, exit_price) = exit?;

    let profitable = if bullish {
        exit_price > entry_price
    } else {
        exit_price < entry_price
    };
    let profit_loss = if bullish {
        exit_price - entry_price
    } else {
        entry_price - exit_price
    };

    Some(Trade {
        signal_date: signal.date,
        direction: signal.direction,
        entry_date: entry_bar.date,
        entry_price,
        initial_stop_loss,
        target_price,
        exit_date,
        exit_price,
        duration_days,
        outcome: if profitable {
            Outcome::Profit
        } else {
            Outcome::Loss
        },
        profit_loss,
        profit_loss_pct: profit_loss / entry_price * 100.0,
    })
}
