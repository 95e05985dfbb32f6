//! Sweep-fade mean reversion strategy.
//!
//! Fades detected sweeps: an up sweep opens a short, a down sweep opens a
//! long. Exits on take-profit, stop-loss, or a time stop, and force-closes
//! if another sweep fires in the same market direction as the one that
//! opened the position (the move is continuing, the fade thesis is wrong).

use serde::{Deserialize, Serialize};

use tracing::debug;

use crate::analytics::StrategyConfig;
use crate::types::{SweepDirection, SweepEvent};

/// What the strategy wants done after a callback.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionKind {
    #[default]
    Idle,
    OpenLong,
    OpenShort,
    Close,
}

/// One action per strategy callback invocation.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct StrategyAction {
    pub kind: ActionKind,
    /// +1 long, -1 short, 0 idle. Close carries the closed position's
    /// direction.
    pub dir: i8,
    pub price: f64,
    pub ts: f64,
}

/// An open position held by the strategy.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// +1 long, -1 short; never 0 while the position exists.
    pub dir: i8,
    pub entry_price: f64,
    pub entry_ts: f64,
}

/// Flat/InPosition state machine driven by sweep events and price ticks.
#[derive(Debug)]
pub struct MeanReversionStrategy {
    config: StrategyConfig,
    position: Option<Position>,
}

impl MeanReversionStrategy {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            position: None,
        }
    }

    pub fn in_position(&self) -> bool {
        self.position.is_some()
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// React to a detected sweep.
    ///
    /// Flat: fade the sweep (up opens short, down opens long) at the
    /// sweep's end price, with the entry timestamp pushed out by the
    /// configured delay. In position: a sweep in the same market
    /// direction as the opening one means the move is continuing, so
    /// close immediately regardless of PnL; anything else is ignored.
    pub fn on_sweep(&mut self, event: &SweepEvent) -> StrategyAction {
        if let Some(pos) = self.position {
            // The sweep that opened this position pointed opposite to the
            // position (we fade); a repeat of it has direction == -dir.
            if event.direction.sign() == -pos.dir {
                debug!(
                    dir = pos.dir,
                    price = event.price_end,
                    "continuation sweep, force close"
                );
                self.position = None;
                return StrategyAction {
                    kind: ActionKind::Close,
                    dir: pos.dir,
                    price: event.price_end,
                    ts: event.ts_end,
                };
            }
            return StrategyAction::default();
        }

        let (kind, dir) = match event.direction {
            SweepDirection::Up => (ActionKind::OpenShort, -1),
            SweepDirection::Down => (ActionKind::OpenLong, 1),
        };

        // Entry is delayed to model execution latency; the position is
        // recorded immediately with the delayed timestamp.
        let ts_enter = event.ts_end + self.config.delay_ms / 1000.0;
        self.position = Some(Position {
            dir,
            entry_price: event.price_end,
            entry_ts: ts_enter,
        });
        debug!(?kind, dir, price = event.price_end, ts = ts_enter, "open");

        StrategyAction {
            kind,
            dir,
            price: event.price_end,
            ts: ts_enter,
        }
    }

    /// Evaluate exits on a price observation.
    ///
    /// Checks take-profit, then stop-loss, then the time stop; the first
    /// match closes. Flat state returns Idle.
    pub fn on_tick(&mut self, ts: f64, price: f64) -> StrategyAction {
        let Some(pos) = self.position else {
            return StrategyAction::default();
        };

        let ret_bp = (price - pos.entry_price) / pos.entry_price * 10_000.0;
        let signed_ret = f64::from(pos.dir) * ret_bp;

        let take_profit = signed_ret >= self.config.tp_bp;
        let stop_loss = !take_profit && -signed_ret >= self.config.sl_bp;
        let time_exit = !take_profit && !stop_loss && ts - pos.entry_ts >= self.config.hold_sec;

        if take_profit || stop_loss || time_exit {
            debug!(
                dir = pos.dir,
                ret_bp,
                take_profit,
                stop_loss,
                time_exit,
                "close"
            );
            self.position = None;
            return StrategyAction {
                kind: ActionKind::Close,
                dir: pos.dir,
                price,
                ts,
            };
        }

        StrategyAction::default()
    }
}

impl Default for MeanReversionStrategy {
    fn default() -> Self {
        Self::new(StrategyConfig::default())
    }
}
