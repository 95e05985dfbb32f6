//! Sweep detection event types.

use serde::{Deserialize, Serialize};

use super::SweepDirection;

/// Metadata for one detected liquidity sweep.
///
/// `ts_start` and `price_start` describe the tape just before the burst:
/// the oldest tick still inside the short window, and the price of the
/// last tick evicted from it.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SweepEvent {
    /// Timestamp of the oldest tick in the short window, seconds.
    pub ts_start: f64,
    /// Timestamp of the triggering tick, seconds.
    pub ts_end: f64,
    /// Price just before the burst window.
    pub price_start: f64,
    /// Price of the triggering tick.
    pub price_end: f64,
    /// Total traded volume inside the short window.
    pub volume_total: f64,
    /// Dominant aggressor direction of the burst.
    pub direction: SweepDirection,
}
