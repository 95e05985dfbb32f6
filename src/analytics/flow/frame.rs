//! Point-in-time order flow feature frame.

use serde::{Deserialize, Serialize};

use crate::types::{RunDirection, WeakSide};

/// Snapshot of short-horizon order flow and book depth.
///
/// Recomputed fresh on every [`get_frame`] call, never persisted. A query
/// made before any trade or book data returns the all-default frame.
///
/// [`get_frame`]: super::OrderFlowFeatureExtractor::get_frame
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct OrderFlowFrame {
    /// Query time (seconds).
    pub ts: f64,
    /// Mid price, or the last trade price when a side is missing.
    pub mid: f64,
    /// Best bid, 0.0 when the bid side is empty.
    pub best_bid: f64,
    /// Best ask, 0.0 when the ask side is empty.
    pub best_ask: f64,

    // === Taker volume by horizon ===
    pub buy_vol_1s: f64,
    pub sell_vol_1s: f64,
    pub buy_vol_3s: f64,
    pub sell_vol_3s: f64,
    pub buy_vol_10s: f64,
    pub sell_vol_10s: f64,

    // === Volume shares, (0, 0) when the horizon is empty ===
    pub buy_share_1s: f64,
    pub sell_share_1s: f64,
    pub buy_share_3s: f64,
    pub sell_share_3s: f64,
    pub buy_share_10s: f64,
    pub sell_share_10s: f64,

    // === Resting depth within a band around mid ===
    /// Bid/ask depth within 0.1% of mid.
    pub liq01_bid: f64,
    pub liq01_ask: f64,
    /// Bid/ask depth within 0.3% of mid.
    pub liq03_bid: f64,
    pub liq03_ask: f64,
    /// Bid/ask depth within 0.5% of mid.
    pub liq05_bid: f64,
    pub liq05_ask: f64,

    // === Mid price extremes ===
    pub is_new_high_20s: bool,
    pub is_new_low_20s: bool,
    pub is_new_high_30s: bool,
    pub is_new_low_30s: bool,

    /// Accelerating one-sided aggression over the last three seconds.
    pub agg_run_dir: Option<RunDirection>,
    /// Thin side of the book at the 0.1% band.
    pub weak_side_01: Option<WeakSide>,
}
