//! Order flow feature extraction from trades and L2 book updates.

use std::collections::VecDeque;

use tracing::trace;

use crate::types::{BookLevel, Side, WeakSide};

use super::book::BookState;
use super::buckets::AggressionBuckets;
use super::frame::OrderFlowFrame;
use super::rolling::RollingExtreme;

/// Longest trade aggregation horizon (seconds); shorter horizons are
/// carved out of the same buffer at query time.
const TRADE_HORIZON_S: f64 = 10.0;

/// A side is weak when its depth at the tight band is below this fraction
/// of the other side's.
const WEAK_SIDE_FACTOR: f64 = 0.4;

/// Depth bands around mid, as fractions.
const BAND_01: f64 = 0.001;
const BAND_03: f64 = 0.003;
const BAND_05: f64 = 0.005;

#[derive(Debug, Clone, Copy)]
struct TradePoint {
    ts: f64,
    volume: f64,
    side: Side,
}

/// Aggregates trade flow and book state into [`OrderFlowFrame`]s.
///
/// One instance per logical stream; trades and book updates must arrive
/// in non-decreasing timestamp order. All history is pruned eagerly, so
/// the footprint is bounded by the longest horizon.
#[derive(Debug)]
pub struct OrderFlowFeatureExtractor {
    /// Trades within the last [`TRADE_HORIZON_S`] seconds.
    trades: VecDeque<TradePoint>,
    buckets: AggressionBuckets,
    book: BookState,

    highlow_20s: RollingExtreme,
    highlow_30s: RollingExtreme,

    last_price: f64,
    last_tick_ts: f64,
}

impl OrderFlowFeatureExtractor {
    pub fn new() -> Self {
        Self {
            trades: VecDeque::new(),
            buckets: AggressionBuckets::new(),
            book: BookState::new(),
            highlow_20s: RollingExtreme::new(20.0),
            highlow_30s: RollingExtreme::new(30.0),
            last_price: 0.0,
            last_tick_ts: 0.0,
        }
    }

    /// Record one trade from the tape.
    pub fn add_trade(&mut self, ts: f64, price: f64, volume: f64, side: Side) {
        self.last_price = price;
        self.last_tick_ts = ts;
        self.trades.push_back(TradePoint { ts, volume, side });
        self.prune_trades(ts);
        self.buckets.add(ts, volume, side);
    }

    /// Replace the book with a full L2 snapshot.
    pub fn apply_l2_snapshot(&mut self, bids: &[BookLevel], asks: &[BookLevel]) {
        self.book.apply_snapshot(bids, asks);
    }

    /// Merge an L2 delta; `size <= 0` deletes the level.
    pub fn apply_l2_delta(&mut self, bids: &[BookLevel], asks: &[BookLevel]) {
        self.book.apply_delta(bids, asks);
    }

    /// Build a feature frame as of `ts_now`.
    ///
    /// `ts_now <= 0` falls back to the timestamp of the last trade seen.
    /// Prunes stale trade/bucket history and feeds the extrema trackers
    /// as a side effect, which is why this takes `&mut self`.
    pub fn get_frame(&mut self, ts_now: f64) -> OrderFlowFrame {
        let ts_now = if ts_now <= 0.0 {
            self.last_tick_ts
        } else {
            ts_now
        };

        let mut frame = OrderFlowFrame {
            ts: ts_now,
            ..OrderFlowFrame::default()
        };

        self.prune_trades(ts_now);
        self.buckets.prune(ts_now);

        // Partition retained trades into nested age horizons; a trade
        // counts toward every horizon it fits.
        for t in &self.trades {
            let age = ts_now - t.ts;
            if age < 0.0 || age > TRADE_HORIZON_S {
                continue;
            }
            let vol = t.volume;
            match t.side {
                Side::Buy => {
                    frame.buy_vol_10s += vol;
                    if age <= 3.0 {
                        frame.buy_vol_3s += vol;
                    }
                    if age <= 1.0 {
                        frame.buy_vol_1s += vol;
                    }
                }
                Side::Sell => {
                    frame.sell_vol_10s += vol;
                    if age <= 3.0 {
                        frame.sell_vol_3s += vol;
                    }
                    if age <= 1.0 {
                        frame.sell_vol_1s += vol;
                    }
                }
            }
        }

        (frame.buy_share_1s, frame.sell_share_1s) = share(frame.buy_vol_1s, frame.sell_vol_1s);
        (frame.buy_share_3s, frame.sell_share_3s) = share(frame.buy_vol_3s, frame.sell_vol_3s);
        (frame.buy_share_10s, frame.sell_share_10s) =
            share(frame.buy_vol_10s, frame.sell_vol_10s);

        frame.best_bid = self.book.best_bid();
        frame.best_ask = self.book.best_ask();
        frame.mid = if frame.best_bid > 0.0 && frame.best_ask > 0.0 {
            0.5 * (frame.best_bid + frame.best_ask)
        } else {
            self.last_price
        };

        if frame.mid > 0.0 {
            (frame.liq01_bid, frame.liq01_ask) = self.book.depth_within(frame.mid, BAND_01);
            (frame.liq03_bid, frame.liq03_ask) = self.book.depth_within(frame.mid, BAND_03);
            (frame.liq05_bid, frame.liq05_ask) = self.book.depth_within(frame.mid, BAND_05);
        }

        if frame.liq01_bid > 0.0 && frame.liq01_ask > 0.0 {
            if frame.liq01_bid < WEAK_SIDE_FACTOR * frame.liq01_ask {
                frame.weak_side_01 = Some(WeakSide::Bid);
            } else if frame.liq01_ask < WEAK_SIDE_FACTOR * frame.liq01_bid {
                frame.weak_side_01 = Some(WeakSide::Ask);
            }
        }

        if frame.mid > 0.0 {
            self.highlow_20s.add(ts_now, frame.mid);
            self.highlow_30s.add(ts_now, frame.mid);
            frame.is_new_high_20s =
                !self.highlow_20s.is_empty() && frame.mid >= self.highlow_20s.current_max();
            frame.is_new_low_20s =
                !self.highlow_20s.is_empty() && frame.mid <= self.highlow_20s.current_min();
            frame.is_new_high_30s =
                !self.highlow_30s.is_empty() && frame.mid >= self.highlow_30s.current_max();
            frame.is_new_low_30s =
                !self.highlow_30s.is_empty() && frame.mid <= self.highlow_30s.current_min();
        }

        frame.agg_run_dir = self.buckets.run_direction();

        trace!(
            ts = frame.ts,
            mid = frame.mid,
            buy_vol_1s = frame.buy_vol_1s,
            sell_vol_1s = frame.sell_vol_1s,
            "order flow frame"
        );
        frame
    }

    fn prune_trades(&mut self, ts_now: f64) {
        let cutoff = ts_now - TRADE_HORIZON_S;
        while self
            .trades
            .front()
            .map(|t| t.ts < cutoff)
            .unwrap_or(false)
        {
            self.trades.pop_front();
        }
    }
}

impl Default for OrderFlowFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Buy/sell volume shares, (0, 0) when the horizon saw no volume.
fn share(buy: f64, sell: f64) -> (f64, f64) {
    let total = buy + sell;
    if total <= 0.0 {
        return (0.0, 0.0);
    }
    let buy_share = buy / total;
    (buy_share, 1.0 - buy_share)
}
