//! L2 order book state: two ordered price -> size maps.

use std::collections::BTreeMap;

use crate::types::BookLevel;

/// Total-order key for f64 prices. Prices are finite by contract, so
/// `total_cmp` agrees with the usual numeric order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderedPrice(f64);

impl Eq for OrderedPrice {}

impl PartialOrd for OrderedPrice {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedPrice {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Bid and ask side maps with snapshot/delta maintenance.
///
/// A snapshot replaces both sides; a delta upserts levels, with
/// `size <= 0` deleting the price level.
#[derive(Debug, Default)]
pub struct BookState {
    bids: BTreeMap<OrderedPrice, f64>,
    asks: BTreeMap<OrderedPrice, f64>,
}

impl BookState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both sides with the given levels.
    pub fn apply_snapshot(&mut self, bids: &[BookLevel], asks: &[BookLevel]) {
        self.bids.clear();
        self.asks.clear();
        self.merge(bids, asks);
    }

    /// Merge delta levels into the existing sides.
    pub fn apply_delta(&mut self, bids: &[BookLevel], asks: &[BookLevel]) {
        self.merge(bids, asks);
    }

    fn merge(&mut self, bids: &[BookLevel], asks: &[BookLevel]) {
        for level in bids {
            if level.size <= 0.0 {
                self.bids.remove(&OrderedPrice(level.price));
            } else {
                self.bids.insert(OrderedPrice(level.price), level.size);
            }
        }
        for level in asks {
            if level.size <= 0.0 {
                self.asks.remove(&OrderedPrice(level.price));
            } else {
                self.asks.insert(OrderedPrice(level.price), level.size);
            }
        }
    }

    /// Highest bid price, 0.0 when the side is empty.
    pub fn best_bid(&self) -> f64 {
        self.bids.last_key_value().map_or(0.0, |(p, _)| p.0)
    }

    /// Lowest ask price, 0.0 when the side is empty.
    pub fn best_ask(&self) -> f64 {
        self.asks.first_key_value().map_or(0.0, |(p, _)| p.0)
    }

    /// Resting size within `pct` of `mid`, as (bid_depth, ask_depth).
    ///
    /// The bid lower bound `mid * (1 - pct)` is inclusive; the ask upper
    /// bound `mid * (1 + pct)` is exclusive. Downstream consumers depend
    /// on this asymmetry, keep it.
    pub fn depth_within(&self, mid: f64, pct: f64) -> (f64, f64) {
        let lower = mid * (1.0 - pct);
        let upper = mid * (1.0 + pct);
        let bid_depth: f64 = self
            .bids
            .range(OrderedPrice(lower)..)
            .map(|(_, sz)| sz)
            .sum();
        let ask_depth: f64 = self
            .asks
            .range(..OrderedPrice(upper))
            .map(|(_, sz)| sz)
            .sum();
        (bid_depth, ask_depth)
    }
}
