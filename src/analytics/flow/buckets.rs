//! Per-second aggression buckets and run detection.

use std::collections::VecDeque;

use crate::types::{RunDirection, Side};

/// Buckets older than this many whole seconds behind the newest are
/// dropped.
const BUCKET_RETENTION_SECS: i64 = 5;

/// Buy share at or above which a bucket counts as buy-dominated, and the
/// mirrored sell cutoff.
const BUY_SHARE_CUTOFF: f64 = 0.7;
const SELL_SHARE_CUTOFF: f64 = 0.3;

/// One second of aggregated taker flow.
#[derive(Debug, Clone, Copy)]
struct AggBucket {
    /// Whole second this bucket covers, `floor(ts)`.
    sec: i64,
    buy: f64,
    sell: f64,
}

impl AggBucket {
    fn net(&self) -> f64 {
        self.buy - self.sell
    }

    /// Direction of this bucket, if flow is one-sided enough.
    fn direction(&self) -> Option<RunDirection> {
        let total = self.buy + self.sell;
        if total <= 0.0 {
            return None;
        }
        let share = self.buy / total;
        if self.net() > 0.0 && share >= BUY_SHARE_CUTOFF {
            Some(RunDirection::Buy)
        } else if self.net() < 0.0 && share <= SELL_SHARE_CUTOFF {
            Some(RunDirection::Sell)
        } else {
            None
        }
    }
}

/// Rolling 1-second aggression buckets over the last few seconds.
///
/// Independent of the trade-horizon buffer; only feeds run detection.
#[derive(Debug, Default)]
pub struct AggressionBuckets {
    buckets: VecDeque<AggBucket>,
}

impl AggressionBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a trade into its second's bucket.
    pub fn add(&mut self, ts: f64, volume: f64, side: Side) {
        let sec = ts.floor() as i64;
        let needs_new = self.buckets.back().map(|b| b.sec != sec).unwrap_or(true);
        if needs_new {
            self.buckets.push_back(AggBucket {
                sec,
                buy: 0.0,
                sell: 0.0,
            });
        }
        let bucket = self.buckets.back_mut().expect("bucket just ensured");
        match side {
            Side::Buy => bucket.buy += volume,
            Side::Sell => bucket.sell += volume,
        }
        self.prune_before(sec - BUCKET_RETENTION_SECS);
    }

    /// Drop buckets that fell out of the retention horizon at `ts_now`.
    pub fn prune(&mut self, ts_now: f64) {
        self.prune_before(ts_now.floor() as i64 - BUCKET_RETENTION_SECS);
    }

    fn prune_before(&mut self, cutoff_sec: i64) {
        while self.buckets.front().map(|b| b.sec < cutoff_sec).unwrap_or(false) {
            self.buckets.pop_front();
        }
    }

    /// Aggressor run over the three most recent buckets: all three must
    /// share a non-ambiguous direction and show non-decreasing absolute
    /// net flow in chronological order.
    pub fn run_direction(&self) -> Option<RunDirection> {
        if self.buckets.len() < 3 {
            return None;
        }
        let n = self.buckets.len();
        let b1 = &self.buckets[n - 3];
        let b2 = &self.buckets[n - 2];
        let b3 = &self.buckets[n - 1];

        let d1 = b1.direction()?;
        let d2 = b2.direction()?;
        let d3 = b3.direction()?;
        if d1 != d2 || d2 != d3 {
            return None;
        }

        let (n1, n2, n3) = (b1.net().abs(), b2.net().abs(), b3.net().abs());
        if n1 <= n2 && n2 <= n3 {
            Some(d3)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerating_buy_run() {
        let mut buckets = AggressionBuckets::new();
        // Three seconds of pure buying with growing net flow.
        buckets.add(10.2, 1.0, Side::Buy);
        buckets.add(11.4, 2.0, Side::Buy);
        buckets.add(12.1, 3.0, Side::Buy);
        assert_eq!(buckets.run_direction(), Some(RunDirection::Buy));
    }

    #[test]
    fn test_decelerating_flow_is_not_a_run() {
        let mut buckets = AggressionBuckets::new();
        buckets.add(10.0, 3.0, Side::Sell);
        buckets.add(11.0, 2.0, Side::Sell);
        buckets.add(12.0, 1.0, Side::Sell);
        // One-sided but fading: no run.
        assert_eq!(buckets.run_direction(), None);
    }

    #[test]
    fn test_mixed_bucket_breaks_run() {
        let mut buckets = AggressionBuckets::new();
        buckets.add(10.0, 1.0, Side::Buy);
        // Second bucket is 50/50: share below the 0.7 cutoff.
        buckets.add(11.0, 2.0, Side::Buy);
        buckets.add(11.5, 2.0, Side::Sell);
        buckets.add(12.0, 3.0, Side::Buy);
        assert_eq!(buckets.run_direction(), None);
    }

    #[test]
    fn test_share_cutoff_inclusive() {
        let mut buckets = AggressionBuckets::new();
        // Exactly 70% buy share in each bucket, still counts.
        for sec in 10..13 {
            let scale = (sec - 9) as f64;
            buckets.add(sec as f64, 7.0 * scale, Side::Buy);
            buckets.add(sec as f64 + 0.5, 3.0 * scale, Side::Sell);
        }
        assert_eq!(buckets.run_direction(), Some(RunDirection::Buy));
    }

    #[test]
    fn test_needs_three_buckets() {
        let mut buckets = AggressionBuckets::new();
        buckets.add(10.0, 5.0, Side::Buy);
        buckets.add(11.0, 6.0, Side::Buy);
        assert_eq!(buckets.run_direction(), None);
    }

    #[test]
    fn test_retention_pruning() {
        let mut buckets = AggressionBuckets::new();
        buckets.add(10.0, 1.0, Side::Buy);
        buckets.add(11.0, 2.0, Side::Buy);
        buckets.add(12.0, 3.0, Side::Buy);
        assert_eq!(buckets.run_direction(), Some(RunDirection::Buy));

        // A query far in the future drops everything.
        buckets.prune(30.0);
        assert_eq!(buckets.run_direction(), None);
    }
}
