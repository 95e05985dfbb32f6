//! Rolling extrema over a sliding time window.

use std::collections::VecDeque;

/// Tracks the max and min of a value stream over a fixed time horizon
/// with amortized O(1) insertion.
///
/// Two monotonic deques: the max queue keeps values decreasing from the
/// front, the min queue increasing, so the current extreme is always the
/// front entry. Ties are absorbed on insert (`<=` / `>=` pops), which
/// makes the new-extreme comparison inclusive: a value equal to the
/// running max still reads back as the max.
#[derive(Debug)]
pub struct RollingExtreme {
    window_s: f64,
    max_q: VecDeque<(f64, f64)>,
    min_q: VecDeque<(f64, f64)>,
}

impl RollingExtreme {
    pub fn new(window_s: f64) -> Self {
        Self {
            window_s,
            max_q: VecDeque::new(),
            min_q: VecDeque::new(),
        }
    }

    /// Record an observation and expire anything older than the horizon.
    pub fn add(&mut self, ts: f64, value: f64) {
        while self.max_q.back().map(|(_, v)| *v <= value).unwrap_or(false) {
            self.max_q.pop_back();
        }
        self.max_q.push_back((ts, value));

        while self.min_q.back().map(|(_, v)| *v >= value).unwrap_or(false) {
            self.min_q.pop_back();
        }
        self.min_q.push_back((ts, value));

        self.evict(ts);
    }

    /// Drop entries that aged out of the window.
    pub fn evict(&mut self, ts_now: f64) {
        while self
            .max_q
            .front()
            .map(|(t, _)| ts_now - t > self.window_s).unwrap_or(false)
        {
            self.max_q.pop_front();
        }
        while self
            .min_q
            .front()
            .map(|(t, _)| ts_now - t > self.window_s).unwrap_or(false)
        {
            self.min_q.pop_front();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max_q.is_empty() || self.min_q.is_empty()
    }

    /// Maximum within the window, 0.0 when empty.
    pub fn current_max(&self) -> f64 {
        self.max_q.front().map_or(0.0, |(_, v)| *v)
    }

    /// Minimum within the window, 0.0 when empty.
    pub fn current_min(&self) -> f64 {
        self.min_q.front().map_or(0.0, |(_, v)| *v)
    }
}
