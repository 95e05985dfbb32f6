//! Liquidity sweep detection from the trade tape.
//!
//! Maintains two nested sliding time windows over ticks: a short burst
//! window and a long baseline window. A sweep fires when short-window
//! volume exceeds a multiple of what the baseline rate would predict,
//! with hysteresis so a sustained burst produces one event, not one per
//! tick.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::analytics::SweepConfig;
use crate::types::{Side, SweepDirection, SweepEvent, SweepSignal, Tick};

/// Factor a side's short-window volume must exceed the other side's by
/// to count as a directional sweep.
const DIRECTION_DOMINANCE: f64 = 1.5;

/// Edge-triggered burst detector over a single trade stream.
///
/// Ticks must arrive in non-decreasing timestamp order; both windows are
/// evicted eagerly on every call, so memory stays bounded by the long
/// horizon.
#[derive(Debug)]
pub struct SweepModel {
    config: SweepConfig,

    /// Ticks within the last `short_window_s` seconds.
    window_short: VecDeque<Tick>,
    /// Ticks within the last `long_window_s` seconds (superset of short).
    window_long: VecDeque<Tick>,

    short_buy_vol: f64,
    short_sell_vol: f64,
    long_buy_vol: f64,
    long_sell_vol: f64,

    /// Debounce: set while a burst is ongoing, cleared when the volume
    /// ratio falls below half the trigger threshold.
    in_sweep: bool,

    /// Price of the most recent tick evicted from the short window,
    /// used as the approximate pre-burst price.
    price_before_window: Option<f64>,

    last_event: Option<SweepEvent>,
}

impl SweepModel {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            window_short: VecDeque::new(),
            window_long: VecDeque::new(),
            short_buy_vol: 0.0,
            short_sell_vol: 0.0,
            long_buy_vol: 0.0,
            long_sell_vol: 0.0,
            in_sweep: false,
            price_before_window: None,
            last_event: None,
        }
    }

    /// Feed one tick; returns the sweep signal for this tick.
    ///
    /// At most one `UpSweep`/`DownSweep` is emitted per threshold
    /// crossing; subsequent elevated ticks return `NoSignal` until the
    /// ratio decays below half the threshold and re-crosses.
    pub fn process_tick(&mut self, tick: &Tick) -> SweepSignal {
        let ts = tick.timestamp;
        self.evict_old(ts);

        self.window_short.push_back(*tick);
        self.window_long.push_back(*tick);
        match tick.side {
            Side::Buy => {
                self.short_buy_vol += tick.volume;
                self.long_buy_vol += tick.volume;
            }
            Side::Sell => {
                self.short_sell_vol += tick.volume;
                self.long_sell_vol += tick.volume;
            }
        }

        let short_total = self.short_buy_vol + self.short_sell_vol;
        let long_total = self.long_buy_vol + self.long_sell_vol;
        if long_total <= 0.0 {
            return SweepSignal::NoSignal;
        }

        // Short-window volume expected if activity were uniform over the
        // baseline window.
        let expected_short =
            long_total / self.config.long_window_s * self.config.short_window_s;
        if expected_short <= 0.0 {
            return SweepSignal::NoSignal;
        }

        let ratio = short_total / expected_short;

        if ratio < 0.5 * self.config.threshold_ratio && self.in_sweep {
            trace!(ratio, "sweep detector re-armed");
            self.in_sweep = false;
        }

        if self.in_sweep {
            // Ongoing burst already produced its event.
            return SweepSignal::NoSignal;
        }

        if ratio < self.config.threshold_ratio {
            return SweepSignal::NoSignal;
        }

        self.in_sweep = true;

        let direction = if self.short_buy_vol > DIRECTION_DOMINANCE * self.short_sell_vol {
            Some(SweepDirection::Up)
        } else if self.short_sell_vol > DIRECTION_DOMINANCE * self.short_buy_vol {
            Some(SweepDirection::Down)
        } else {
            // Threshold exceeded with no clear side: debounce anyway,
            // emit nothing.
            None
        };

        match direction {
            Some(direction) => {
                let front = self.window_short.front().copied().unwrap_or(*tick);
                let event = SweepEvent {
                    ts_start: front.timestamp,
                    ts_end: ts,
                    price_start: self.price_before_window.unwrap_or(front.price),
                    price_end: tick.price,
                    volume_total: short_total,
                    direction,
                };
                debug!(
                    ?direction,
                    ratio,
                    volume_total = event.volume_total,
                    ts_end = event.ts_end,
                    "sweep triggered"
                );
                self.last_event = Some(event);
                match direction {
                    SweepDirection::Up => SweepSignal::UpSweep,
                    SweepDirection::Down => SweepSignal::DownSweep,
                }
            }
            None => SweepSignal::NoSignal,
        }
    }

    /// Most recent directional sweep, if any has fired.
    pub fn last_event(&self) -> Option<&SweepEvent> {
        self.last_event.as_ref()
    }

    /// Drop ticks that aged out of each window, keeping the running sums
    /// in step. The two windows are evicted independently; a tick leaves
    /// the short window long before it leaves the long one.
    fn evict_old(&mut self, now: f64) {
        while let Some(front) = self.window_short.front() {
            if now - front.timestamp <= self.config.short_window_s {
                break;
            }
            match front.side {
                Side::Buy => self.short_buy_vol -= front.volume,
                Side::Sell => self.short_sell_vol -= front.volume,
            }
            self.price_before_window = Some(front.price);
            self.window_short.pop_front();
        }
        while let Some(front) = self.window_long.front() {
            if now - front.timestamp <= self.config.long_window_s {
                break;
            }
            match front.side {
                Side::Buy => self.long_buy_vol -= front.volume,
                Side::Sell => self.long_sell_vol -= front.volume,
            }
            self.window_long.pop_front();
        }
    }
}

impl Default for SweepModel {
    fn default() -> Self {
        Self::new(SweepConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(ts: f64, price: f64, volume: f64, side: Side) -> Tick {
        Tick::new(ts, price, volume, side)
    }

    #[test]
    fn test_window_retention_bounds() {
        let mut model = SweepModel::new(SweepConfig {
            short_window_s: 0.3,
            long_window_s: 2.0,
            threshold_ratio: 1000.0, // never triggers
        });

        for i in 0..50 {
            let ts = i as f64 * 0.1;
            model.process_tick(&tick(ts, 100.0, 1.0, Side::Buy));
            let now = ts;
            assert!(model
                .window_short
                .iter()
                .all(|t| now - t.timestamp <= 0.3));
            assert!(model
                .window_long
                .iter()
                .all(|t| now - t.timestamp <= 2.0));
        }

        // Sums must match window contents after heavy eviction.
        let short_sum: f64 = model.window_short.iter().map(|t| t.volume).sum();
        assert!((model.short_buy_vol - short_sum).abs() < 1e-9);
        let long_sum: f64 = model.window_long.iter().map(|t| t.volume).sum();
        assert!((model.long_buy_vol - long_sum).abs() < 1e-9);
    }

    #[test]
    fn test_burst_fires_once_then_suppressed() {
        // 20 sell ticks of volume 1 at 0.01s spacing. The
        // short window holds ~all recent volume, far above the baseline
        // rate, so the first crossing fires DownSweep and every later
        // elevated tick is silent.
        let mut model = SweepModel::new(SweepConfig {
            short_window_s: 0.3,
            long_window_s: 10.0,
            threshold_ratio: 3.0,
        });

        let mut signals = Vec::new();
        for i in 0..20 {
            let ts = i as f64 * 0.01;
            signals.push(model.process_tick(&tick(ts, 100.0, 1.0, Side::Sell)));
        }

        let down_count = signals
            .iter()
            .filter(|s| **s == SweepSignal::DownSweep)
            .count();
        assert_eq!(down_count, 1);
        assert_eq!(signals[0], SweepSignal::DownSweep);
        assert!(signals[1..]
            .iter()
            .all(|s| *s == SweepSignal::NoSignal));

        let event = model.last_event().expect("directional event recorded");
        assert_eq!(event.direction, SweepDirection::Down);
        assert!(event.volume_total > 0.0);
    }

    #[test]
    fn test_rearm_after_ratio_decay() {
        let mut model = SweepModel::new(SweepConfig {
            short_window_s: 0.3,
            long_window_s: 10.0,
            threshold_ratio: 3.0,
        });

        // First burst.
        assert_eq!(
            model.process_tick(&tick(0.0, 100.0, 10.0, Side::Buy)),
            SweepSignal::UpSweep
        );
        assert!(model.in_sweep);

        // A tiny trade one second later sits alone in the short window:
        // ratio = 0.1 / (10.1 / 10 * 0.3) ~= 0.33, below half the
        // threshold, so the detector re-arms (and stays silent).
        assert_eq!(
            model.process_tick(&tick(1.0, 100.0, 0.1, Side::Buy)),
            SweepSignal::NoSignal
        );
        assert!(!model.in_sweep);

        // A fresh burst after re-arming fires again.
        assert_eq!(
            model.process_tick(&tick(2.0, 100.5, 10.0, Side::Buy)),
            SweepSignal::UpSweep
        );
    }

    #[test]
    fn test_balanced_burst_sets_debounce_without_event() {
        let mut model = SweepModel::new(SweepConfig {
            short_window_s: 0.3,
            long_window_s: 10.0,
            threshold_ratio: 3.0,
        });

        // Seed the baseline and re-arm after the inevitable first-tick
        // burst.
        model.process_tick(&tick(0.0, 100.0, 10.0, Side::Buy));
        model.process_tick(&tick(1.0, 100.0, 0.1, Side::Buy));
        assert!(!model.in_sweep);
        let events_before = model.last_event().copied();

        // Two-sided burst: 0.6 buy then 0.6 sell land in the same short
        // window. The ratio crosses on the sell tick but neither side
        // dominates by 1.5x, so the detector debounces without an event.
        assert_eq!(
            model.process_tick(&tick(2.0, 100.0, 0.6, Side::Buy)),
            SweepSignal::NoSignal
        );
        assert!(!model.in_sweep);
        assert_eq!(
            model.process_tick(&tick(2.1, 100.0, 0.6, Side::Sell)),
            SweepSignal::NoSignal
        );
        assert!(model.in_sweep);
        assert_eq!(model.last_event().copied(), events_before);

        // Still debounced on the next tick.
        assert_eq!(
            model.process_tick(&tick(2.15, 100.0, 0.1, Side::Buy)),
            SweepSignal::NoSignal
        );
    }

    #[test]
    fn test_zero_volume_stream_is_silent() {
        let mut model = SweepModel::default();
        for i in 0..10 {
            let ts = i as f64 * 0.1;
            assert_eq!(
                model.process_tick(&tick(ts, 100.0, 0.0, Side::Buy)),
                SweepSignal::NoSignal
            );
        }
        assert!(model.last_event().is_none());
    }

    #[test]
    fn test_event_window_metadata() {
        let mut model = SweepModel::new(SweepConfig {
            short_window_s: 0.5,
            long_window_s: 10.0,
            threshold_ratio: 3.0,
        });

        // Baseline tick; the very first tick always looks like a burst
        // relative to its own baseline, so the detector starts debounced.
        model.process_tick(&tick(0.0, 99.0, 0.5, Side::Buy));

        // Quiet trickle re-arms the detector; its last tick (t=5,
        // price 99.5) will be the one preceding the burst window.
        for i in 1..6 {
            model.process_tick(&tick(i as f64, 99.5, 0.01, Side::Sell));
        }
        assert!(!model.in_sweep);

        // Burst at t=8 fires on its first tick.
        assert_eq!(
            model.process_tick(&tick(8.0, 101.0, 3.0, Side::Buy)),
            SweepSignal::UpSweep
        );

        let event = model.last_event().expect("burst recorded");
        assert_eq!(event.direction, SweepDirection::Up);
        assert!((event.ts_start - 8.0).abs() < 1e-9);
        assert!((event.ts_end - 8.0).abs() < 1e-9);
        assert!((event.price_end - 101.0).abs() < 1e-9);
        // Pre-burst price comes from the last tick evicted from the
        // short window, not from the burst itself.
        assert!((event.price_start - 99.5).abs() < 1e-9);
        assert!((event.volume_total - 3.0).abs() < 1e-9);
    }
}
