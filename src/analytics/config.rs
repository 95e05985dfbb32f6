//! Configuration for the analytics components.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Sweep detector configuration.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    /// Burst horizon in seconds. Typical sweeps resolve in 0.1-0.5s.
    pub short_window_s: f64,
    /// Baseline horizon in seconds, a few seconds to tens of seconds.
    pub long_window_s: f64,
    /// Trigger when short-window volume exceeds this multiple of the
    /// uniform-rate expectation. Detection re-arms below half of it.
    pub threshold_ratio: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            short_window_s: 0.3,
            long_window_s: 10.0,
            threshold_ratio: 3.0,
        }
    }
}

impl SweepConfig {
    /// Check that windows are positive and properly nested.
    pub fn validate(&self) -> Result<()> {
        if self.short_window_s <= 0.0 {
            return Err(Error::NonPositiveConfig {
                field: "short_window_s",
                value: self.short_window_s,
            });
        }
        if self.long_window_s <= 0.0 {
            return Err(Error::NonPositiveConfig {
                field: "long_window_s",
                value: self.long_window_s,
            });
        }
        if self.threshold_ratio <= 0.0 {
            return Err(Error::NonPositiveConfig {
                field: "threshold_ratio",
                value: self.threshold_ratio,
            });
        }
        if self.short_window_s >= self.long_window_s {
            return Err(Error::WindowOrder {
                short_window_s: self.short_window_s,
                long_window_s: self.long_window_s,
            });
        }
        Ok(())
    }
}

/// Mean reversion strategy configuration.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct StrategyConfig {
    /// Entry delay after a sweep trigger (ms). Models execution latency;
    /// the open action carries the delayed timestamp.
    pub delay_ms: f64,
    /// Maximum hold duration before a time-based exit (seconds).
    pub hold_sec: f64,
    /// Take-profit threshold in basis points.
    pub tp_bp: f64,
    /// Stop-loss threshold in basis points.
    pub sl_bp: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            delay_ms: 80.0,
            hold_sec: 5.0,
            tp_bp: 2.0,
            sl_bp: 2.0,
        }
    }
}

impl StrategyConfig {
    /// Check that thresholds and durations are positive.
    ///
    /// `delay_ms` may be zero (immediate entry) but not negative.
    pub fn validate(&self) -> Result<()> {
        if self.delay_ms < 0.0 {
            return Err(Error::NonPositiveConfig {
                field: "delay_ms",
                value: self.delay_ms,
            });
        }
        if self.hold_sec <= 0.0 {
            return Err(Error::NonPositiveConfig {
                field: "hold_sec",
                value: self.hold_sec,
            });
        }
        if self.tp_bp <= 0.0 {
            return Err(Error::NonPositiveConfig {
                field: "tp_bp",
                value: self.tp_bp,
            });
        }
        if self.sl_bp <= 0.0 {
            return Err(Error::NonPositiveConfig {
                field: "sl_bp",
                value: self.sl_bp,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_validate() {
        assert!(SweepConfig::default().validate().is_ok());
        assert!(StrategyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sweep_config_rejects_inverted_windows() {
        let config = SweepConfig {
            short_window_s: 10.0,
            long_window_s: 0.3,
            threshold_ratio: 3.0,
        };
        assert!(matches!(
            config.validate(),
            Err(Error::WindowOrder { .. })
        ));
    }

    #[test]
    fn test_sweep_config_rejects_zero_threshold() {
        let config = SweepConfig {
            threshold_ratio: 0.0,
            ..SweepConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositiveConfig {
                field: "threshold_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_strategy_config_allows_zero_delay() {
        let config = StrategyConfig {
            delay_ms: 0.0,
            ..StrategyConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
