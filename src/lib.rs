//! Per-instrument market microstructure analytics.
//!
//! Three synchronous components over one strictly time-ordered event
//! stream:
//! - [`SweepModel`]: dual-window liquidity sweep detection with
//!   hysteresis debounce
//! - [`OrderFlowFeatureExtractor`]: multi-horizon order flow and book
//!   depth feature frames
//! - [`MeanReversionStrategy`]: a sweep-fade state machine emitting
//!   trading actions
//!
//! The caller mediates: feed ticks to [`SweepModel::process_tick`],
//! forward any [`SweepEvent`] to [`MeanReversionStrategy::on_sweep`],
//! evaluate exits with [`MeanReversionStrategy::on_tick`], and query
//! [`OrderFlowFeatureExtractor::get_frame`] whenever a feature snapshot
//! is needed.

#![deny(unreachable_pub)]

mod analytics;
mod consts;
mod errors;
mod types;

pub use analytics::{
    ActionKind, AggressionBuckets, BookState, MeanReversionStrategy, OrderFlowFeatureExtractor,
    OrderFlowFrame, Position, RollingExtreme, StrategyAction, StrategyConfig, SweepConfig,
    SweepModel,
};
pub use consts::EPSILON;
pub use errors::{Error, Result};
pub use types::{
    BookLevel, RunDirection, Side, SweepDirection, SweepEvent, SweepSignal, Tick, WeakSide,
};
