//! The analytics core: sweep detection, order flow features, and the
//! sweep-fade strategy.
//!
//! The three components never call each other; an external loop feeds
//! each one events and forwards sweep metadata to the strategy. All
//! calls are synchronous and single-writer per instance; one instrument
//! means one instance of each.

mod config;
mod flow;
mod strategy;
mod sweep;

#[cfg(test)]
mod tests;

pub use config::{StrategyConfig, SweepConfig};
pub use flow::{
    AggressionBuckets, BookState, OrderFlowFeatureExtractor, OrderFlowFrame, RollingExtreme,
};
pub use strategy::{ActionKind, MeanReversionStrategy, Position, StrategyAction};
pub use sweep::SweepModel;
