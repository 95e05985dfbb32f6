//! Order flow feature extraction.
//!
//! [`OrderFlowFeatureExtractor`] aggregates the trade tape and L2 book
//! into on-demand [`OrderFlowFrame`] snapshots: multi-horizon taker
//! volume, depth bands around mid, rolling mid-price extremes, and
//! aggressor-run detection.

mod book;
mod buckets;
mod extractor;
mod frame;
mod rolling;

pub use book::BookState;
pub use buckets::AggressionBuckets;
pub use extractor::OrderFlowFeatureExtractor;
pub use frame::OrderFlowFrame;
pub use rolling::RollingExtreme;
