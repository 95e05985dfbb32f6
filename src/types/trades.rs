//! Trade tick types.

use serde::{Deserialize, Serialize};

use super::Side;

/// A single trade tick from the tape.
///
/// Timestamps are seconds and must be non-decreasing within one stream;
/// ordering is the caller's contract, not checked here.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Event time in seconds.
    pub timestamp: f64,
    /// Trade price.
    pub price: f64,
    /// Trade volume (non-negative; zero is a legal no-op for ratio math).
    pub volume: f64,
    /// Taker aggressor side.
    pub side: Side,
}

impl Tick {
    pub fn new(timestamp: f64, price: f64, volume: f64, side: Side) -> Self {
        Self {
            timestamp,
            price,
            volume,
            side,
        }
    }
}
