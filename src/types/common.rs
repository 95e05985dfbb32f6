//! Closed enums shared across the analytics components.

use serde::{Deserialize, Serialize};

/// Taker aggressor side of a trade.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Buyer was the taker (lifted the ask).
    Buy,
    /// Seller was the taker (hit the bid).
    Sell,
}

/// Per-tick output of the sweep detector.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepSignal {
    /// No burst detected on this tick.
    NoSignal,
    /// Buy-side liquidity sweep triggered on this tick.
    UpSweep,
    /// Sell-side liquidity sweep triggered on this tick.
    DownSweep,
}

/// Direction of a detected sweep.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepDirection {
    Up,
    Down,
}

impl SweepDirection {
    /// Signed direction: +1 for up, -1 for down.
    pub fn sign(&self) -> i8 {
        match self {
            SweepDirection::Up => 1,
            SweepDirection::Down => -1,
        }
    }
}

/// Direction of an aggressor run (three accelerating one-sided buckets).
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunDirection {
    Buy,
    Sell,
}

/// Which side of the book is thin at the tight depth band.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeakSide {
    Bid,
    Ask,
}
