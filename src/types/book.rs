//! L2 order book level types.

use serde::{Deserialize, Serialize};

/// One (price, size) entry of an L2 snapshot or delta.
///
/// In a delta, `size <= 0` is the deletion sentinel for that price level.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct BookLevel {
    pub price: f64,
    pub size: f64,
}

impl BookLevel {
    pub fn new(price: f64, size: f64) -> Self {
        Self { price, size }
    }
}
