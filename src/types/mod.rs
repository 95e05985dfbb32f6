//! Shared data types for the analytics components.

mod book;
mod common;
mod events;
mod trades;

pub use book::*;
pub use common::*;
pub use events::*;
pub use trades::*;
