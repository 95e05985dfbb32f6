use thiserror::Error;

/// Crate error type.
///
/// The analytics operations themselves never fail; malformed single inputs
/// degrade to well-defined defaults. Errors only surface when validating
/// configuration before constructing a component.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A window length, threshold, or duration that must be positive is not.
    #[error("Invalid config: {field} must be positive (got {value})")]
    NonPositiveConfig { field: &'static str, value: f64 },

    /// The burst window must be strictly shorter than the baseline window.
    #[error("Invalid config: short window ({short_window_s}s) must be shorter than long window ({long_window_s}s)")]
    WindowOrder {
        short_window_s: f64,
        long_window_s: f64,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
