/// Tolerance for floating point comparisons.
pub const EPSILON: f64 = 1e-9;
