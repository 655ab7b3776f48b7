//! Tolerances and approximate comparison of `f64` values.
//!
//! Every tolerant predicate in the crate funnels through [`approx_eq_eps`], so
//! "approximately equal" means one thing everywhere: the absolute difference
//! is strictly smaller than the tolerance.
//!
//! ```
//! use complexkit::float::{approx_eq, approx_zero, DEFAULT_EPS};
//!
//! assert!(approx_eq(0.1 + 0.2, 0.3));
//! assert!(approx_zero(DEFAULT_EPS / 2.0));
//! assert!(!approx_zero(DEFAULT_EPS));
//! ```

use crate::error::ComplexError;

/// `2^-53`, the precision of a 64 bit floating-point number.
pub const DOUBLE_EPS: f64 = f64::EPSILON / 2.0;

/// `4 * 2^-53`. Tolerates a 2-bit rounding error, i.e. one lost decimal digit.
pub const DEFAULT_EPS: f64 = 4.0 * DOUBLE_EPS;

/// `2^-39`. For results of long calculation chains (13-bit error).
pub const MANY_CALCULATIONS_EPS: f64 = 1.0 / 549_755_813_888.0;

/// `2^-24`, the precision of a 32 bit floating-point number.
pub const FLOAT_EPS: f64 = f32::EPSILON as f64 / 2.0;

/// `|expected - actual| < DEFAULT_EPS`
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    approx_eq_eps(actual, expected, DEFAULT_EPS)
}

/// `|expected - actual| < epsilon`, both extremes excluded
pub fn approx_eq_eps(actual: f64, expected: f64, epsilon: f64) -> bool {
    (expected - actual).abs() < epsilon
}

/// `|actual| < DEFAULT_EPS`
pub fn approx_zero(actual: f64) -> bool {
    approx_eq_eps(actual, 0.0, DEFAULT_EPS)
}

/// `|actual| < epsilon`
pub fn approx_zero_eps(actual: f64, epsilon: f64) -> bool {
    approx_eq_eps(actual, 0.0, epsilon)
}

/// Rejects NaN and infinities, naming the offending argument.
pub fn validate_finite(name: &'static str, value: f64) -> Result<f64, ComplexError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComplexError::NonFinite { name, value })
    }
}
