//! Operations over collections of complex numbers, and roots of reals.
//!
//! ```
//! use complexkit::prelude::*;
//! use complexkit::algebra::{sum_all, all_complex_sqrts_of};
//!
//! let values = [Complex::of(1e10).unwrap(), Complex::I, Complex::of(-1e10).unwrap()];
//! assert_eq!(sum_all(&values), Complex::I);
//!
//! let roots = all_complex_sqrts_of(-9.0).unwrap();
//! assert_eq!(roots[0], Complex::of_cartesian(0.0, 3.0).unwrap());
//! ```

use crate::complex::{Cartesian, Complex, ComplexValue, Polar};
use crate::error::ComplexError;
use crate::float::{approx_zero, validate_finite};
use std::borrow::Borrow;

pub mod equation;

/// Kahan-compensated sum of every value, in Cartesian form.
///
/// Returns [`Complex::ZERO`] for an empty input. The first element seeds the
/// running sum, so a single-element input comes back unchanged.
pub fn sum_all<I>(values: I) -> Complex
where
    I: IntoIterator,
    I::Item: Borrow<Complex>,
{
    let mut iter = values.into_iter();
    let mut sum = match iter.next() {
        Some(first) => *first.borrow(),
        None => return Complex::ZERO,
    };
    let mut compensation = Complex::ZERO;
    let mut count = 1usize;
    for value in iter {
        let y = value.borrow().minus(&compensation);
        let t = sum.plus(&y);
        // recovers the low-order part of y lost in t, negated
        compensation = t.minus(&sum).minus(&y);
        sum = t;
        count += 1;
    }
    log::trace!("compensated sum of {} complex values", count);
    sum
}

/// Left fold of [`ComplexValue::multiply_by`]; the first element's
/// representation governs every step.
///
/// An empty input has no defined product and is rejected.
pub fn multiply_all<I>(values: I) -> Result<Complex, ComplexError>
where
    I: IntoIterator,
    I::Item: Borrow<Complex>,
{
    let mut iter = values.into_iter();
    let first = match iter.next() {
        Some(first) => *first.borrow(),
        None => return Err(ComplexError::EmptyProduct),
    };
    Ok(iter.fold(first, |product, value| product.multiply_by(value.borrow())))
}

/// The `k`-th square root of a real number, `k` in `[0, 2)`.
///
/// Root 0 is `+sqrt|real|` and root 1 its opposite, on the real axis for
/// non-negative input and on the imaginary axis otherwise. The result is
/// exact Cartesian, with no trigonometric round trip.
pub fn complex_sqrt_of(real: f64, k: u32) -> Result<Complex, ComplexError> {
    let real = validate_finite("real", real)?;
    if k >= 2 {
        return Err(ComplexError::RootIndexOutOfRange { n: 2, k });
    }
    if approx_zero(real) {
        return Ok(Complex::ZERO);
    }
    let mut root = real.abs().sqrt();
    if k == 1 {
        root = -root;
    }
    if real < 0.0 {
        Ok(Cartesian::new(0.0, root).into())
    } else {
        Ok(Cartesian::new(root, 0.0).into())
    }
}

/// Both square roots of a real number, positive root first.
pub fn all_complex_sqrts_of(real: f64) -> Result<[Complex; 2], ComplexError> {
    Ok([complex_sqrt_of(real, 0)?, complex_sqrt_of(real, 1)?])
}

/// The `k`-th root of degree `n` of a real number, in polar form.
pub fn complex_root_of(real: f64, n: u32, k: u32) -> Result<Complex, ComplexError> {
    real_as_polar(real)?.nth_root(n, k)
}

/// Every root of degree `n` of a real number, ordered by increasing `k`.
pub fn all_complex_roots_of(real: f64, n: u32) -> Result<Vec<Complex>, ComplexError> {
    real_as_polar(real)?.all_nth_roots(n)
}

fn real_as_polar(real: f64) -> Result<Complex, ComplexError> {
    let real = validate_finite("real", real)?;
    if approx_zero(real) {
        Ok(Complex::ZERO_POLAR)
    } else {
        Ok(Polar::from_real(real).into())
    }
}
