//! Linear and quadratic equations with complex coefficients.
//!
//! The quadratic solver avoids catastrophic cancellation by computing the
//! larger-magnitude root first and deriving the other through Vieta's
//! formula `x1 * x2 = c / a`.

use super::complex_sqrt_of;
use crate::complex::{Complex, ComplexValue};
use crate::error::ComplexError;
use crate::float::{validate_finite, DEFAULT_EPS};

/// Root of `a*x + b = 0`.
pub fn solve_linear_equation(a: &Complex, b: &Complex) -> Result<Complex, ComplexError> {
    if a.is_zero() {
        return Err(ComplexError::NoLinearSolution);
    }
    b.negate().divide_by(a)
}

/// Root of `a*x + b = 0` for real coefficients.
pub fn solve_real_linear_equation(a: f64, b: f64) -> Result<Complex, ComplexError> {
    solve_linear_equation(&Complex::of(a)?, &Complex::of(b)?)
}

/// Both roots of `a*x^2 + b*x + c = 0`, indexed from 0.
///
/// A double root is returned twice.
///
/// ```
/// use complexkit::prelude::*;
/// use complexkit::algebra::equation::solve_quadratic_equation;
///
/// let a = Complex::ONE;
/// let b = Complex::of_cartesian(-3.0, 0.0).unwrap();
/// let c = Complex::of(2.0).unwrap();
/// let [x1, x2] = solve_quadratic_equation(&a, &b, &c).unwrap();
/// assert!(x1.approx_eq(&Complex::of(2.0).unwrap()));
/// assert!(x2.approx_eq(&Complex::ONE));
/// ```
pub fn solve_quadratic_equation(
    a: &Complex,
    b: &Complex,
    c: &Complex,
) -> Result<[Complex; 2], ComplexError> {
    if a.is_zero() {
        return Err(ComplexError::ZeroLeadingCoefficient);
    }
    if b.is_zero() && c.is_zero() {
        log::trace!("quadratic with only the x^2 term");
        return Ok([Complex::ZERO, Complex::ZERO]);
    }
    if b.is_zero() {
        log::trace!("quadratic without the x term");
        let x1 = c.negate().divide_by(a)?.sqrt(0)?;
        return Ok([x1, x1.negate()]);
    }
    if c.is_zero() {
        log::trace!("quadratic without the constant term");
        return Ok([Complex::ZERO, solve_linear_equation(a, b)?]);
    }

    // delta = b^2 - 4ac
    let delta = b.pow(2.0)?.minus(&a.multiply_by(c).multiply_by_real(4.0));
    let sqrt_delta = if delta.is_zero_eps(DEFAULT_EPS) {
        Complex::ZERO
    } else {
        delta.sqrt(0)?
    };
    find_roots(a, b, c, &sqrt_delta)
}

/// Both roots of `a*x^2 + b*x + c = 0` for real coefficients.
///
/// The discriminant is computed in `f64` and its square root taken on the
/// real or imaginary axis exactly.
pub fn solve_real_quadratic_equation(a: f64, b: f64, c: f64) -> Result<[Complex; 2], ComplexError> {
    let a = validate_finite("a", a)?;
    let b = validate_finite("b", b)?;
    let c = validate_finite("c", c)?;
    if a == 0.0 {
        return Err(ComplexError::ZeroLeadingCoefficient);
    }
    let (ca, cb, cc) = (Complex::of(a)?, Complex::of(b)?, Complex::of(c)?);
    if b == 0.0 && c == 0.0 {
        log::trace!("real quadratic with only the x^2 term");
        return Ok([Complex::ZERO, Complex::ZERO]);
    }
    if b == 0.0 {
        log::trace!("real quadratic without the x term");
        let x1 = complex_sqrt_of(-c / a, 0)?;
        return Ok([x1, x1.negate()]);
    }
    if c == 0.0 {
        log::trace!("real quadratic without the constant term");
        return Ok([Complex::ZERO, solve_linear_equation(&ca, &cb)?]);
    }

    let delta = b * b - 4.0 * a * c;
    let sqrt_delta = complex_sqrt_of(delta, 0)?;
    find_roots(&ca, &cb, &cc, &sqrt_delta)
}

fn find_roots(
    a: &Complex,
    b: &Complex,
    c: &Complex,
    sqrt_delta: &Complex,
) -> Result<[Complex; 2], ComplexError> {
    let two_a = a.multiply_by_real(2.0);
    if sqrt_delta.is_zero() {
        log::trace!("quadratic with a double root");
        let x = b.negate().divide_by(&two_a)?;
        return Ok([x, x]);
    }

    // align sqrt(delta) with b so -b - sign*sqrt(delta) never cancels
    let alignment = b.real() * sqrt_delta.real() + b.imaginary() * sqrt_delta.imaginary();
    let sign = if alignment >= 0.0 { 1.0 } else { -1.0 };
    let numerator = b.negate().minus(&sqrt_delta.multiply_by_real(sign));
    let x1 = numerator.divide_by(&two_a)?;
    let x2 = if numerator.is_zero() {
        b.negate().minus(sqrt_delta).divide_by(&two_a)?
    } else {
        c.divide_by(&x1.multiply_by(a))?
    };
    log::trace!("quadratic with distinct roots");
    Ok([x1, x2])
}
