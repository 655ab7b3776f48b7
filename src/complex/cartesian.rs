use super::normalize::{cartesian_argument, unsigned_zero};
use super::{Complex, ComplexValue};
use crate::error::ComplexError;
use crate::float::{approx_eq_eps, approx_zero, approx_zero_eps};
use serde::Serialize;

/// A complex number stored as `real + i*imaginary`.
///
/// Neither component is ever `-0.0`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Cartesian {
    re: f64,
    im: f64,
}

impl Cartesian {
    pub const ZERO: Self = Cartesian { re: 0.0, im: 0.0 };
    pub const ONE: Self = Cartesian { re: 1.0, im: 0.0 };
    pub const I: Self = Cartesian { re: 0.0, im: 1.0 };
    pub const NEG_I: Self = Cartesian { re: 0.0, im: -1.0 };

    /// Components are trusted to be finite; public construction goes through
    /// the validating factories on [`Complex`].
    pub(crate) fn new(re: f64, im: f64) -> Self {
        Cartesian {
            re: unsigned_zero(re),
            im: unsigned_zero(im),
        }
    }
}

impl ComplexValue for Cartesian {
    fn real(&self) -> f64 {
        self.re
    }

    fn imaginary(&self) -> f64 {
        self.im
    }

    fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    fn argument(&self) -> f64 {
        cartesian_argument(self.re, self.im)
    }

    fn conjugate(&self) -> Complex {
        Cartesian::new(self.re, -self.im).into()
    }

    fn negate(&self) -> Complex {
        Cartesian::new(-self.re, -self.im).into()
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    fn is_zero_eps(&self, eps: f64) -> bool {
        approx_zero_eps(self.re, eps) && approx_zero_eps(self.im, eps)
    }

    fn is_one(&self) -> bool {
        self.re == 1.0 && approx_zero(self.im)
    }

    fn has_real_only(&self) -> bool {
        self.im == 0.0
    }

    fn has_real_only_eps(&self, eps: f64) -> bool {
        approx_zero_eps(self.im, eps)
    }

    fn has_imaginary_only(&self) -> bool {
        self.re == 0.0
    }

    fn has_imaginary_only_eps(&self, eps: f64) -> bool {
        approx_zero_eps(self.re, eps)
    }

    fn has_null_argument(&self) -> bool {
        self.re >= 0.0 && self.im == 0.0
    }

    fn has_null_argument_eps(&self, eps: f64) -> bool {
        self.re >= -eps && approx_zero_eps(self.im, eps)
    }

    fn multiply_by(&self, other: &Complex) -> Complex {
        if self.is_zero() || other.is_zero() {
            return Complex::ZERO;
        }
        if self.is_one() {
            return *other;
        }
        if other.is_one() {
            return (*self).into();
        }
        if other.has_real_only() {
            return self.multiply_by_real(other.real());
        }
        if other.has_imaginary_only() {
            return self.multiply_by_imaginary(other.imaginary());
        }
        let (a1, b1) = (self.re, self.im);
        let (a2, b2) = (other.real(), other.imaginary());
        Cartesian::new(a1 * a2 - b1 * b2, a1 * b2 + a2 * b1).into()
    }

    fn multiply_by_real(&self, amount: f64) -> Complex {
        if self.is_zero() || amount == 0.0 {
            return Complex::ZERO;
        }
        if amount == 1.0 {
            return (*self).into();
        }
        Cartesian::new(self.re * amount, self.im * amount).into()
    }

    fn multiply_by_imaginary(&self, amount: f64) -> Complex {
        if self.is_zero() || amount == 0.0 {
            return Complex::ZERO;
        }
        Cartesian::new(-self.im * amount, self.re * amount).into()
    }

    fn divide_by(&self, other: &Complex) -> Result<Complex, ComplexError> {
        if other.is_zero() {
            return Err(ComplexError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Complex::ZERO);
        }
        if other.is_one() {
            return Ok((*self).into());
        }
        let (re, im) = scaled_quotient(self.re, self.im, other.real(), other.imaginary());
        Ok(Cartesian::new(re, im).into())
    }

    fn divide_by_real(&self, amount: f64) -> Result<Complex, ComplexError> {
        if amount == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Complex::ZERO);
        }
        if amount == 1.0 {
            return Ok((*self).into());
        }
        Ok(Cartesian::new(self.re / amount, self.im / amount).into())
    }

    fn divide_by_imaginary(&self, amount: f64) -> Result<Complex, ComplexError> {
        if amount == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Complex::ZERO);
        }
        Ok(Cartesian::new(self.im / amount, -self.re / amount).into())
    }

    fn reciprocal(&self) -> Result<Complex, ComplexError> {
        if self.is_zero() {
            return Err(ComplexError::DivisionByZero);
        }
        let (re, im) = scaled_quotient(1.0, 0.0, self.re, self.im);
        Ok(Cartesian::new(re, im).into())
    }

    fn approx_eq_eps(&self, other: &Complex, epsilon: f64) -> bool {
        approx_eq_eps(self.re, other.real(), epsilon)
            && approx_eq_eps(self.im, other.imaginary(), epsilon)
    }
}

/// `(a1 + b1 i) / (a2 + b2 i)` scaled by the larger divisor component
/// (Smith's method), so `a2^2 + b2^2` is never formed.
fn scaled_quotient(a1: f64, b1: f64, a2: f64, b2: f64) -> (f64, f64) {
    if a2.abs() >= b2.abs() {
        let ratio = b2 / a2;
        let denominator = a2 + b2 * ratio;
        ((a1 + b1 * ratio) / denominator, (b1 - a1 * ratio) / denominator)
    } else {
        let ratio = a2 / b2;
        let denominator = a2 * ratio + b2;
        ((a1 * ratio + b1) / denominator, (b1 * ratio - a1) / denominator)
    }
}

#[cfg(test)]
mod cartesian_tests {
    use super::*;
    use crate::float::DEFAULT_EPS;
    use float_cmp::approx_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn c(re: f64, im: f64) -> Complex {
        Complex::of_cartesian(re, im).unwrap()
    }

    #[test]
    fn test_accessors() {
        let z = c(3.0, 4.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(c(1.0, 1.0).argument(), FRAC_PI_4);
        assert_eq!(c(-1.0, 0.0).argument(), PI);
        assert_eq!(c(0.0, -3.0).argument(), -FRAC_PI_2);
        assert_eq!(Complex::ZERO.argument(), 0.0);
    }

    #[test]
    fn test_no_negative_zero() {
        let z = c(-0.0, -0.0);
        assert!(z.real().is_sign_positive());
        assert!(z.imaginary().is_sign_positive());

        let conj = c(5.0, 0.0).conjugate();
        assert!(conj.imaginary().is_sign_positive());

        let neg = Complex::ZERO.negate();
        assert!(neg.real().is_sign_positive());
        assert!(neg.imaginary().is_sign_positive());

        let neg = c(0.0, 2.0).negate();
        assert!(neg.real().is_sign_positive());
        assert_eq!(neg.imaginary(), -2.0);
    }

    #[test]
    fn test_conjugate_and_negate() {
        assert_eq!(c(3.0, 4.0).conjugate(), c(3.0, -4.0));
        assert_eq!(c(3.0, 4.0).negate(), c(-3.0, -4.0));
        assert!(c(3.0, 4.0).conjugate().is_cartesian());
    }

    #[test]
    fn test_predicates() {
        assert!(c(0.0, 0.0).is_zero());
        assert!(!c(1e-300, 0.0).is_zero());
        assert!(c(1e-17, -1e-17).is_zero_eps(DEFAULT_EPS));
        assert!(c(1.0, 1e-17).is_one());
        assert!(!c(1.0 + 1e-15, 0.0).is_one());

        assert!(c(-2.0, 0.0).has_real_only());
        assert!(!c(-2.0, 1e-17).has_real_only());
        assert!(c(-2.0, 1e-17).has_real_only_eps(DEFAULT_EPS));
        assert!(c(0.0, 2.0).has_imaginary_only());
        assert!(c(1e-17, 2.0).has_imaginary_only_eps(DEFAULT_EPS));

        assert!(c(2.0, 0.0).has_null_argument());
        assert!(c(0.0, 0.0).has_null_argument());
        assert!(!c(-2.0, 0.0).has_null_argument());
        assert!(c(-1e-17, 1e-17).has_null_argument_eps(DEFAULT_EPS));
        assert!(!c(-1.0, 0.0).has_null_argument_eps(DEFAULT_EPS));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(c(1.0, 2.0).multiply_by(&c(3.0, 4.0)), c(-5.0, 10.0));
        assert_eq!(c(1.0, 2.0).multiply_by(&c(3.0, 0.0)), c(3.0, 6.0));
        assert_eq!(c(1.0, 2.0).multiply_by(&c(0.0, 3.0)), c(-6.0, 3.0));
        assert_eq!(Complex::I.multiply_by(&Complex::I), c(-1.0, 0.0));
        assert_eq!(c(1.0, 2.0).multiply_by_real(-2.0), c(-2.0, -4.0));
        assert_eq!(c(1.0, 2.0).multiply_by_imaginary(2.0), c(-4.0, 2.0));
    }

    #[test]
    fn test_multiplication_shortcuts() {
        let z = c(1.5, -2.5);
        assert!(z.multiply_by(&Complex::ZERO_POLAR).is_cartesian());
        assert!(z.multiply_by(&Complex::ZERO).is_zero());
        assert_eq!(Complex::ONE.multiply_by(&z), z);
        assert_eq!(z.multiply_by(&Complex::ONE_POLAR), z);
        assert!(z.multiply_by_real(0.0).is_zero());
        assert!(z.multiply_by_imaginary(0.0).is_zero());
    }

    #[test]
    fn test_multiplication_with_polar_operand() {
        let polar = Complex::of_polar(2.0, FRAC_PI_2).unwrap();
        let product = c(1.0, 1.0).multiply_by(&polar);
        assert!(product.is_cartesian());
        assert!(product.approx_eq(&c(-2.0, 2.0)));
    }

    #[test]
    fn test_division() {
        assert_eq!(c(-5.0, 10.0).divide_by(&c(3.0, 4.0)).unwrap(), c(1.0, 2.0));
        assert_eq!(c(2.0, 4.0).divide_by_real(2.0).unwrap(), c(1.0, 2.0));
        assert_eq!(c(2.0, 4.0).divide_by_imaginary(2.0).unwrap(), c(2.0, -1.0));
        assert_eq!(c(3.0, 1.0).divide_by(&Complex::ONE).unwrap(), c(3.0, 1.0));
        assert!(Complex::ZERO.divide_by(&c(3.0, 1.0)).unwrap().is_zero());
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(c(0.0, 2.0).reciprocal().unwrap(), c(0.0, -0.5));
        assert_eq!(c(1.0, 1.0).reciprocal().unwrap(), c(0.5, -0.5));
        assert_eq!(
            Complex::ZERO.reciprocal(),
            Err(ComplexError::DivisionByZero)
        );
    }

    #[test]
    fn test_division_at_range_extremes() {
        let tiny = c(1e-200, 1e-200).reciprocal().unwrap();
        assert!(approx_eq!(f64, tiny.real(), 5e199, ulps = 4));
        assert!(approx_eq!(f64, tiny.imaginary(), -5e199, ulps = 4));

        let big = c(1e200, 1e200).reciprocal().unwrap();
        assert!(approx_eq!(f64, big.real(), 5e-201, ulps = 4));
        assert!(approx_eq!(f64, big.imaginary(), -5e-201, ulps = 4));

        let quotient = c(1.0, 1.0).divide_by(&c(1e200, 1e200)).unwrap();
        assert!(approx_eq!(f64, quotient.real(), 1e-200, ulps = 4));
        assert_eq!(quotient.imaginary(), 0.0);

        let quotient = c(3e-200, 1e-200).divide_by(&c(1e-200, -2e-200)).unwrap();
        assert!(approx_eq!(f64, quotient.real(), 0.2, epsilon = 1e-15));
        assert!(approx_eq!(f64, quotient.imaginary(), 1.4, epsilon = 1e-15));

        let polar = Complex::of_polar(2.0_f64.sqrt() * 1e-200, FRAC_PI_4)
            .unwrap()
            .reciprocal()
            .unwrap();
        assert!(tiny.approx_eq_eps(&polar.to_cartesian(), 1e186));
    }

    #[test]
    fn test_approx_eq() {
        assert!(c(1.0, 2.0).approx_eq(&c(1.0 + 1e-16, 2.0 - 1e-16)));
        assert!(!c(1.0, 2.0).approx_eq(&c(1.0 + 1e-14, 2.0)));
        assert!(c(1.0, 2.0).approx_eq_eps(&c(1.1, 2.1), 0.2));
    }
}
