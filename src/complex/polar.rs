use super::normalize::{unsigned_zero, wrap_argument};
use super::{Complex, ComplexValue};
use crate::error::ComplexError;
use crate::float::{approx_eq_eps, approx_zero, approx_zero_eps};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI};

/// A complex number stored as `modulus * e^(i*argument)`.
///
/// The modulus is never negative and the argument always lies in
/// `(-PI, PI]`. A zero modulus forces a zero argument.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Polar {
    modulus: f64,
    argument: f64,
}

impl Polar {
    pub const ZERO: Self = Polar {
        modulus: 0.0,
        argument: 0.0,
    };
    pub const ONE: Self = Polar {
        modulus: 1.0,
        argument: 0.0,
    };

    /// The modulus is trusted to be finite and non-negative; the argument is
    /// wrapped into range.
    pub(crate) fn new(modulus: f64, argument: f64) -> Self {
        if modulus == 0.0 {
            return Polar::ZERO;
        }
        Polar {
            modulus: unsigned_zero(modulus),
            argument: wrap_argument(argument),
        }
    }

    /// Point on the real axis, with argument `PI` for negative values.
    pub(crate) fn from_real(real: f64) -> Self {
        if real < 0.0 {
            Polar::new(-real, PI)
        } else {
            Polar::new(real, 0.0)
        }
    }
}

impl ComplexValue for Polar {
    fn real(&self) -> f64 {
        self.modulus * self.argument.cos()
    }

    fn imaginary(&self) -> f64 {
        self.modulus * self.argument.sin()
    }

    fn modulus(&self) -> f64 {
        self.modulus
    }

    fn argument(&self) -> f64 {
        self.argument
    }

    fn conjugate(&self) -> Complex {
        Polar::new(self.modulus, -self.argument).into()
    }

    fn negate(&self) -> Complex {
        Polar::new(self.modulus, self.argument + PI).into()
    }

    fn is_zero(&self) -> bool {
        self.modulus == 0.0
    }

    fn is_zero_eps(&self, eps: f64) -> bool {
        approx_zero_eps(self.modulus, eps)
    }

    fn is_one(&self) -> bool {
        self.modulus == 1.0 && approx_zero(self.argument)
    }

    fn has_real_only(&self) -> bool {
        self.modulus == 0.0 || self.argument == 0.0 || self.argument == PI
    }

    fn has_real_only_eps(&self, eps: f64) -> bool {
        approx_zero_eps(self.modulus, eps)
            || approx_zero_eps(self.argument, eps)
            || approx_eq_eps(self.argument.abs(), PI, eps)
    }

    fn has_imaginary_only(&self) -> bool {
        self.modulus == 0.0 || self.argument.abs() == FRAC_PI_2
    }

    fn has_imaginary_only_eps(&self, eps: f64) -> bool {
        approx_zero_eps(self.modulus, eps) || approx_eq_eps(self.argument.abs(), FRAC_PI_2, eps)
    }

    fn has_null_argument(&self) -> bool {
        self.argument == 0.0
    }

    fn has_null_argument_eps(&self, eps: f64) -> bool {
        approx_zero_eps(self.argument, eps)
    }

    fn multiply_by(&self, other: &Complex) -> Complex {
        if self.is_zero() || other.is_zero() {
            return Complex::ZERO_POLAR;
        }
        if self.is_one() {
            return *other;
        }
        if other.is_one() {
            return (*self).into();
        }
        Polar::new(
            self.modulus * other.modulus(),
            self.argument + other.argument(),
        )
        .into()
    }

    fn multiply_by_real(&self, amount: f64) -> Complex {
        if self.is_zero() || amount == 0.0 {
            return Complex::ZERO_POLAR;
        }
        if amount == 1.0 {
            return (*self).into();
        }
        if amount > 0.0 {
            Polar::new(self.modulus * amount, self.argument).into()
        } else {
            Polar::new(self.modulus * -amount, self.argument + PI).into()
        }
    }

    fn multiply_by_imaginary(&self, amount: f64) -> Complex {
        if self.is_zero() || amount == 0.0 {
            return Complex::ZERO_POLAR;
        }
        if amount > 0.0 {
            Polar::new(self.modulus * amount, self.argument + FRAC_PI_2).into()
        } else {
            Polar::new(self.modulus * -amount, self.argument - FRAC_PI_2).into()
        }
    }

    fn divide_by(&self, other: &Complex) -> Result<Complex, ComplexError> {
        if other.is_zero() {
            return Err(ComplexError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Complex::ZERO_POLAR);
        }
        if other.is_one() {
            return Ok((*self).into());
        }
        Ok(Polar::new(
            self.modulus / other.modulus(),
            self.argument - other.argument(),
        )
        .into())
    }

    fn divide_by_real(&self, amount: f64) -> Result<Complex, ComplexError> {
        if amount == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Complex::ZERO_POLAR);
        }
        if amount == 1.0 {
            return Ok((*self).into());
        }
        if amount > 0.0 {
            Ok(Polar::new(self.modulus / amount, self.argument).into())
        } else {
            Ok(Polar::new(self.modulus / -amount, self.argument - PI).into())
        }
    }

    fn divide_by_imaginary(&self, amount: f64) -> Result<Complex, ComplexError> {
        if amount == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Complex::ZERO_POLAR);
        }
        if amount > 0.0 {
            Ok(Polar::new(self.modulus / amount, self.argument - FRAC_PI_2).into())
        } else {
            Ok(Polar::new(self.modulus / -amount, self.argument + FRAC_PI_2).into())
        }
    }

    fn reciprocal(&self) -> Result<Complex, ComplexError> {
        if self.is_zero() {
            return Err(ComplexError::DivisionByZero);
        }
        Ok(Polar::new(self.modulus.recip(), -self.argument).into())
    }

    fn approx_eq_eps(&self, other: &Complex, epsilon: f64) -> bool {
        approx_eq_eps(self.modulus, other.modulus(), epsilon)
            && approx_eq_eps(self.argument, other.argument(), epsilon)
    }
}

#[cfg(test)]
mod polar_tests {
    use super::*;
    use crate::float::DEFAULT_EPS;
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, TAU};

    fn p(modulus: f64, argument: f64) -> Complex {
        Complex::of_polar(modulus, argument).unwrap()
    }

    #[test]
    fn test_normalized_on_creation() {
        let z = p(2.0, -PI);
        assert_eq!(z.argument(), PI);
        let z = p(2.0, TAU + FRAC_PI_4);
        assert!(approx_eq_eps(z.argument(), FRAC_PI_4, 1e-12));
        let z = p(0.0, 1.3);
        assert_eq!(z.argument(), 0.0);
        assert!(z.is_zero());
    }

    #[test]
    fn test_from_real() {
        let z = Complex::of_polar_real(-3.0).unwrap();
        assert_eq!(z.modulus(), 3.0);
        assert_eq!(z.argument(), PI);
        let z = Complex::of_polar_real(-0.0).unwrap();
        assert_eq!(z.argument(), 0.0);
        assert!(z.modulus().is_sign_positive());
    }

    #[test]
    fn test_conjugate_and_negate() {
        let z = p(2.0, FRAC_PI_3);
        assert_eq!(z.conjugate(), p(2.0, -FRAC_PI_3));
        assert!(z.conjugate().is_polar());
        assert_eq!(p(2.0, PI).conjugate().argument(), PI);

        assert_eq!(p(2.0, 0.0).negate().argument(), PI);
        assert_eq!(p(2.0, PI).negate().argument(), 0.0);
        assert!(z.negate().approx_eq_eps(&p(2.0, FRAC_PI_3 - PI), 1e-12));
    }

    #[test]
    fn test_predicates() {
        assert!(p(1.0, 0.0).is_one());
        assert!(!p(1.0, 0.1).is_one());
        assert!(p(3.0, PI).has_real_only());
        assert!(p(3.0, 0.0).has_real_only());
        assert!(!p(3.0, 1.0).has_real_only());
        assert!(p(3.0, -PI + 1e-16).has_real_only_eps(DEFAULT_EPS));
        assert!(p(3.0, FRAC_PI_2).has_imaginary_only());
        assert!(p(3.0, -FRAC_PI_2).has_imaginary_only());
        assert!(p(3.0, FRAC_PI_2 + 1e-16).has_imaginary_only_eps(DEFAULT_EPS));
        assert!(p(3.0, 0.0).has_null_argument());
        assert!(!p(3.0, PI).has_null_argument());
        assert!(p(3.0, 1e-17).has_null_argument_eps(DEFAULT_EPS));
        assert!(p(1e-17, 1.0).is_zero_eps(DEFAULT_EPS));
    }

    #[test]
    fn test_multiplication() {
        let product = p(2.0, FRAC_PI_4).multiply_by(&p(3.0, FRAC_PI_4));
        assert!(product.is_polar());
        assert_eq!(product.modulus(), 6.0);
        assert_eq!(product.argument(), FRAC_PI_2);

        let wrapped = p(1.5, 3.0).multiply_by(&p(2.0, 3.0));
        assert!(approx_eq_eps(wrapped.argument(), 6.0 - TAU, DEFAULT_EPS));

        let by_real = p(2.0, FRAC_PI_4).multiply_by_real(-2.0);
        assert_eq!(by_real.modulus(), 4.0);
        assert!(approx_eq_eps(by_real.argument(), FRAC_PI_4 - PI, 1e-12));

        let by_imaginary = p(2.0, 0.0).multiply_by_imaginary(-1.5);
        assert_eq!(by_imaginary.modulus(), 3.0);
        assert_eq!(by_imaginary.argument(), -FRAC_PI_2);
    }

    #[test]
    fn test_multiplication_shortcuts() {
        let z = p(2.0, 1.0);
        let zero = z.multiply_by(&Complex::ZERO);
        assert!(zero.is_polar() && zero.is_zero());
        assert_eq!(Complex::ONE_POLAR.multiply_by(&z), z);
        assert_eq!(z.multiply_by(&Complex::ONE), z);
        assert!(z.multiply_by_real(0.0).is_zero());
        assert_eq!(z.multiply_by_real(1.0), z);
    }

    #[test]
    fn test_multiplication_with_cartesian_operand() {
        let cartesian = Complex::of_cartesian(0.0, 2.0).unwrap();
        let product = p(1.0, FRAC_PI_2).multiply_by(&cartesian);
        assert!(product.is_polar());
        assert_eq!(product.modulus(), 2.0);
        assert_eq!(product.argument(), PI);
    }

    #[test]
    fn test_division() {
        let quotient = p(6.0, FRAC_PI_2).divide_by(&p(3.0, FRAC_PI_4)).unwrap();
        assert_eq!(quotient.modulus(), 2.0);
        assert_eq!(quotient.argument(), FRAC_PI_4);

        let by_real = p(6.0, 0.0).divide_by_real(-3.0).unwrap();
        assert_eq!(by_real.modulus(), 2.0);
        assert_eq!(by_real.argument(), PI);

        let by_imaginary = p(6.0, 0.0).divide_by_imaginary(3.0).unwrap();
        assert_eq!(by_imaginary.argument(), -FRAC_PI_2);
        let by_imaginary = p(6.0, 0.0).divide_by_imaginary(-3.0).unwrap();
        assert_eq!(by_imaginary.argument(), FRAC_PI_2);

        assert!(Complex::ZERO_POLAR.divide_by(&p(1.0, 1.0)).unwrap().is_zero());
        assert_eq!(
            p(1.0, 1.0).divide_by_real(0.0),
            Err(ComplexError::DivisionByZero)
        );
    }

    #[test]
    fn test_reciprocal() {
        let inverse = p(4.0, FRAC_PI_3).reciprocal().unwrap();
        assert_eq!(inverse.modulus(), 0.25);
        assert_eq!(inverse.argument(), -FRAC_PI_3);
        assert_eq!(p(4.0, PI).reciprocal().unwrap().argument(), PI);
    }

    #[test]
    fn test_cartesian_projection() {
        let z = p(2.0, FRAC_PI_3);
        assert!(approx_eq_eps(z.real(), 1.0, DEFAULT_EPS));
        assert!(approx_eq_eps(z.imaginary(), 3.0_f64.sqrt(), DEFAULT_EPS));
    }
}
