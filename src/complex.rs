use crate::error::ComplexError;
use crate::float::{validate_finite, DEFAULT_EPS};
use num_complex::Complex64;
use serde::Serialize;
use std::f64::consts::TAU;
use std::ops::{Add, Mul, Neg, Sub};

pub mod cartesian;
pub mod normalize;
pub mod polar;

pub use cartesian::Cartesian;
pub use polar::Polar;

/// Operations shared by every representation of a complex number.
///
/// Addition and subtraction have no representation-dependent accuracy
/// advantage, so they are provided once here in Cartesian terms. Powers and
/// roots are provided once in polar terms. Everything multiplicative is
/// implemented per representation: the receiver decides how the operation
/// is carried out, after projecting the other operand through its accessors.
pub trait ComplexValue {
    /// Real part
    fn real(&self) -> f64;

    /// Imaginary part
    fn imaginary(&self) -> f64;

    /// Distance from the origin
    fn modulus(&self) -> f64;

    /// Main argument, in `(-PI, PI]`
    fn argument(&self) -> f64;

    fn conjugate(&self) -> Complex;

    fn negate(&self) -> Complex;

    fn is_zero(&self) -> bool;

    fn is_zero_eps(&self, eps: f64) -> bool;

    fn is_one(&self) -> bool;

    fn has_real_only(&self) -> bool;

    fn has_real_only_eps(&self, eps: f64) -> bool;

    fn has_imaginary_only(&self) -> bool;

    fn has_imaginary_only_eps(&self, eps: f64) -> bool;

    fn has_null_argument(&self) -> bool;

    fn has_null_argument_eps(&self, eps: f64) -> bool;

    fn multiply_by(&self, other: &Complex) -> Complex;

    fn multiply_by_real(&self, amount: f64) -> Complex;

    fn multiply_by_imaginary(&self, amount: f64) -> Complex;

    fn divide_by(&self, other: &Complex) -> Result<Complex, ComplexError>;

    fn divide_by_real(&self, amount: f64) -> Result<Complex, ComplexError>;

    fn divide_by_imaginary(&self, amount: f64) -> Result<Complex, ComplexError>;

    fn reciprocal(&self) -> Result<Complex, ComplexError>;

    /// Compares in the pair space preferred by the receiver: real/imaginary
    /// for Cartesian values, modulus/argument for polar values. Each
    /// difference must be strictly below `epsilon`.
    fn approx_eq_eps(&self, other: &Complex, epsilon: f64) -> bool;

    /// [`ComplexValue::approx_eq_eps`] with [`DEFAULT_EPS`]
    fn approx_eq(&self, other: &Complex) -> bool {
        self.approx_eq_eps(other, DEFAULT_EPS)
    }

    /// Main argument shifted into `[0, 2*PI)`
    fn argument_positive(&self) -> f64 {
        normalize::positive_argument(self.argument())
    }

    fn plus(&self, other: &Complex) -> Complex {
        Cartesian::new(
            self.real() + other.real(),
            self.imaginary() + other.imaginary(),
        )
        .into()
    }

    fn plus_real(&self, amount: f64) -> Complex {
        Cartesian::new(self.real() + amount, self.imaginary()).into()
    }

    fn plus_imaginary(&self, amount: f64) -> Complex {
        Cartesian::new(self.real(), self.imaginary() + amount).into()
    }

    fn minus(&self, other: &Complex) -> Complex {
        Cartesian::new(
            self.real() - other.real(),
            self.imaginary() - other.imaginary(),
        )
        .into()
    }

    fn minus_real(&self, amount: f64) -> Complex {
        Cartesian::new(self.real() - amount, self.imaginary()).into()
    }

    fn minus_imaginary(&self, amount: f64) -> Complex {
        Cartesian::new(self.real(), self.imaginary() - amount).into()
    }

    /// `modulus^exponent * e^(i * exponent * argument)`, always polar.
    fn pow(&self, exponent: f64) -> Result<Complex, ComplexError> {
        let exponent = validate_finite("exponent", exponent)?;
        if exponent == 0.0 {
            return Ok(Complex::ONE_POLAR);
        }
        if self.is_zero() {
            if exponent < 0.0 {
                return Err(ComplexError::DivisionByZero);
            }
            return Ok(Complex::ZERO_POLAR);
        }
        Ok(Polar::new(self.modulus().powf(exponent), exponent * self.argument()).into())
    }

    /// The `k`-th of the `n` roots of degree `n`, always polar.
    fn nth_root(&self, n: u32, k: u32) -> Result<Complex, ComplexError> {
        if n == 0 {
            return Err(ComplexError::InvalidRootDegree(n));
        }
        if k >= n {
            return Err(ComplexError::RootIndexOutOfRange { n, k });
        }
        let degree = f64::from(n);
        let modulus = self.modulus().powf(degree.recip());
        let argument = (self.argument() + TAU * f64::from(k)) / degree;
        Ok(Polar::new(modulus, argument).into())
    }

    /// All `n` roots of degree `n`, ordered by increasing `k`.
    fn all_nth_roots(&self, n: u32) -> Result<Vec<Complex>, ComplexError> {
        if n == 0 {
            return Err(ComplexError::InvalidRootDegree(n));
        }
        (0..n).map(|k| self.nth_root(n, k)).collect()
    }

    fn sqrt(&self, k: u32) -> Result<Complex, ComplexError> {
        self.nth_root(2, k)
    }

    fn all_sqrts(&self) -> Result<Vec<Complex>, ComplexError> {
        self.all_nth_roots(2)
    }

    fn cbrt(&self, k: u32) -> Result<Complex, ComplexError> {
        self.nth_root(3, k)
    }

    fn all_cbrts(&self) -> Result<Vec<Complex>, ComplexError> {
        self.all_nth_roots(3)
    }
}

/// A complex number stored either in Cartesian or in polar form.
///
/// ```
/// use complexkit::prelude::*;
///
/// let z = Complex::of_cartesian(3.0, 4.0).unwrap();
/// let w = Complex::of_polar(2.0, std::f64::consts::FRAC_PI_2).unwrap();
///
/// assert_eq!(z.modulus(), 5.0);
/// assert!(w.multiply_by(&z).is_polar());
/// assert!(z.plus(&w).approx_eq(&Complex::of_cartesian(3.0, 6.0).unwrap()));
/// ```
#[derive(Clone, Copy, Debug, Serialize)]
pub enum Complex {
    Cartesian(Cartesian),
    Polar(Polar),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Complex::Cartesian($inner) => $body,
            Complex::Polar($inner) => $body,
        }
    };
}

impl Complex {
    /// A constant Cartesian `0 + 0i`.
    pub const ZERO: Self = Complex::Cartesian(Cartesian::ZERO);

    /// A constant polar `0 * e^(0i)`.
    pub const ZERO_POLAR: Self = Complex::Polar(Polar::ZERO);

    /// A constant Cartesian `1 + 0i`.
    pub const ONE: Self = Complex::Cartesian(Cartesian::ONE);

    /// A constant polar `1 * e^(0i)`.
    pub const ONE_POLAR: Self = Complex::Polar(Polar::ONE);

    /// A constant `0 + 1i`, the imaginary unit.
    pub const I: Self = Complex::Cartesian(Cartesian::I);

    /// A constant `0 - 1i`.
    pub const NEG_I: Self = Complex::Cartesian(Cartesian::NEG_I);

    /// Create a Cartesian complex number from a real number (imaginary part = 0)
    pub fn of(real: f64) -> Result<Self, ComplexError> {
        Self::of_cartesian(real, 0.0)
    }

    /// Create a Cartesian complex number from real and imaginary parts
    pub fn of_cartesian(real: f64, imaginary: f64) -> Result<Self, ComplexError> {
        let real = validate_finite("real", real)?;
        let imaginary = validate_finite("imaginary", imaginary)?;
        Ok(Cartesian::new(real, imaginary).into())
    }

    /// Create a polar complex number from a modulus and an angle in radians
    pub fn of_polar(modulus: f64, argument: f64) -> Result<Self, ComplexError> {
        let modulus = validate_finite("modulus", modulus)?;
        let argument = validate_finite("argument", argument)?;
        if modulus < 0.0 {
            return Err(ComplexError::NegativeModulus(modulus));
        }
        Ok(Polar::new(modulus, argument).into())
    }

    /// Create a polar complex number lying on the real axis
    pub fn of_polar_real(real: f64) -> Result<Self, ComplexError> {
        let real = validate_finite("real", real)?;
        Ok(Polar::from_real(real).into())
    }

    pub fn is_cartesian(&self) -> bool {
        matches!(self, Complex::Cartesian(_))
    }

    pub fn is_polar(&self) -> bool {
        matches!(self, Complex::Polar(_))
    }

    /// Same number in Cartesian form; Cartesian values are returned as is
    pub fn to_cartesian(&self) -> Self {
        match self {
            Complex::Cartesian(_) => *self,
            Complex::Polar(p) => Cartesian::new(p.real(), p.imaginary()).into(),
        }
    }

    /// Same number in polar form; polar values are returned as is
    pub fn to_polar(&self) -> Self {
        match self {
            Complex::Cartesian(c) => Polar::new(c.modulus(), c.argument()).into(),
            Complex::Polar(_) => *self,
        }
    }
}

impl ComplexValue for Complex {
    fn real(&self) -> f64 {
        dispatch!(self, v => v.real())
    }

    fn imaginary(&self) -> f64 {
        dispatch!(self, v => v.imaginary())
    }

    fn modulus(&self) -> f64 {
        dispatch!(self, v => v.modulus())
    }

    fn argument(&self) -> f64 {
        dispatch!(self, v => v.argument())
    }

    fn conjugate(&self) -> Complex {
        dispatch!(self, v => v.conjugate())
    }

    fn negate(&self) -> Complex {
        dispatch!(self, v => v.negate())
    }

    fn is_zero(&self) -> bool {
        dispatch!(self, v => v.is_zero())
    }

    fn is_zero_eps(&self, eps: f64) -> bool {
        dispatch!(self, v => v.is_zero_eps(eps))
    }

    fn is_one(&self) -> bool {
        dispatch!(self, v => v.is_one())
    }

    fn has_real_only(&self) -> bool {
        dispatch!(self, v => v.has_real_only())
    }

    fn has_real_only_eps(&self, eps: f64) -> bool {
        dispatch!(self, v => v.has_real_only_eps(eps))
    }

    fn has_imaginary_only(&self) -> bool {
        dispatch!(self, v => v.has_imaginary_only())
    }

    fn has_imaginary_only_eps(&self, eps: f64) -> bool {
        dispatch!(self, v => v.has_imaginary_only_eps(eps))
    }

    fn has_null_argument(&self) -> bool {
        dispatch!(self, v => v.has_null_argument())
    }

    fn has_null_argument_eps(&self, eps: f64) -> bool {
        dispatch!(self, v => v.has_null_argument_eps(eps))
    }

    fn multiply_by(&self, other: &Complex) -> Complex {
        dispatch!(self, v => v.multiply_by(other))
    }

    fn multiply_by_real(&self, amount: f64) -> Complex {
        dispatch!(self, v => v.multiply_by_real(amount))
    }

    fn multiply_by_imaginary(&self, amount: f64) -> Complex {
        dispatch!(self, v => v.multiply_by_imaginary(amount))
    }

    fn divide_by(&self, other: &Complex) -> Result<Complex, ComplexError> {
        dispatch!(self, v => v.divide_by(other))
    }

    fn divide_by_real(&self, amount: f64) -> Result<Complex, ComplexError> {
        dispatch!(self, v => v.divide_by_real(amount))
    }

    fn divide_by_imaginary(&self, amount: f64) -> Result<Complex, ComplexError> {
        dispatch!(self, v => v.divide_by_imaginary(amount))
    }

    fn reciprocal(&self) -> Result<Complex, ComplexError> {
        dispatch!(self, v => v.reciprocal())
    }

    fn approx_eq_eps(&self, other: &Complex, epsilon: f64) -> bool {
        dispatch!(self, v => v.approx_eq_eps(other, epsilon))
    }
}

impl From<Cartesian> for Complex {
    fn from(value: Cartesian) -> Self {
        Complex::Cartesian(value)
    }
}

impl From<Polar> for Complex {
    fn from(value: Polar) -> Self {
        Complex::Polar(value)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Self {
        Complex64::new(value.real(), value.imaginary())
    }
}

impl TryFrom<Complex64> for Complex {
    type Error = ComplexError;

    fn try_from(value: Complex64) -> Result<Self, Self::Error> {
        Complex::of_cartesian(value.re, value.im)
    }
}

impl Default for Complex {
    fn default() -> Self {
        Complex::ZERO
    }
}

/// Exact equality: equal real/imaginary pairs or equal modulus/argument pairs.
impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        (self.real() == other.real() && self.imaginary() == other.imaginary())
            || (self.modulus() == other.modulus() && self.argument() == other.argument())
    }
}

impl num_traits::Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        ComplexValue::is_zero(self)
    }
}

impl num_traits::One for Complex {
    fn one() -> Self {
        Complex::ONE
    }

    fn is_one(&self) -> bool {
        ComplexValue::is_one(self)
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $op:ident, $op_real:ident) => {
        impl $imp<Complex> for Complex {
            type Output = Complex;

            fn $method(self, other: Complex) -> Complex {
                self.$op(&other)
            }
        }

        impl $imp<&Complex> for Complex {
            type Output = Complex;

            fn $method(self, other: &Complex) -> Complex {
                self.$op(other)
            }
        }

        impl $imp<Complex> for &Complex {
            type Output = Complex;

            fn $method(self, other: Complex) -> Complex {
                self.$op(&other)
            }
        }

        impl $imp<&Complex> for &Complex {
            type Output = Complex;

            fn $method(self, other: &Complex) -> Complex {
                self.$op(other)
            }
        }

        impl $imp<f64> for Complex {
            type Output = Complex;

            fn $method(self, other: f64) -> Complex {
                self.$op_real(other)
            }
        }

        impl $imp<f64> for &Complex {
            type Output = Complex;

            fn $method(self, other: f64) -> Complex {
                self.$op_real(other)
            }
        }
    };
}

forward_binop!(Add, add, plus, plus_real);
forward_binop!(Sub, sub, minus, minus_real);
forward_binop!(Mul, mul, multiply_by, multiply_by_real);

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negate()
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negate()
    }
}

impl std::iter::Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        crate::algebra::sum_all(iter)
    }
}

impl<'a> std::iter::Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        crate::algebra::sum_all(iter)
    }
}
