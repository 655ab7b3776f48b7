use serde::Serialize;
use std::fmt;

/// Broad classes of failure, so callers can branch without matching every variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Rejected at the boundary before any computation
    InvalidInput,
    /// The requested operation is mathematically undefined for the operands
    Domain,
    /// The operation has no defined result for the given shape of input
    Unsupported,
}

/// Error types for complex arithmetic
#[derive(Clone, Debug, PartialEq)]
pub enum ComplexError {
    NonFinite { name: &'static str, value: f64 },
    NegativeModulus(f64),
    InvalidRootDegree(u32),
    ZeroLeadingCoefficient,
    DivisionByZero,
    RootIndexOutOfRange { n: u32, k: u32 },
    NoLinearSolution,
    EmptyProduct,
}

impl ComplexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ComplexError::NonFinite { .. }
            | ComplexError::NegativeModulus(_)
            | ComplexError::InvalidRootDegree(_)
            | ComplexError::ZeroLeadingCoefficient => ErrorKind::InvalidInput,
            ComplexError::DivisionByZero
            | ComplexError::RootIndexOutOfRange { .. }
            | ComplexError::NoLinearSolution => ErrorKind::Domain,
            ComplexError::EmptyProduct => ErrorKind::Unsupported,
        }
    }

    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::NonFinite { name, value } => {
                write!(f, "NaN or infinity not allowed: {} = {}", name, value)
            }
            ComplexError::NegativeModulus(modulus) => {
                write!(f, "Modulus must be positive or zero, got {}", modulus)
            }
            ComplexError::InvalidRootDegree(n) => {
                write!(f, "Root degree must be greater than zero, got {}", n)
            }
            ComplexError::ZeroLeadingCoefficient => write!(f, "Coefficient of x^2 is zero"),
            ComplexError::DivisionByZero => write!(f, "Unable to divide by: 0 + 0i"),
            ComplexError::RootIndexOutOfRange { n, k } => {
                write!(f, "Root index k = {} outside of range [0, {})", k, n)
            }
            ComplexError::NoLinearSolution => {
                write!(f, "Coefficient of x is zero, equation has no unique root")
            }
            ComplexError::EmptyProduct => {
                write!(f, "Product of an empty collection of complex numbers is not supported")
            }
        }
    }
}

impl std::error::Error for ComplexError {}
