//! complexkit prelude.
//!
//! This module contains the most used types, traits, constants and functions
//! that you can import easily as a group.
//!
//! ```
//! use complexkit::prelude::*;
//!
//! let z = Complex::of_polar(2.0, 0.5).unwrap();
//! assert!(z.conjugate().is_polar());
//! ```

#[doc(no_inline)]
pub use crate::complex::{Cartesian, Complex, ComplexValue, Polar};

#[doc(no_inline)]
pub use crate::error::{ComplexError, ErrorKind};

#[doc(no_inline)]
pub use crate::float::{DEFAULT_EPS, DOUBLE_EPS, FLOAT_EPS, MANY_CALCULATIONS_EPS};

#[doc(no_inline)]
pub use crate::algebra::{
    all_complex_roots_of, all_complex_sqrts_of, complex_root_of, complex_sqrt_of, multiply_all,
    sum_all,
};

#[doc(no_inline)]
pub use crate::algebra::equation::{
    solve_linear_equation, solve_quadratic_equation, solve_real_linear_equation,
    solve_real_quadratic_equation,
};
