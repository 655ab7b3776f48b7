//! Complex numbers stored in Cartesian or polar form, with each operation
//! carried out in whichever form loses the least precision.
//!
//! ```
//! use complexkit::prelude::*;
//!
//! let z = Complex::of_cartesian(1.0, 1.0).unwrap();
//! let roots = z.all_nth_roots(4).unwrap();
//! for root in roots.iter() {
//!     let back = root.pow(4.0).unwrap().to_cartesian();
//!     assert!(back.approx_eq_eps(&z, MANY_CALCULATIONS_EPS));
//! }
//!
//! let [x1, x2] = solve_real_quadratic_equation(1.0, 0.0, 1.0).unwrap();
//! assert_eq!((x1, x2), (Complex::I, Complex::NEG_I));
//! ```
pub mod algebra;
pub mod complex;
pub mod error;
pub mod float;
pub mod format;
pub mod parse;
pub mod prelude;
pub mod util;
