use std::f64::consts::{PI, TAU};

/// Maps `-0.0` to `+0.0` and leaves every other value untouched.
#[inline]
pub fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// Wraps an angle into the half-open range `(-PI, PI]`.
///
/// A result landing exactly on `-PI` is moved to `PI`, and a zero result is
/// always `+0.0`.
pub fn wrap_argument(angle: f64) -> f64 {
    // fmod is exact, leaving the result in (-TAU, TAU)
    let mut wrapped = angle % TAU;
    if wrapped > PI {
        wrapped -= TAU;
    } else if wrapped <= -PI {
        wrapped += TAU;
    }
    if wrapped <= -PI {
        wrapped = PI;
    }
    unsigned_zero(wrapped)
}

/// Shifts an argument from `(-PI, PI]` into `[0, TAU)`.
pub fn positive_argument(argument: f64) -> f64 {
    if argument < 0.0 {
        // tiny negative arguments round up to TAU itself
        let shifted = argument + TAU;
        if shifted >= TAU {
            0.0
        } else {
            shifted
        }
    } else {
        unsigned_zero(argument)
    }
}

/// Principal argument of `(real, imaginary)` in `(-PI, PI]`.
pub fn cartesian_argument(real: f64, imaginary: f64) -> f64 {
    let angle = imaginary.atan2(real);
    if angle == -PI {
        PI
    } else {
        unsigned_zero(angle)
    }
}
