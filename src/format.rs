use crate::complex::normalize::unsigned_zero;
use crate::complex::{Complex, ComplexValue};
use std::fmt;

fn plain(value: f64) -> String {
    format!("{}", value)
}

impl Complex {
    /// `"3 + 4i"`, `"-3 - 4i"`
    pub fn cartesian_form(&self) -> String {
        self.cartesian_form_with(plain)
    }

    /// Cartesian form with every number rendered by `formatter`.
    ///
    /// The imaginary part is passed as an absolute value, its sign becomes
    /// the operator.
    pub fn cartesian_form_with<F>(&self, formatter: F) -> String
    where
        F: Fn(f64) -> String,
    {
        let real = unsigned_zero(self.real());
        let imaginary = unsigned_zero(self.imaginary());
        let operator = if imaginary < 0.0 { '-' } else { '+' };
        format!(
            "{} {} {}i",
            formatter(real),
            operator,
            formatter(imaginary.abs())
        )
    }

    /// `"(3, 4)"`
    pub fn cartesian_coordinates(&self) -> String {
        self.cartesian_coordinates_with(plain)
    }

    pub fn cartesian_coordinates_with<F>(&self, formatter: F) -> String
    where
        F: Fn(f64) -> String,
    {
        format!(
            "({}, {})",
            formatter(unsigned_zero(self.real())),
            formatter(unsigned_zero(self.imaginary()))
        )
    }

    /// `"5 * (cos(0.93) + i*sin(0.93))"`
    pub fn polar_form(&self) -> String {
        self.polar_form_with(plain)
    }

    pub fn polar_form_with<F>(&self, formatter: F) -> String
    where
        F: Fn(f64) -> String,
    {
        let argument = formatter(unsigned_zero(self.argument()));
        format!(
            "{} * (cos({}) + i*sin({}))",
            formatter(unsigned_zero(self.modulus())),
            argument,
            argument
        )
    }

    /// `"(r= 5, theta= 0.93)"`
    pub fn polar_coordinates(&self) -> String {
        self.polar_coordinates_with(plain)
    }

    pub fn polar_coordinates_with<F>(&self, formatter: F) -> String
    where
        F: Fn(f64) -> String,
    {
        format!(
            "(r= {}, theta= {})",
            formatter(unsigned_zero(self.modulus())),
            formatter(unsigned_zero(self.argument()))
        )
    }

    /// `"5 * e^(0.93i)"`
    pub fn eulerian_form(&self) -> String {
        self.eulerian_form_with(plain)
    }

    pub fn eulerian_form_with<F>(&self, formatter: F) -> String
    where
        F: Fn(f64) -> String,
    {
        format!(
            "{} * e^({}i)",
            formatter(unsigned_zero(self.modulus())),
            formatter(unsigned_zero(self.argument()))
        )
    }
}

/// Polar values print in polar form, Cartesian values in Cartesian form.
/// A precision (`{:.3}`) applies to every number.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = match f.precision() {
            Some(precision) => {
                let formatter = |value: f64| format!("{:.*}", precision, value);
                match self {
                    Complex::Cartesian(_) => self.cartesian_form_with(formatter),
                    Complex::Polar(_) => self.polar_form_with(formatter),
                }
            }
            None => match self {
                Complex::Cartesian(_) => self.cartesian_form(),
                Complex::Polar(_) => self.polar_form(),
            },
        };
        f.write_str(&rendered)
    }
}
