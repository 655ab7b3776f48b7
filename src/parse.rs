use crate::complex::Complex;
use crate::error::ComplexError;
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::str::FromStr;
use std::sync::OnceLock;

const UNSIGNED: &str = r"(?:(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|(?i:infinity|inf|nan))";

struct Patterns {
    real: Regex,
    imaginary: Regex,
    cartesian: Regex,
    cartesian_coordinates: Regex,
    polar_coordinates: Regex,
    polar: Regex,
    eulerian: Regex,
}

impl Patterns {
    fn compile() -> Result<Patterns, regex::Error> {
        let num = format!(r"[+-]?{}", UNSIGNED);
        Ok(Patterns {
            real: Regex::new(&format!(r"^\s*(?P<re>{num})\s*$", num = num))?,
            imaginary: Regex::new(&format!(
                r"^\s*(?P<sign>[+-])?\s*(?P<im>{unsigned})?\s*\*?\s*i\s*$",
                unsigned = UNSIGNED
            ))?,
            cartesian: Regex::new(&format!(
                r"^\s*(?P<re>{num})\s*(?P<op>[+-])\s*(?P<im>{unsigned})?\s*\*?\s*i\s*$",
                num = num,
                unsigned = UNSIGNED
            ))?,
            cartesian_coordinates: Regex::new(&format!(
                r"^\s*\(\s*(?P<re>{num})\s*,\s*(?P<im>{num})\s*\)\s*$",
                num = num
            ))?,
            polar_coordinates: Regex::new(&format!(
                r"^\s*\(\s*r\s*=\s*(?P<m>{num})\s*,\s*theta\s*=\s*(?P<a>{num})\s*\)\s*$",
                num = num
            ))?,
            polar: Regex::new(&format!(
                r"^\s*(?P<m>{num})\s*\*\s*\(\s*cos\s*\(\s*(?P<a>{num})\s*\)\s*\+\s*i\s*\*\s*sin\s*\(\s*(?P<b>{num})\s*\)\s*\)\s*$",
                num = num
            ))?,
            eulerian: Regex::new(&format!(
                r"^\s*(?P<m>{num})\s*\*\s*e\s*\^\s*\(\s*(?P<a>{num})\s*\*?\s*i\s*\)\s*$",
                num = num
            ))?,
        })
    }
}

fn patterns() -> Result<&'static Patterns, SimpleError> {
    static PATTERNS: OnceLock<Result<Patterns, regex::Error>> = OnceLock::new();
    match PATTERNS.get_or_init(Patterns::compile) {
        Ok(patterns) => Ok(patterns),
        Err(e) => Err(SimpleError::new(e.to_string())),
    }
}

fn number(text: &str) -> Result<f64, SimpleError> {
    text.parse::<f64>()
        .map_err(|e| SimpleError::new(format!("invalid number '{}': {}", text, e)))
}

fn validated(value: Result<Complex, ComplexError>) -> Result<Complex, SimpleError> {
    value.map_err(|e| SimpleError::new(e.to_string()))
}

/// Reads back any rendering produced by the `format` methods, plus bare
/// reals (`"2.5"`) and bare imaginaries (`"2i"`, `"-i"`).
///
/// Cartesian renderings give Cartesian values, polar and Eulerian ones give
/// polar values.
///
/// ```
/// use complexkit::prelude::*;
///
/// let z: Complex = "3 - 4i".parse().unwrap();
/// assert_eq!(z, Complex::of_cartesian(3.0, -4.0).unwrap());
///
/// let w: Complex = "2 * e^(0.5i)".parse().unwrap();
/// assert!(w.is_polar());
///
/// assert!("3 + 4j".parse::<Complex>().is_err());
/// ```
impl FromStr for Complex {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let patterns = patterns()?;

        if let Some(caps) = patterns.real.captures(s) {
            return validated(Complex::of(number(&caps["re"])?));
        }
        if let Some(caps) = patterns.imaginary.captures(s) {
            let magnitude = match caps.name("im") {
                Some(im) => number(im.as_str())?,
                None => 1.0,
            };
            let imaginary = match caps.name("sign") {
                Some(sign) if sign.as_str() == "-" => -magnitude,
                _ => magnitude,
            };
            return validated(Complex::of_cartesian(0.0, imaginary));
        }
        if let Some(caps) = patterns.cartesian.captures(s) {
            let real = number(&caps["re"])?;
            let magnitude = match caps.name("im") {
                Some(im) => number(im.as_str())?,
                None => 1.0,
            };
            let imaginary = if &caps["op"] == "-" {
                -magnitude
            } else {
                magnitude
            };
            return validated(Complex::of_cartesian(real, imaginary));
        }
        if let Some(caps) = patterns.cartesian_coordinates.captures(s) {
            return validated(Complex::of_cartesian(
                number(&caps["re"])?,
                number(&caps["im"])?,
            ));
        }
        if let Some(caps) = patterns.polar_coordinates.captures(s) {
            return validated(Complex::of_polar(number(&caps["m"])?, number(&caps["a"])?));
        }
        if let Some(caps) = patterns.polar.captures(s) {
            let cosine = number(&caps["a"])?;
            let sine = number(&caps["b"])?;
            if cosine != sine {
                bail!("cosine and sine arguments of a polar form must match");
            }
            return validated(Complex::of_polar(number(&caps["m"])?, cosine));
        }
        if let Some(caps) = patterns.eulerian.captures(s) {
            return validated(Complex::of_polar(number(&caps["m"])?, number(&caps["a"])?));
        }
        bail!("string not recognized as a complex number")
    }
}
