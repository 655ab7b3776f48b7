use crate::complex::{Complex, ComplexValue};
use float_cmp::{approx_eq, F64Margin};
use num_complex::Complex64;

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

/// Compares real and imaginary parts, whatever the representations.
pub fn comp_complex(
    exemplar: &Complex,
    calc: &Complex,
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(
        &exemplar.real(),
        &calc.real(),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &exemplar.imaginary(),
        &calc.imaginary(),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

/// Compares modulus and main argument.
pub fn comp_complex_polar(
    exemplar: &Complex,
    calc: &Complex,
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(
        &exemplar.modulus(),
        &calc.modulus(),
        precision,
        test,
        &(idx.to_owned() + ".modulus"),
    );
    comp_f64(
        &exemplar.argument(),
        &calc.argument(),
        precision,
        test,
        &(idx.to_owned() + ".argument"),
    );
}

pub fn comp_c64(exemplar: &Complex64, calc: &Complex, precision: F64Margin, test: &str, idx: &str) {
    comp_f64(
        &exemplar.re,
        &calc.real(),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &exemplar.im,
        &calc.imaginary(),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_roots(exemplar: &[Complex], calc: &[Complex], precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        "test {} number of roots does not match",
        test
    );
    for (k, (e, c)) in exemplar.iter().zip(calc.iter()).enumerate() {
        comp_complex(e, c, precision, test, &format!("[{}]", k));
    }
}

#[cfg(test)]
mod util_tests {
    use super::*;

    #[test]
    fn test_comp_complex_across_representations() {
        let cartesian = Complex::of_cartesian(0.0, 2.0).unwrap();
        let polar = Complex::of_polar(2.0, std::f64::consts::FRAC_PI_2).unwrap();
        comp_complex(
            &cartesian,
            &polar,
            F64Margin { epsilon: 1e-15, ulps: 4 },
            "comp_complex",
            "z",
        );
        comp_complex_polar(&cartesian, &polar, F64Margin::default(), "comp_polar", "z");
    }

    #[test]
    fn test_comp_c64() {
        let z = Complex::of_cartesian(1.5, -2.5).unwrap();
        comp_c64(&Complex64::new(1.5, -2.5), &z, F64Margin::default(), "comp_c64", "z");
    }

    #[test]
    fn test_comp_roots() {
        let roots = crate::algebra::all_complex_sqrts_of(-4.0).unwrap();
        let exemplar = [
            Complex::of_cartesian(0.0, 2.0).unwrap(),
            Complex::of_cartesian(0.0, -2.0).unwrap(),
        ];
        comp_roots(&exemplar, &roots, F64Margin::default(), "comp_roots");
    }

    #[test]
    #[should_panic]
    fn test_comp_f64_mismatch() {
        comp_f64(&1.0, &1.1, F64Margin::default(), "mismatch", "x");
    }

    #[test]
    #[should_panic]
    fn test_comp_roots_length_mismatch() {
        comp_roots(&[Complex::ONE], &[], F64Margin::default(), "length");
    }
}
