//! Polynomial, rational and Chebyshev series evaluation
//!
//! Coefficients are always ordered highest degree first, which is how the
//! approximation tables in `mathstat-special` are written down.

/// Evaluate `c[0]·x^n + c[1]·x^(n-1) + … + c[n]` by Horner's rule.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::polynomial::polevl;
///
/// // 2x² + 3x + 4 at x = 2
/// assert_eq!(polevl(2.0, &[2.0, 3.0, 4.0]), 18.0);
/// ```
#[inline]
pub fn polevl(x: f64, coef: &[f64]) -> f64 {
    coef.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Like [`polevl`] with an implied leading coefficient of 1.
///
/// `p1evl(x, c)` equals `polevl(x, [1, c[0], …, c[n-1]])`.
#[inline]
pub fn p1evl(x: f64, coef: &[f64]) -> f64 {
    coef.iter().fold(1.0, |acc, &c| acc * x + c)
}

/// Evaluate the rational function `num(x) / den(x)`.
///
/// For `|x| > 1` both polynomials are evaluated in `1/x` and the result is
/// rescaled by `x^(deg num − deg den)`, which keeps large arguments from
/// overflowing the intermediate sums.
pub fn ratevl(x: f64, num: &[f64], den: &[f64]) -> f64 {
    let (m, n) = match (num.len(), den.len()) {
        (0, _) => return 0.0,
        (_, 0) => return f64::NAN,
        (m, n) => (m - 1, n - 1),
    };

    if x.abs() > 1.0 {
        let y = 1.0 / x;
        let p = num.iter().rev().fold(0.0, |acc, &c| acc * y + c);
        let q = den.iter().rev().fold(0.0, |acc, &c| acc * y + c);
        x.powi(m as i32 - n as i32) * p / q
    } else {
        polevl(x, num) / polevl(x, den)
    }
}

/// Evaluate a Chebyshev series with Clenshaw's recurrence.
///
/// For coefficients fitted on `(a, b)` the caller passes
/// `2(2x − b − a)/(b − a)`; the recurrence folds the factor of two of
/// `T[n+1] = 2x·T[n] − T[n-1]` into the argument. The constant term is
/// halved as in the classical definition.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::polynomial::chbevl;
///
/// let y = chbevl(0.5, &[12.0, 0.34, 213.542, 123.0]);
/// assert!((y - 106.338).abs() < 1e-12);
/// ```
pub fn chbevl(x: f64, coef: &[f64]) -> f64 {
    let Some((&first, rest)) = coef.split_first() else {
        return 0.0;
    };
    let mut b0 = first;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for &c in rest {
        b2 = b1;
        b1 = b0;
        b0 = x * b1 - b2 + c;
    }
    0.5 * (b0 - b2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polevl() {
        assert_eq!(polevl(3.0, &[1.0, 0.0, -2.0]), 7.0);
        assert_eq!(polevl(3.0, &[5.0]), 5.0);
        assert_eq!(polevl(3.0, &[]), 0.0);
    }

    #[test]
    fn test_p1evl_matches_polevl() {
        let coef = [0.25, -1.5, 3.0];
        let x = 1.7;
        assert_relative_eq!(
            p1evl(x, &coef),
            polevl(x, &[1.0, 0.25, -1.5, 3.0]),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_ratevl_reference() {
        let num = [0.234, 0.653, 12.4, 12879.0, 11.0];
        let den = [123.543, 1123.0, 987652.0, 45.0, 87.0, 12.0];
        assert_relative_eq!(
            ratevl(-1.0, &num, &den),
            0.013029539329753806,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_ratevl_large_argument_branch() {
        // (x + 1) / (x^2 + 1) evaluated both ways around |x| = 1
        let num = [1.0, 1.0];
        let den = [1.0, 0.0, 1.0];
        for &x in &[0.5, 0.999, 1.001, 4.0, 1e6, -250.0] {
            let direct = (x + 1.0) / (x * x + 1.0);
            assert_relative_eq!(ratevl(x, &num, &den), direct, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_chbevl_reference() {
        let coef = [12.0, 0.34, 213.542, 123.0];
        assert_relative_eq!(chbevl(-0.25, &coef), 38.884125, epsilon = 1e-12);
        assert_relative_eq!(chbevl(0.0, &coef), 61.16, epsilon = 1e-12);
        assert_relative_eq!(chbevl(0.5, &coef), 106.338, epsilon = 1e-12);
        assert_relative_eq!(chbevl(1.0, &coef), 156.101, epsilon = 1e-12);
    }

    #[test]
    fn test_chbevl_degenerate() {
        assert_eq!(chbevl(0.3, &[]), 0.0);
        assert_eq!(chbevl(0.3, &[4.0]), 2.0);
    }
}
