//! Error function family
//!
//! `erf` and `erfc` are evaluated independently: `erf` by a rational
//! approximation on |x| <= 1, `erfc` by two rational approximations of
//! `e^(x²)·erfc(x)` on [1, 8) and [8, ∞). Neither is ever computed as the
//! complement of the other where that would cancel.

use crate::ndtr::ndtri;
use mathstat_core::constants::MAXLOG;
use mathstat_core::polynomial::{p1evl, polevl};
use mathstat_core::{Policy, Result};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_2_SQRT_PI};

/// erfc(x) = exp(-x²)·P(x)/Q(x) on 1 <= x < 8
const ERFC_P: [f64; 9] = [
    2.461969814735305e-10,
    0.5641895648310689,
    7.463210564422699,
    48.63719709856814,
    196.5208329560771,
    526.4451949954773,
    934.5285271719576,
    1027.5518868951572,
    557.5353353693994,
];

const ERFC_Q: [f64; 8] = [
    13.228195115474499,
    86.70721408859897,
    354.9377788878199,
    975.7085017432055,
    1823.9091668790973,
    2246.3376081871097,
    1656.6630919416134,
    557.5353408177277,
];

/// erfc(x) = exp(-x²)·R(x)/S(x) on 8 <= x
const ERFC_R: [f64; 6] = [
    0.5641895835477551,
    1.275366707599781,
    5.019050422511805,
    6.160210979930536,
    7.4097426995044895,
    2.9788666537210022,
];

const ERFC_S: [f64; 6] = [
    2.2605286322011726,
    9.396035249380015,
    12.048953980809666,
    17.08144507475659,
    9.608968090632859,
    3.369076451000815,
];

/// erf(x) = x·T(x²)/U(x²) on |x| <= 1
const ERF_T: [f64; 5] = [
    9.604973739870516,
    90.02601972038427,
    2232.005345946843,
    7003.325141128051,
    55592.30130103949,
];

const ERF_U: [f64; 5] = [
    33.56171416475031,
    521.3579497801527,
    4594.323829709801,
    22629.000061389095,
    49267.39426086359,
];

/// erfc(6) is below half an ulp of 1
const ERF_SATURATION: f64 = 6.0;

/// The error function, `erf(x) = 2/√π ∫₀ˣ e^(−t²) dt`.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::Policy;
/// use mathstat_special::erf;
///
/// let y = erf(1.0, Policy::Quiet).unwrap();
/// assert!((y - 0.842_700_792_949_714_9).abs() < 1e-15);
/// ```
pub fn erf(x: f64, policy: Policy) -> Result<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if x < 0.0 {
        return erf(-x, policy).map(|y| -y);
    }
    if x >= ERF_SATURATION {
        return Ok(1.0);
    }
    if x > 1.0 {
        return erfc(x, policy).map(|y| 1.0 - y);
    }
    let z = x * x;
    Ok(x * polevl(z, &ERF_T) / p1evl(z, &ERF_U))
}

/// The complementary error function, `erfc(x) = 1 − erf(x)`.
///
/// Reports underflow once `exp(−x²)` leaves the double range, with 0 as
/// the quiet fallback. Negative arguments use `erfc(−x) = 2 − erfc(x)`.
pub fn erfc(a: f64, policy: Policy) -> Result<f64> {
    if a.is_nan() {
        return Ok(a);
    }

    let x = a.abs();
    if x < 1.0 {
        return erf(a, policy).map(|y| 1.0 - y);
    }

    let z = -a * a;
    if z < -MAXLOG {
        return erfc_underflow(a, policy);
    }
    let z = z.exp();

    let (p, q) = if x < 8.0 {
        (polevl(x, &ERFC_P), p1evl(x, &ERFC_Q))
    } else {
        (polevl(x, &ERFC_R), p1evl(x, &ERFC_S))
    };
    let mut y = z * p / q;
    if a < 0.0 {
        y = 2.0 - y;
    }
    if y == 0.0 {
        return erfc_underflow(a, policy);
    }
    Ok(y)
}

fn erfc_underflow(a: f64, policy: Policy) -> Result<f64> {
    // The negative tail saturates at 2, which is exact rather than lost.
    if a < 0.0 {
        return Ok(2.0);
    }
    policy.underflow("erfc", 0.0)
}

/// Below this erfinv is linear to double precision
const ERFINV_LINEAR: f64 = 1e-7;

/// Inverse of [`erf`] on (−1, 1).
///
/// `erfinv(±1) = ±∞`; arguments outside [−1, 1] report a domain error
/// with NaN as the quiet fallback.
pub fn erfinv(y: f64, policy: Policy) -> Result<f64> {
    if y.is_nan() {
        return Ok(y);
    }
    if y.abs() < ERFINV_LINEAR {
        return Ok(y / FRAC_2_SQRT_PI);
    }
    if y > -1.0 && y < 1.0 {
        return ndtri(0.5 * (y + 1.0), policy).map(|x| x * FRAC_1_SQRT_2);
    }
    if y == -1.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if y == 1.0 {
        return Ok(f64::INFINITY);
    }
    policy.domain("erfinv", f64::NAN)
}

/// Inverse of [`erfc`] on (0, 2).
///
/// `erfcinv(0) = +∞`, `erfcinv(2) = −∞`; arguments outside [0, 2] report
/// a domain error with NaN as the quiet fallback.
pub fn erfcinv(y: f64, policy: Policy) -> Result<f64> {
    if y.is_nan() {
        return Ok(y);
    }
    if y > 0.0 && y < 2.0 {
        return ndtri(0.5 * y, policy).map(|x| -x * FRAC_1_SQRT_2);
    }
    if y == 0.0 {
        return Ok(f64::INFINITY);
    }
    if y == 2.0 {
        return Ok(f64::NEG_INFINITY);
    }
    policy.domain("erfcinv", f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mathstat_core::ErrorKind;

    fn erf_q(x: f64) -> f64 {
        erf(x, Policy::Quiet).unwrap()
    }

    fn erfc_q(x: f64) -> f64 {
        erfc(x, Policy::Quiet).unwrap()
    }

    #[test]
    fn test_erf_reference() {
        let cases = [
            (0.0, 0.0),
            (0.01, 0.011283415555849616),
            (0.1, 0.1124629160182849),
            (0.25, 0.2763263901682369),
            (0.5, 0.5204998778130465),
            (0.75, 0.7111556336535151),
            (0.9, 0.7969082124228322),
            (1.0, 0.8427007929497148),
            (5.0, 0.9999999999984626),
        ];
        for (x, expected) in cases {
            assert_relative_eq!(erf_q(x), expected, max_relative = 1e-15);
            assert_relative_eq!(erf_q(-x), -expected, max_relative = 1e-15);
        }
    }

    #[test]
    fn test_erf_saturates() {
        assert_eq!(erf_q(10.0), 1.0);
        assert_eq!(erf_q(100.0), 1.0);
        assert_eq!(erf_q(f64::INFINITY), 1.0);
        assert_eq!(erf_q(f64::NEG_INFINITY), -1.0);
        assert!(erf_q(f64::NAN).is_nan());
        // No spurious underflow from the saturated tail
        assert_eq!(erf(40.0, Policy::Raise).unwrap(), 1.0);
    }

    #[test]
    fn test_erfc_reference() {
        let cases = [
            (-1.0, 1.8427007929497148),
            (-0.5, 1.5204998778130465),
            (-0.01, 1.0112834155558497),
            (0.0, 1.0),
            (0.01, 0.9887165844441503),
            (0.25, 0.7236736098317631),
            (0.5, 0.4795001221869535),
            (0.9, 0.20309178757716784),
            (1.0, 0.15729920705028516),
            (5.0, 1.5374597944280347e-12),
            (10.0, 2.0884875837625446e-45),
        ];
        for (x, expected) in cases {
            assert_relative_eq!(erfc_q(x), expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_erfc_tails() {
        assert_eq!(erfc_q(-10.0), 2.0);
        assert_eq!(erfc_q(f64::NEG_INFINITY), 2.0);
        assert_eq!(erfc_q(100.0), 0.0);
        assert_eq!(erfc_q(f64::INFINITY), 0.0);

        let err = erfc(30.0, Policy::Raise).unwrap_err();
        assert_eq!(err.numeric_kind(), Some(ErrorKind::Underflow));
        assert_eq!(erfc(-30.0, Policy::Raise).unwrap(), 2.0);
    }

    #[test]
    fn test_erfc_keeps_relative_precision_in_tail() {
        // 1 - erf(x) would be 0 here
        let y = erfc_q(7.0);
        assert!(y > 0.0);
        assert_relative_eq!(y, 4.183_825_607_779_414e-23, max_relative = 1e-13);
    }

    #[test]
    fn test_erfinv_roundtrip() {
        for y in [-0.999, -0.5, -1e-3, 1e-9, 0.25, 0.9, 0.999_999] {
            let x = erfinv(y, Policy::Quiet).unwrap();
            assert_relative_eq!(erf_q(x), y, max_relative = 1e-12);
        }
        assert_eq!(erfinv(1.0, Policy::Quiet).unwrap(), f64::INFINITY);
        assert_eq!(erfinv(-1.0, Policy::Quiet).unwrap(), f64::NEG_INFINITY);
        assert!(erfinv(1.5, Policy::Quiet).unwrap().is_nan());
        assert!(erfinv(1.5, Policy::Raise).is_err());
    }

    #[test]
    fn test_erfcinv_roundtrip() {
        for y in [1e-30, 1e-5, 0.3, 1.0, 1.7, 1.999] {
            let x = erfcinv(y, Policy::Quiet).unwrap();
            assert_relative_eq!(erfc_q(x), y, max_relative = 1e-11);
        }
        assert_eq!(erfcinv(0.0, Policy::Quiet).unwrap(), f64::INFINITY);
        assert_eq!(erfcinv(2.0, Policy::Quiet).unwrap(), f64::NEG_INFINITY);
        assert!(erfcinv(-0.1, Policy::Quiet).unwrap().is_nan());
    }
}
