//! Hurwitz zeta function

use mathstat_core::constants::MACHEP;
use mathstat_core::{Policy, Result};

/// (2k)! / B_2k for the Euler-Maclaurin correction terms
const ZETA_A: [f64; 12] = [
    12.0,
    -720.0,
    30240.0,
    -1209600.0,
    47900160.0,
    -1892437580.3183792,
    74724249600.0,
    -2950130727918.164,
    116467828143500.67,
    -4597978722407473.0,
    1.8152105401943546e+17,
    -7.166165256175667e+18,
];

/// Past this `q` the two leading asymptotic terms are exact to double precision
const ZETA_ASYMPTOTIC_Q: f64 = 1e8;

/// Hurwitz zeta function `ζ(x, q) = Σ_{k≥0} (k + q)^(−x)`.
///
/// `ζ(x, 1)` is the Riemann zeta function. The sum is taken directly for
/// at least ten terms and then closed with the Euler–Maclaurin formula.
///
/// - `x == 1` is the pole of the series: singularity, quiet value `+∞`.
/// - `x < 1` diverges: domain error, quiet value NaN.
/// - `q <= 0` at an integer hits a pole of a term: singularity, `+∞`.
/// - `q <= 0` with non-integer `x` is complex-valued: domain error, NaN.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::Policy;
/// use mathstat_special::zeta;
///
/// let z2 = zeta(2.0, 1.0, Policy::Quiet).unwrap();
/// assert!((z2 - std::f64::consts::PI.powi(2) / 6.0).abs() < 1e-15);
/// ```
pub fn zeta(x: f64, q: f64, policy: Policy) -> Result<f64> {
    if x.is_nan() || q.is_nan() {
        return Ok(f64::NAN);
    }
    if x == 1.0 {
        return policy.singular("zeta", f64::INFINITY);
    }
    if x < 1.0 {
        return policy.domain("zeta", f64::NAN);
    }
    if q <= 0.0 {
        if q == q.floor() {
            return policy.singular("zeta", f64::INFINITY);
        }
        if x != x.floor() {
            return policy.domain("zeta", f64::NAN);
        }
    }

    if q > ZETA_ASYMPTOTIC_Q {
        return Ok((1.0 / (x - 1.0) + 1.0 / (2.0 * q)) * q.powf(1.0 - x));
    }

    let mut s = q.powf(-x);
    let mut a = q;
    let mut b = 0.0;
    let mut i = 0;
    while i < 9 || a <= 9.0 {
        i += 1;
        a += 1.0;
        b = a.powf(-x);
        s += b;
        if (b / s).abs() < MACHEP {
            return Ok(s);
        }
    }

    let w = a;
    s += b * w / (x - 1.0);
    s -= 0.5 * b;
    let mut a = 1.0;
    let mut k = 0.0;
    for &denom in ZETA_A.iter() {
        a *= x + k;
        b /= w;
        let t = a * b / denom;
        s += t;
        if (t / s).abs() < MACHEP {
            break;
        }
        k += 1.0;
        a *= x + k;
        b /= w;
        k += 1.0;
    }
    Ok(s)
}
