//! Inverses of the regularized incomplete gamma functions
//!
//! An initial estimate from DiDonato & Morris (1986), "Computation of the
//! incomplete gamma function ratios and their inverse", is polished with
//! three Halley steps on `P(a, x) − p` (or `Q(a, x) − q`).

use crate::gamma::{gamma, lgam};
use crate::igam::{igam, igam_fac, igamc};
use mathstat_core::constants::EULER;
use mathstat_core::polynomial::polevl;
use mathstat_core::{Policy, Result};
use tracing::trace;

const HALLEY_STEPS: usize = 3;
/// Relative size of the last Halley step still counted as converged
const CONVERGED: f64 = 1e-6;

/// Rational approximation of the normal quantile used to seed large `a`
const INV_S_NUM: [f64; 4] = [
    0.213_623_493_715_853,
    4.283_421_559_671_04,
    11.661_672_028_896_8,
    3.311_259_221_087_41,
];
const INV_S_DEN: [f64; 5] = [
    0.036_117_081_018_842_03,
    1.273_644_897_822_23,
    6.406_915_977_600_39,
    6.610_537_656_254_62,
    1.0,
];

/// Inverse of [`igam`]: the `x >= 0` with `P(a, x) = p`.
///
/// `p = 0` gives 0 and `p = 1` gives `+∞`. `a < 0` or `p` outside [0, 1]
/// reports a domain error with NaN as the quiet fallback. If the final
/// Halley step is still large the estimate is returned through a
/// loss-of-precision report.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::Policy;
/// use mathstat_special::igami;
///
/// // P(1, x) = 1 - e^-x, so the median is ln 2
/// let x = igami(1.0, 0.5, Policy::Quiet).unwrap();
/// assert!((x - std::f64::consts::LN_2).abs() < 1e-14);
/// ```
pub fn igami(a: f64, p: f64, policy: Policy) -> Result<f64> {
    if a.is_nan() || p.is_nan() {
        return Ok(f64::NAN);
    }
    if a < 0.0 || !(0.0..=1.0).contains(&p) {
        return policy.domain("igami", f64::NAN);
    }
    if a == 0.0 || p == 0.0 {
        return Ok(0.0);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    if p > 0.9 {
        return igamci(a, 1.0 - p, policy);
    }

    let x = initial_estimate(a, p, 1.0 - p)?;
    halley(a, x, policy, "igami", |x| {
        Ok(igam(a, x, Policy::Quiet)? - p)
    })
}

/// Inverse of [`igamc`]: the `x >= 0` with `Q(a, x) = q`.
///
/// `q = 0` gives `+∞` and `q = 1` gives 0; errors as for [`igami`].
pub fn igamci(a: f64, q: f64, policy: Policy) -> Result<f64> {
    if a.is_nan() || q.is_nan() {
        return Ok(f64::NAN);
    }
    if a < 0.0 || !(0.0..=1.0).contains(&q) {
        return policy.domain("igamci", f64::NAN);
    }
    if a == 0.0 || q == 1.0 {
        return Ok(0.0);
    }
    if q == 0.0 {
        return Ok(f64::INFINITY);
    }
    if q > 0.9 {
        return igami(a, 1.0 - q, policy);
    }

    let x = initial_estimate(a, 1.0 - q, q)?;
    halley(a, x, policy, "igamci", |x| {
        Ok(q - igamc(a, x, Policy::Quiet)?)
    })
}

/// Halley iteration on `residual(x)`, whose derivative in `x` is
/// `x^(a−1) e^(−x) / Γ(a)`.
fn halley<F>(a: f64, mut x: f64, policy: Policy, function: &'static str, residual: F) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let mut step = 0.0;
    for _ in 0..HALLEY_STEPS {
        let fac = igam_fac(a, x)?;
        if fac == 0.0 {
            return Ok(x);
        }
        let f_fp = residual(x)? * x / fac;
        // f''/f' for this problem
        let fpp_fp = -1.0 + (a - 1.0) / x;
        let next = if fpp_fp.is_infinite() {
            x - f_fp
        } else {
            x - f_fp / (1.0 - 0.5 * f_fp * fpp_fp)
        };
        step = next - x;
        x = next;
    }

    if step.abs() > CONVERGED * x.abs() {
        trace!(function, a, x, step, "Halley refinement did not settle");
        return policy.loss_of_precision(function, x);
    }
    Ok(x)
}

/// DiDonato & Morris initial approximation to the inverse
fn initial_estimate(a: f64, p: f64, q: f64) -> Result<f64> {
    if a == 1.0 {
        return Ok(if q > 0.9 { -(-p).ln_1p() } else { -q.ln() });
    }
    if a < 1.0 {
        return small_a_estimate(a, p, q);
    }

    // Eq. 31
    let s = inverse_s(p, q);
    let s2 = s * s;
    let s3 = s2 * s;
    let s4 = s2 * s2;
    let s5 = s4 * s;
    let ra = a.sqrt();
    let w = a + s * ra + (s2 - 1.0) / 3.0 + (s3 - 7.0 * s) / (36.0 * ra)
        - (3.0 * s4 + 7.0 * s2 - 16.0) / (810.0 * a)
        + (9.0 * s5 + 256.0 * s3 - 433.0 * s) / (38880.0 * a * ra);

    if a >= 500.0 && (1.0 - w / a).abs() < 1e-6 {
        return Ok(w);
    }

    if p > 0.5 {
        if w < 3.0 * a {
            return Ok(w);
        }
        // Eq. 25 or 33
        let d = (a * (a - 1.0)).max(2.0);
        let lg = lgam(a, Policy::Quiet)?;
        let lb = q.ln() + lg;
        if lb < -d * 2.3 {
            return Ok(eq25(a, -lb));
        }
        let u = -lb + (a - 1.0) * w.ln() - (1.0 + (1.0 - a) / (1.0 + w)).ln();
        return Ok(-lb + (a - 1.0) * u.ln() - (1.0 + (1.0 - a) / (1.0 + u)).ln());
    }

    let ap1 = a + 1.0;
    let ap2 = a + 2.0;
    let mut z = w;
    if w < 0.15 * ap1 {
        // Eq. 35
        let v = p.ln() + lgam(ap1, Policy::Quiet)?;
        z = ((v + w) / a).exp();
        let s = (z / ap1 * (1.0 + z / ap2)).ln_1p();
        z = ((v + z - s) / a).exp();
        let s = (z / ap1 * (1.0 + z / ap2)).ln_1p();
        z = ((v + z - s) / a).exp();
        let s = (z / ap1 * (1.0 + z / ap2 * (1.0 + z / (a + 3.0)))).ln_1p();
        z = ((v + z - s) / a).exp();
    }

    if z <= 0.01 * ap1 || z > 0.7 * ap1 {
        return Ok(z);
    }

    // Eq. 36
    let ls = didonato_sn(a, z, 100, 1e-4).ln();
    let v = p.ln() + lgam(ap1, Policy::Quiet)?;
    let z = ((v + z - ls) / a).exp();
    Ok(z * (1.0 - (a * z.ln() - z - v + ls) / (a - z)))
}

fn small_a_estimate(a: f64, p: f64, q: f64) -> Result<f64> {
    let g = gamma(a, Policy::Quiet)?;
    let b = q * g;

    if b > 0.6 || (b >= 0.45 && a >= 0.3) {
        // Eq. 21
        let u = if b * q > 1e-8 && q > 1e-5 {
            (p * g * a).powf(1.0 / a)
        } else {
            (-q / a - EULER).exp()
        };
        return Ok(u / (1.0 - u / (a + 1.0)));
    }
    if a < 0.3 && b >= 0.35 {
        // Eq. 22
        let t = (-EULER - b).exp();
        let u = t * t.exp();
        return Ok(t * u.exp());
    }

    let y = -b.ln();
    if b > 0.15 || a >= 0.3 {
        // Eq. 23
        let u = y - (1.0 - a) * y.ln();
        return Ok(y - (1.0 - a) * u.ln() - (1.0 + (1.0 - a) / (1.0 + u)).ln());
    }
    if b > 0.1 {
        // Eq. 24
        let u = y - (1.0 - a) * y.ln();
        let num = u * u + 2.0 * (3.0 - a) * u + (2.0 - a) * (3.0 - a);
        let den = u * u + (5.0 - a) * u + 2.0;
        return Ok(y - (1.0 - a) * u.ln() - (num / den).ln());
    }
    Ok(eq25(a, y))
}

/// Eq. 32: `s` with `Φ(s) = p`, good to about 1e-3
fn inverse_s(p: f64, q: f64) -> f64 {
    let t = if p < 0.5 {
        (-2.0 * p.ln()).sqrt()
    } else {
        (-2.0 * q.ln()).sqrt()
    };
    let s = t - polevl(t, &INV_S_NUM) / polevl(t, &INV_S_DEN);
    if p < 0.5 {
        -s
    } else {
        s
    }
}

/// Eq. 34: partial sum of `1 + Σ x^n / ((a+1)…(a+n))`
fn didonato_sn(a: f64, x: f64, terms: usize, tolerance: f64) -> f64 {
    let mut sum = 1.0;
    let mut partial = x / (a + 1.0);
    sum += partial;
    for i in 2..=terms {
        partial *= x / (a + i as f64);
        sum += partial;
        if partial < tolerance {
            break;
        }
    }
    sum
}

/// Eq. 25: asymptotic inverse for very small `q`
fn eq25(a: f64, y: f64) -> f64 {
    let am1 = a - 1.0;
    let c1 = am1 * y.ln();
    let c1_2 = c1 * c1;
    let c1_3 = c1_2 * c1;
    let c1_4 = c1_2 * c1_2;
    let a2 = a * a;
    let a3 = a2 * a;

    let c2 = am1 * (1.0 + c1);
    let c3 = am1 * (-(c1_2 / 2.0) + (a - 2.0) * c1 + (3.0 * a - 5.0) / 2.0);
    let c4 = am1
        * ((c1_3 / 3.0) - (3.0 * a - 5.0) * c1_2 / 2.0
            + (a2 - 6.0 * a + 7.0) * c1
            + (11.0 * a2 - 46.0 * a + 47.0) / 6.0);
    let c5 = am1
        * (-(c1_4 / 4.0) + (11.0 * a - 17.0) * c1_3 / 6.0
            + (-3.0 * a2 + 13.0 * a - 13.0) * c1_2
            + (2.0 * a3 - 25.0 * a2 + 72.0 * a - 61.0) * c1 / 2.0
            + (25.0 * a3 - 195.0 * a2 + 477.0 * a - 379.0) / 12.0);

    let y2 = y * y;
    y + c1 + c2 / y + c3 / y2 + c4 / (y2 * y) + c5 / (y2 * y2)
}
