//! Beta function and its logarithm

use crate::gamma::{gamma, lgam_sgn};
use mathstat_core::constants::{MAXGAM, MAXLOG};
use mathstat_core::{Policy, Result};

/// Ratio |a| / |b| past which `ln B(a, b)` switches to its large-`a` expansion
const ASYMP_FACTOR: f64 = 1e6;

/// The beta function `B(a, b) = Γ(a)Γ(b) / Γ(a + b)`.
///
/// Defined for negative non-integer arguments through Γ. At the poles of
/// Γ(a) or Γ(b) the result is finite only when the pole cancels against
/// Γ(a + b); otherwise an overflow is reported with `+∞` as the quiet
/// fallback.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::Policy;
/// use mathstat_special::beta;
///
/// let b = beta(2.0, 3.0, Policy::Quiet).unwrap();
/// assert!((b - 1.0 / 12.0).abs() < 1e-16);
/// ```
pub fn beta(a: f64, b: f64, policy: Policy) -> Result<f64> {
    if a.is_nan() || b.is_nan() {
        return Ok(f64::NAN);
    }
    if a <= 0.0 && a == a.floor() {
        return beta_negint(a, b, policy);
    }
    if b <= 0.0 && b == b.floor() {
        return beta_negint(b, a, policy);
    }

    let (a, b) = if a.abs() < b.abs() { (b, a) } else { (a, b) };

    if a.abs() > ASYMP_FACTOR * b.abs() && a > ASYMP_FACTOR {
        let (y, sign) = lbeta_asymp(a, b)?;
        return Ok(f64::from(sign) * y.exp());
    }

    let sum = a + b;
    if sum.abs() > MAXGAM || a.abs() > MAXGAM || b.abs() > MAXGAM {
        let (lg_sum, s_sum) = lgam_sgn(sum, Policy::Quiet)?;
        let (lg_a, s_a) = lgam_sgn(a, Policy::Quiet)?;
        let (lg_b, s_b) = lgam_sgn(b, Policy::Quiet)?;
        let sign = f64::from(s_sum * s_a * s_b);
        let y = lg_a + lg_b - lg_sum;
        if y > MAXLOG {
            return policy.overflow("beta", sign * f64::INFINITY);
        }
        return Ok(sign * y.exp());
    }

    let g_sum = gamma(sum, Policy::Quiet)?;
    let g_a = gamma(a, Policy::Quiet)?;
    let g_b = gamma(b, Policy::Quiet)?;
    if g_sum == 0.0 {
        return policy.overflow("beta", f64::INFINITY);
    }
    // Divide by the closer of the two magnitudes first to stay in range
    if (g_a.abs() - g_sum.abs()).abs() > (g_b.abs() - g_sum.abs()).abs() {
        Ok(g_b / g_sum * g_a)
    } else {
        Ok(g_a / g_sum * g_b)
    }
}

/// Natural log of |B(a, b)|.
///
/// Goes through `ln Γ` once the arguments leave the range of Γ, and through
/// a large-`a` expansion when `a` dwarfs `b` so that `ln Γ(a + b) − ln Γ(a)`
/// does not cancel.
pub fn lbeta(a: f64, b: f64, policy: Policy) -> Result<f64> {
    if a.is_nan() || b.is_nan() {
        return Ok(f64::NAN);
    }
    if a <= 0.0 && a == a.floor() {
        return lbeta_negint(a, b, policy);
    }
    if b <= 0.0 && b == b.floor() {
        return lbeta_negint(b, a, policy);
    }

    let (a, b) = if a.abs() < b.abs() { (b, a) } else { (a, b) };

    if a.abs() > ASYMP_FACTOR * b.abs() && a > ASYMP_FACTOR {
        return lbeta_asymp(a, b).map(|(y, _)| y);
    }

    let sum = a + b;
    if sum.abs() > MAXGAM || a.abs() > MAXGAM || b.abs() > MAXGAM {
        let (lg_sum, _) = lgam_sgn(sum, Policy::Quiet)?;
        let (lg_a, _) = lgam_sgn(a, Policy::Quiet)?;
        let (lg_b, _) = lgam_sgn(b, Policy::Quiet)?;
        return Ok(lg_a + lg_b - lg_sum);
    }

    let g_sum = gamma(sum, Policy::Quiet)?;
    let g_a = gamma(a, Policy::Quiet)?;
    let g_b = gamma(b, Policy::Quiet)?;
    if g_sum == 0.0 {
        return policy.overflow("lbeta", f64::INFINITY);
    }
    let y = if (g_a.abs() - g_sum.abs()).abs() > (g_b.abs() - g_sum.abs()).abs() {
        g_b / g_sum * g_a
    } else {
        g_a / g_sum * g_b
    };
    Ok(y.abs().ln())
}

/// `ln |B(a, b)|` for `a >> b`, with the sign of B
fn lbeta_asymp(a: f64, b: f64) -> Result<(f64, i32)> {
    let (mut r, sign) = lgam_sgn(b, Policy::Quiet)?;
    r -= b * a.ln();
    r += b * (1.0 - b) / (2.0 * a);
    r += b * (1.0 - b) * (1.0 - 2.0 * b) / (12.0 * a * a);
    r -= b * b * (1.0 - b) * (1.0 - b) / (12.0 * a * a * a);
    Ok((r, sign))
}

/// B(a, b) for a non-positive integer `a`: finite only for integer `b`
/// with `1 − a − b > 0`, where the pole of Γ(a + b) cancels.
fn beta_negint(a: f64, b: f64, policy: Policy) -> Result<f64> {
    if b == b.floor() && 1.0 - a - b > 0.0 {
        let sign = if b % 2.0 == 0.0 { 1.0 } else { -1.0 };
        return beta(1.0 - a - b, b, policy).map(|v| sign * v);
    }
    policy.overflow("beta", f64::INFINITY)
}

fn lbeta_negint(a: f64, b: f64, policy: Policy) -> Result<f64> {
    if b == b.floor() && 1.0 - a - b > 0.0 {
        return lbeta(1.0 - a - b, b, policy);
    }
    policy.overflow("lbeta", f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mathstat_core::ErrorKind;

    #[test]
    fn test_beta_reference() {
        let b = |x, y| beta(x, y, Policy::Raise).unwrap();
        assert_relative_eq!(b(1.0, 1.0), 1.0, max_relative = 1e-15);
        assert_relative_eq!(b(2.0, 3.0), 1.0 / 12.0, max_relative = 1e-15);
        assert_relative_eq!(b(0.5, 0.5), std::f64::consts::PI, max_relative = 1e-15);
        assert_relative_eq!(b(2.5, 1.5), 0.19634954084936207, max_relative = 1e-14);
        assert_eq!(b(3.0, 2.0), b(2.0, 3.0));
    }

    #[test]
    fn test_beta_negative_arguments() {
        // B(-0.5, 2) = Γ(-0.5)Γ(2)/Γ(1.5) = -4
        assert_relative_eq!(beta(-0.5, 2.0, Policy::Raise).unwrap(), -4.0, max_relative = 1e-14);
        // B(-2, 1) = -1/2 through the cancelling pole
        assert_relative_eq!(beta(-2.0, 1.0, Policy::Raise).unwrap(), -0.5, max_relative = 1e-14);
        assert_eq!(beta(-2.0, 0.5, Policy::Quiet).unwrap(), f64::INFINITY);
        let err = beta(-2.0, 0.5, Policy::Raise).unwrap_err();
        assert_eq!(err.numeric_kind(), Some(ErrorKind::Overflow));
    }

    #[test]
    fn test_lbeta_large_arguments() {
        // ln B(a, b) ~ ln Γ(b) - b ln a for a >> b
        let v = lbeta(1e10, 2.0, Policy::Raise).unwrap();
        assert_relative_eq!(v, -2.0 * 1e10f64.ln(), max_relative = 1e-9);

        let v = lbeta(300.0, 400.0, Policy::Raise).unwrap();
        assert_relative_eq!(v, -479.688451037132, max_relative = 1e-13);
        assert_eq!(beta(300.0, 400.0, Policy::Raise).unwrap(), v.exp());
    }

    #[test]
    fn test_lbeta_matches_beta() {
        for (a, b) in [(0.3, 0.7), (2.0, 5.0), (10.5, 3.25), (40.0, 60.0)] {
            assert_relative_eq!(
                lbeta(a, b, Policy::Quiet).unwrap(),
                beta(a, b, Policy::Quiet).unwrap().ln(),
                max_relative = 1e-13
            );
        }
    }
}
