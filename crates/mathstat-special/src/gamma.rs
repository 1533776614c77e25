//! Gamma function and its logarithm
//!
//! `gamma` evaluates a rational approximation on [2, 3] after shifting the
//! argument with the recurrence, switches to Stirling's formula above 33 and
//! uses the reflection formula for large negative arguments. `lgam` follows
//! the same plan on the log scale and tracks the sign of Γ separately.

use crate::zeta::zeta;
use mathstat_core::constants::{EULER, LOG_PI, LOG_SQRT_2PI, MACHEP, MAXGAM, SQRT_2PI};
use mathstat_core::ieee::modf;
use mathstat_core::polynomial::{p1evl, polevl};
use mathstat_core::{Policy, Result};
use std::f64::consts::PI;

const GAMMA_P: [f64; 7] = [
    1.601_195_224_767_518_614_07e-4,
    1.191_351_470_065_863_849_13e-3,
    1.042_137_975_617_615_699_35e-2,
    4.763_678_004_571_372_314_64e-2,
    2.074_482_276_484_359_751_50e-1,
    4.942_148_268_014_971_007_53e-1,
    9.999_999_999_999_999_967_96e-1,
];

const GAMMA_Q: [f64; 8] = [
    -2.315_818_733_241_201_298_19e-5,
    5.396_055_804_933_033_978_42e-4,
    -4.456_419_138_517_972_404_94e-3,
    1.181_397_852_220_604_355_52e-2,
    3.582_363_986_054_986_533_73e-2,
    -2.345_917_957_182_433_485_68e-1,
    7.143_049_170_302_730_740_85e-2,
    1.000_000_000_000_000_003_20e0,
];

/// Stirling's formula expansion of Γ(x) for 33 <= x <= 172
const STIR: [f64; 5] = [
    7.873_113_957_930_936_283_97e-4,
    -2.295_499_616_133_781_263_80e-4,
    -2.681_326_178_057_812_328_25e-3,
    3.472_222_216_054_586_673_10e-3,
    8.333_333_333_334_822_571_26e-2,
];

const MAXSTIR: f64 = 143.01608;

/// ln Γ(x) for x >= 13 by Stirling's expansion
const LGAM_A: [f64; 5] = [
    8.116_141_674_705_084_503_00e-4,
    -5.950_619_042_843_014_383_24e-4,
    7.936_503_404_577_169_439_45e-4,
    -2.777_777_777_300_996_872_05e-3,
    8.333_333_333_333_319_277_22e-2,
];

/// ln Γ(x + 2) on [0, 1)
const LGAM_B: [f64; 6] = [
    -1.378_251_525_691_208_591_00e3,
    -3.880_163_151_346_378_409_24e4,
    -3.316_129_927_388_711_847_44e5,
    -1.162_370_974_927_623_073_83e6,
    -1.721_737_008_208_396_621_46e6,
    -8.535_556_642_457_654_656_27e5,
];

const LGAM_C: [f64; 6] = [
    -3.518_157_014_365_234_705_49e2,
    -1.706_421_066_518_811_592_23e4,
    -2.205_285_905_538_544_548_39e5,
    -1.139_334_443_679_825_072_07e6,
    -2.532_523_071_775_829_512_85e6,
    -2.018_891_414_335_327_732_31e6,
];

/// Above this ln Γ overflows
const MAXLGM: f64 = 2.556_348e305;

/// Γ(x) by Stirling's formula, valid for 33 <= x < MAXGAM
fn stirf(x: f64) -> f64 {
    if x >= MAXGAM {
        return f64::INFINITY;
    }
    let w = 1.0 / x;
    let w = 1.0 + w * polevl(w, &STIR);
    let y = x.exp();
    let y = if x > MAXSTIR {
        // Avoid overflow in x^(x - 0.5)
        let v = x.powf(0.5 * x - 0.25);
        v * (v / y)
    } else {
        x.powf(x - 0.5) / y
    };
    SQRT_2PI * y * w
}

/// The gamma function Γ(x).
///
/// Poles at zero and the negative integers report a singular condition with
/// `+∞` as the quiet fallback; arguments above about 171.6 overflow.
/// Infinite arguments are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::Policy;
/// use mathstat_special::gamma;
///
/// let g = gamma(1.5, Policy::Quiet).unwrap();
/// assert!((g - 0.886_226_925_452_758).abs() < 1e-15);
/// ```
pub fn gamma(x: f64, policy: Policy) -> Result<f64> {
    if !x.is_finite() {
        return Ok(x);
    }

    let q = x.abs();
    if q > 33.0 {
        if x >= 0.0 {
            if x >= MAXGAM {
                return policy.overflow("gamma", f64::INFINITY);
            }
            return Ok(stirf(x));
        }

        let (frac, whole) = modf(q);
        if frac == 0.0 {
            return policy.singular("gamma", f64::INFINITY);
        }
        let sign = if (whole as i64) & 1 == 0 { -1.0 } else { 1.0 };
        let z = if frac > 0.5 { q - (whole + 1.0) } else { frac };
        let z = (q * (PI * z).sin()).abs();
        if z == 0.0 {
            return policy.overflow("gamma", sign * f64::INFINITY);
        }
        return Ok(sign * PI / (z * stirf(q)));
    }

    let mut x = x;
    let mut z = 1.0;
    while x >= 3.0 {
        x -= 1.0;
        z *= x;
    }
    while x < 0.0 {
        if x > -1e-9 {
            return gamma_near_zero(x, z, policy);
        }
        z /= x;
        x += 1.0;
    }
    while x < 2.0 {
        if x < 1e-9 {
            return gamma_near_zero(x, z, policy);
        }
        z /= x;
        x += 1.0;
    }
    if x == 2.0 {
        return Ok(z);
    }

    let x = x - 2.0;
    Ok(z * polevl(x, &GAMMA_P) / polevl(x, &GAMMA_Q))
}

fn gamma_near_zero(x: f64, z: f64, policy: Policy) -> Result<f64> {
    if x == 0.0 {
        return policy.singular("gamma", f64::INFINITY);
    }
    Ok(z / ((1.0 + EULER * x) * x))
}

/// Natural log of |Γ(x)|.
///
/// See [`lgam_sgn`] for the sign.
pub fn lgam(x: f64, policy: Policy) -> Result<f64> {
    lgam_sgn(x, policy).map(|(value, _)| value)
}

/// Natural log of |Γ(x)| together with the sign of Γ(x) (+1 or −1).
///
/// Non-positive integers are poles and report a singular condition with
/// `+∞` as the quiet fallback.
pub fn lgam_sgn(x: f64, policy: Policy) -> Result<(f64, i32)> {
    if x.is_nan() {
        return Ok((x, 1));
    }
    if x.is_infinite() {
        return Ok((f64::INFINITY, 1));
    }

    if x < -34.0 {
        let q = -x;
        let (w, _) = lgam_sgn(q, policy)?;
        let (frac, whole) = modf(q);
        if frac == 0.0 {
            return policy.singular("lgam", f64::INFINITY).map(|v| (v, 1));
        }
        let sign = if (whole as i64) & 1 == 0 { -1 } else { 1 };
        let z = if frac > 0.5 { (whole + 1.0) - q } else { frac };
        let z = q * (PI * z).sin();
        if z == 0.0 {
            return policy.singular("lgam", f64::INFINITY).map(|v| (v, sign));
        }
        return Ok((LOG_PI - z.ln() - w, sign));
    }

    if x < 13.0 {
        let mut z = 1.0;
        let mut p = 0.0;
        let mut u = x;
        while u >= 3.0 {
            p -= 1.0;
            u = x + p;
            z *= u;
        }
        while u < 2.0 {
            if u == 0.0 {
                return policy.singular("lgam", f64::INFINITY).map(|v| (v, 1));
            }
            z /= u;
            p += 1.0;
            u = x + p;
        }
        let sign = if z < 0.0 { -1 } else { 1 };
        let z = z.abs();
        if u == 2.0 {
            return Ok((z.ln(), sign));
        }
        let x = x + (p - 2.0);
        let p = x * polevl(x, &LGAM_B) / p1evl(x, &LGAM_C);
        return Ok((z.ln() + p, sign));
    }

    if x > MAXLGM {
        return policy.overflow("lgam", f64::INFINITY).map(|v| (v, 1));
    }

    let mut q = (x - 0.5) * x.ln() - x + LOG_SQRT_2PI;
    if x > 1.0e8 {
        return Ok((q, 1));
    }
    let p = 1.0 / (x * x);
    if x >= 1000.0 {
        q += ((7.936_507_936_507_936_507_936_5e-4 * p - 2.777_777_777_777_777_777_777_8e-3) * p
            + 0.083_333_333_333_333_333_333_3)
            / x;
    } else {
        q += polevl(p, &LGAM_A) / x;
    }
    Ok((q, 1))
}

/// `ln(1 + x) − x`, accurate for small `x`
pub fn log1pmx(x: f64) -> f64 {
    if x.abs() < 0.5 {
        let mut xfac = x;
        let mut res = 0.0;
        for n in 2..2000 {
            xfac *= -x;
            let term = xfac / n as f64;
            res += term;
            if term.abs() < MACHEP * res.abs() {
                break;
            }
        }
        res
    } else {
        x.ln_1p() - x
    }
}

/// Taylor series of ln Γ(1 + x) around 0; coefficients are ζ(n)
fn lgam1p_taylor(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let mut res = -EULER * x;
    let mut xfac = -x;
    for n in 2..42 {
        xfac *= -x;
        let coeff = zeta_integer(n) * xfac / n as f64;
        res += coeff;
        if coeff.abs() < MACHEP * res.abs() {
            break;
        }
    }
    res
}

fn zeta_integer(n: i32) -> f64 {
    // The Euler–Maclaurin sum is well inside its domain for n >= 2, q = 1
    zeta(n as f64, 1.0, Policy::Quiet).unwrap_or(f64::NAN)
}

/// ln Γ(1 + x), accurate near x = 0 and x = 1
pub fn lgam1p(x: f64, policy: Policy) -> Result<f64> {
    if x.abs() <= 0.5 {
        Ok(lgam1p_taylor(x))
    } else if (x - 1.0).abs() < 0.5 {
        Ok(x.ln() + lgam1p_taylor(x - 1.0))
    } else {
        lgam(x + 1.0, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn g(x: f64) -> f64 {
        gamma(x, Policy::Quiet).unwrap()
    }

    fn lg(x: f64) -> f64 {
        lgam(x, Policy::Quiet).unwrap()
    }

    #[test]
    fn test_gamma_reference() {
        let cases = [
            (-0.9, -10.570564109631928),
            (-0.75, -4.834146544295876),
            (-0.5, -3.5449077018110318),
            (-0.25, -4.90166680986071),
            (-0.1, -10.686287021193193),
            (-0.01, -100.5871979644108),
            (0.01, 99.43258511915059),
            (0.1, 9.513507698668732),
            (0.25, 3.625609908221908),
            (0.5, 1.7724538509055159),
            (0.75, 1.2254167024651774),
            (0.9, 1.0686287021193195),
            (1.0, 1.0),
            (1.5, 0.8862269254527579),
            (5.0, 24.0),
            (10.0, 362880.0),
            (100.0, 9.332621544394417e155),
        ];
        for (x, expected) in cases {
            assert_relative_eq!(g(x), expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_gamma_reflection_region() {
        // Γ(-40.5) via Γ(x)Γ(1-x) = π / sin(πx)
        let x: f64 = -40.5;
        let expected = PI / ((PI * x).sin() * g(1.0 - x));
        assert_relative_eq!(g(x), expected, max_relative = 1e-13);
        assert!(g(-33.5) > 0.0);
        assert!(g(-34.5) < 0.0);
    }

    #[test]
    fn test_gamma_poles_and_infinities() {
        for x in [0.0, -1.0, -5.0, -10.0, -100.0] {
            assert_eq!(g(x), f64::INFINITY);
            let err = gamma(x, Policy::Raise).unwrap_err();
            assert_eq!(err.numeric_kind(), Some(mathstat_core::ErrorKind::Singular));
        }
        assert!(g(f64::NAN).is_nan());
        assert_eq!(g(f64::INFINITY), f64::INFINITY);
        assert_eq!(g(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_gamma_overflow() {
        assert!(g(171.6).is_finite());
        assert_eq!(g(172.0), f64::INFINITY);
        assert!(gamma(200.0, Policy::Raise).is_err());
    }

    #[test]
    fn test_lgam_values() {
        assert_relative_eq!(lg(0.5), PI.sqrt().ln(), max_relative = 1e-15);
        assert_eq!(lg(1.0), 0.0);
        assert_eq!(lg(2.0), 0.0);
        assert_relative_eq!(lg(10.0), 362880f64.ln(), max_relative = 1e-15);
        assert_relative_eq!(lg(100.0), 359.134_205_369_575_4, max_relative = 1e-15);
        // Stirling beyond 1000 and the bare leading term beyond 1e8
        assert_relative_eq!(lg(2000.0), 13_198.923_448_054_265, max_relative = 1e-15);
        let x: f64 = 1e9;
        assert_relative_eq!(lg(x), (x - 0.5) * x.ln() - x + LOG_SQRT_2PI, max_relative = 1e-15);
    }

    #[test]
    fn test_lgam_sign() {
        let (v, s) = lgam_sgn(-0.5, Policy::Quiet).unwrap();
        assert_eq!(s, -1);
        assert_relative_eq!(v, 3.5449077018110318f64.ln(), max_relative = 1e-14);
        let (_, s) = lgam_sgn(-1.5, Policy::Quiet).unwrap();
        assert_eq!(s, 1);
        let (v, s) = lgam_sgn(-40.5, Policy::Quiet).unwrap();
        assert_eq!(s, -1);
        assert_relative_eq!(v, g(-40.5).abs().ln(), max_relative = 1e-13);
    }

    #[test]
    fn test_lgam_poles() {
        assert_eq!(lg(0.0), f64::INFINITY);
        assert_eq!(lg(-3.0), f64::INFINITY);
        assert_eq!(lg(-50.0), f64::INFINITY);
        assert!(lgam(-2.0, Policy::Raise).is_err());
    }

    #[test]
    fn test_log1pmx() {
        for x in [-0.4, -1e-3, 0.3, 0.75, 4.0] {
            assert_relative_eq!(log1pmx(x), x.ln_1p() - x, max_relative = 1e-10);
        }
        // Tiny arguments keep full relative precision: -x²/2 + x³/3
        assert_relative_eq!(log1pmx(1e-9), -5e-19 + 1e-27 / 3.0, max_relative = 1e-15);
    }

    #[test]
    fn test_lgam1p() {
        for x in [-0.4, -1e-6, 1e-6, 0.2, 0.7, 1.3, 3.0] {
            assert_relative_eq!(
                lgam1p(x, Policy::Quiet).unwrap(),
                lg(1.0 + x),
                max_relative = 1e-9,
                epsilon = 1e-15
            );
        }
        assert_eq!(lgam1p(0.0, Policy::Quiet).unwrap(), 0.0);
    }
}
