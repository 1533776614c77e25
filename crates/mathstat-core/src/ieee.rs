//! IEEE-754 bit-level helpers
//!
//! Exact scaling by powers of two and exact splitting of a double into its
//! parts. These work directly on the 64-bit representation so that
//! subnormals, signed zeros, infinities and NaN come out exactly rather
//! than through rounded arithmetic.

use crate::error::Result;
use crate::polynomial::{p1evl, polevl};
use crate::Policy;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const EXP_MASK: u64 = 0x7ff;
const EXP_BIAS: i32 = 0x3ff;
const MANTISSA_BITS: u32 = 52;

/// Bit patterns of 2^1023, 2^-969 (2^-1022 · 2^53) and 2^64
const TWO_P1023_BITS: u64 = 0x7fe0_0000_0000_0000;
const TWO_M969_BITS: u64 = 0x0360_0000_0000_0000;
const TWO_P64_BITS: u64 = 0x43f0_0000_0000_0000;

#[inline]
fn biased_exponent(bits: u64) -> i32 {
    ((bits >> MANTISSA_BITS) & EXP_MASK) as i32
}

/// Multiply `x` by `2^n` without intermediate rounding.
///
/// The result is rounded once, so gradual underflow into the subnormal
/// range is exact whenever the true value is representable.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::ieee::ldexp;
///
/// assert_eq!(ldexp(7.0, -4), 0.4375);
/// assert_eq!(ldexp(1.0, -1074), f64::from_bits(1));
/// assert!(ldexp(1.0, 1024).is_infinite());
/// ```
pub fn ldexp(x: f64, n: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    let two_p1023 = f64::from_bits(TWO_P1023_BITS);
    let two_m969 = f64::from_bits(TWO_M969_BITS);

    let mut y = x;
    let mut n = n;
    if n > 1023 {
        y *= two_p1023;
        n -= 1023;
        if n > 1023 {
            y *= two_p1023;
            n -= 1023;
            n = n.min(1023);
        }
    } else if n < -1022 {
        // Step down in chunks that keep 53 bits of headroom above the
        // subnormal range so only the final multiply rounds.
        y *= two_m969;
        n += 969;
        if n < -1022 {
            y *= two_m969;
            n += 969;
            n = n.max(-1022);
        }
    }
    y * f64::from_bits(((EXP_BIAS + n) as u64) << MANTISSA_BITS)
}

/// Split `x` into a mantissa in `[0.5, 1)` and a power of two.
///
/// `x == mantissa · 2^exponent`. Zero, infinities and NaN are returned
/// unchanged with exponent 0.
pub fn frexp(x: f64) -> (f64, i32) {
    let bits = x.to_bits();
    match biased_exponent(bits) {
        0 if x == 0.0 => (x, 0),
        0 => {
            // Subnormal: normalise first
            let (mantissa, exponent) = frexp(x * f64::from_bits(TWO_P64_BITS));
            (mantissa, exponent - 64)
        }
        0x7ff => (x, 0),
        e => {
            let mantissa = f64::from_bits((bits & 0x800f_ffff_ffff_ffff) | 0x3fe0_0000_0000_0000);
            (mantissa, e - (EXP_BIAS - 1))
        }
    }
}

/// Split `x` into its fractional and integral parts, both carrying the
/// sign of `x`.
///
/// Returns `(fractional, integral)`.
pub fn modf(x: f64) -> (f64, f64) {
    let bits = x.to_bits();
    let signed_zero = f64::from_bits(bits & SIGN_MASK);
    let e = biased_exponent(bits) - EXP_BIAS;

    if e >= MANTISSA_BITS as i32 {
        if x.is_nan() {
            return (x, x);
        }
        return (signed_zero, x);
    }
    if e < 0 {
        return (x, signed_zero);
    }

    let mask = (u64::MAX >> 12) >> e;
    if bits & mask == 0 {
        return (signed_zero, x);
    }
    let integral = f64::from_bits(bits & !mask);
    (x - integral, integral)
}

const EXP2_P: [f64; 3] = [
    2.309_334_770_573_452_250_87e-2,
    2.020_206_566_931_653_077_00e1,
    1.513_906_801_156_151_330_96e3,
];
const EXP2_Q: [f64; 2] = [2.331_842_117_223_149_117_71e2, 4.368_211_668_792_108_128_17e3];

const MAX_EXP2: f64 = 1024.0;
const MIN_EXP2: f64 = -1074.0;

/// Base-2 exponential, `2^x`.
///
/// The argument is split into an integer and a remainder in `[-0.5, 0.5]`;
/// the remainder goes through a rational approximation and the integer part
/// is applied exactly with [`ldexp`].
pub fn exp2(x: f64, policy: Policy) -> Result<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if x > MAX_EXP2 {
        return policy.overflow("exp2", f64::INFINITY);
    }
    if x < MIN_EXP2 {
        return policy.underflow("exp2", 0.0);
    }

    let whole = (x + 0.5).floor();
    let n = whole as i32;
    let r = x - whole;

    let rr = r * r;
    let px = r * polevl(rr, &EXP2_P);
    let r = px / (p1evl(rr, &EXP2_Q) - px);
    let r = 1.0 + ldexp(r, 1);

    Ok(ldexp(r, n))
}
