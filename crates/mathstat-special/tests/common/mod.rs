//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Relative tolerance when comparing against an independent implementation
pub const ORACLE_TOLERANCE: f64 = 1e-9;

/// Seeded generator so failures reproduce
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Shape parameters spanning the small, moderate and large regimes
pub fn shape_parameters() -> Vec<f64> {
    vec![0.1, 0.5, 1.0, 2.5, 7.0, 20.0, 75.0, 250.0]
}

/// Draw `n` uniform points in the open interval (lo, hi)
pub fn uniform_points(rng: &mut impl Rng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Absolute floor below which two values count as equal regardless of scale
pub const ABSOLUTE_FLOOR: f64 = 1e-13;

/// Whether `actual` is within `tol` relative error of `expected`, or within
/// [`ABSOLUTE_FLOOR`] of it outright
pub fn close(actual: f64, expected: f64, tol: f64) -> bool {
    let diff = (actual - expected).abs();
    diff <= ABSOLUTE_FLOOR || diff <= tol * expected.abs()
}
