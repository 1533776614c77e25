//! Shared utilities for integration tests

#![allow(dead_code)]

use mathstat_distributions::{Alpha, Anglit, Arcsine, Bradford, LocationScale, StudentT};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// statrs evaluates erf to roughly 1e-11, so agreement is only checked to this
pub const STATRS_TOLERANCE: f64 = 1e-9;

/// Seeded generator so failures reproduce
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Sample `n` draws from N(mean, sd)
pub fn normal_sample(rng: &mut impl Rng, n: usize, mean: f64, sd: f64) -> Vec<f64> {
    let dist = rand_distr::Normal::new(mean, sd).expect("valid normal parameters");
    (0..n).map(|_| dist.sample(rng)).collect()
}

pub fn student_t(df: u32, loc: f64, scale: f64) -> LocationScale<StudentT> {
    LocationScale::new(StudentT::new(df).expect("df > 0"), loc, scale).expect("valid location/scale")
}

/// Bounded-support distributions at a non-trivial location and scale
pub fn bounded() -> (
    LocationScale<Anglit>,
    LocationScale<Arcsine>,
    LocationScale<Bradford>,
    LocationScale<Alpha>,
) {
    (
        LocationScale::new(Anglit, 1.0, 2.0).expect("valid"),
        LocationScale::new(Arcsine, -1.0, 3.0).expect("valid"),
        LocationScale::new(Bradford::new(2.5).expect("c > 0"), 0.0, 0.5).expect("valid"),
        LocationScale::new(Alpha::new(1.7).expect("a > 0"), 0.0, 1.0).expect("valid"),
    )
}
