//! The arcsine distribution on `[0, 1]`

use crate::traits::StandardDistribution;
use crate::{Result, SummaryStatistics};
use mathstat_core::Policy;
use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, PI};

/// Standardized arcsine distribution, the Beta(1/2, 1/2) law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Arcsine;

impl StandardDistribution for Arcsine {
    fn standard_pdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        if !(0.0..=1.0).contains(&z) {
            return Ok(0.0);
        }
        Ok(1.0 / (PI * (z * (1.0 - z)).sqrt()))
    }

    fn standard_cdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        if z <= 0.0 {
            return Ok(0.0);
        }
        if z >= 1.0 {
            return Ok(1.0);
        }
        Ok(FRAC_2_PI * z.sqrt().asin())
    }

    fn standard_ppf(&self, q: f64, _policy: Policy) -> Result<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Ok(f64::NAN);
        }
        let s = (FRAC_PI_2 * q).sin();
        Ok(s * s)
    }

    fn standard_stats(&self) -> SummaryStatistics {
        SummaryStatistics::new(0.5, 0.125, 0.0, -1.5)
    }
}
