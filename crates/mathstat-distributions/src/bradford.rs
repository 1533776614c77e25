//! The Bradford distribution on `[0, 1]`

use crate::traits::StandardDistribution;
use crate::{Error, Result, SummaryStatistics};
use mathstat_core::Policy;

/// Standardized Bradford distribution with shape `c > 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bradford {
    c: f64,
    /// `ln(1 + c)`
    k: f64,
}

impl Bradford {
    pub fn new(c: f64) -> Result<Self> {
        Error::check_positive("c", c)?;
        Ok(Self { c, k: c.ln_1p() })
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl StandardDistribution for Bradford {
    fn standard_pdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        if !(0.0..=1.0).contains(&z) {
            return Ok(0.0);
        }
        Ok(self.c / ((self.c * z + 1.0) * self.k))
    }

    fn standard_cdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        if z <= 0.0 {
            return Ok(0.0);
        }
        if z >= 1.0 {
            return Ok(1.0);
        }
        Ok((self.c * z).ln_1p() / self.k)
    }

    fn standard_ppf(&self, q: f64, _policy: Policy) -> Result<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Ok(f64::NAN);
        }
        Ok((q * self.k).exp_m1() / self.c)
    }

    fn standard_stats(&self) -> SummaryStatistics {
        let (c, k) = (self.c, self.k);
        let mean = (c - k) / (c * k);
        let variance = ((c + 2.0) * k - 2.0 * c) / (2.0 * c * k * k);

        let spread = c * (k - 2.0) + 2.0 * k;
        let skewness = 2f64.sqrt() * (12.0 * c * c - 9.0 * c * k * (c + 2.0) + 2.0 * k * k * (c * (c + 3.0) + 3.0))
            / ((c * spread).sqrt() * (3.0 * c * (k - 2.0) + 6.0 * k));
        let kurtosis = (c.powi(3) * (k - 3.0) * (k * (3.0 * k - 16.0) + 24.0)
            + 12.0 * k * c * c * (k - 4.0) * (k - 3.0)
            + 6.0 * c * k * k * (3.0 * k - 14.0)
            + 12.0 * k.powi(3))
            / (3.0 * c * spread * spread);
        SummaryStatistics::new(mean, variance, skewness, kurtosis)
    }
}
