//! The alpha distribution
//!
//! If `Y` is normal with mean `a` truncated to positive values, `1 / Y` is
//! alpha-distributed with shape `a`. Support is `z > 0`.

use crate::normal::StandardNormal;
use crate::traits::StandardDistribution;
use crate::{Error, Result, SummaryStatistics};
use mathstat_core::Policy;
use mathstat_special::{ndtr, ndtri};

/// Standardized alpha distribution with shape `a > 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alpha {
    a: f64,
}

impl Alpha {
    pub fn new(a: f64) -> Result<Self> {
        Error::check_positive("a", a)?;
        Ok(Self { a })
    }

    pub fn a(&self) -> f64 {
        self.a
    }
}

impl StandardDistribution for Alpha {
    fn standard_pdf(&self, z: f64, policy: Policy) -> Result<f64> {
        if z <= 0.0 {
            return Ok(0.0);
        }
        let density = StandardNormal.standard_pdf(self.a - 1.0 / z, policy)?;
        Ok(density / (z * z) / ndtr(self.a, policy)?)
    }

    fn standard_log_pdf(&self, z: f64, policy: Policy) -> Result<f64> {
        if z <= 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        let log_density = StandardNormal.standard_log_pdf(self.a - 1.0 / z, policy)?;
        Ok(-2.0 * z.ln() + log_density - ndtr(self.a, policy)?.ln())
    }

    fn standard_cdf(&self, z: f64, policy: Policy) -> Result<f64> {
        if z <= 0.0 {
            return Ok(0.0);
        }
        Ok(ndtr(self.a - 1.0 / z, policy)? / ndtr(self.a, policy)?)
    }

    fn standard_ppf(&self, q: f64, policy: Policy) -> Result<f64> {
        if q == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(1.0 / (self.a - ndtri(q * ndtr(self.a, policy)?, policy)?))
    }

    /// No moment of the alpha distribution is finite
    fn standard_stats(&self) -> SummaryStatistics {
        SummaryStatistics::new(f64::INFINITY, f64::INFINITY, f64::NAN, f64::NAN)
    }
}
