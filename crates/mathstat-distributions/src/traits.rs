//! Core traits for distribution evaluation

use crate::{Result, SummaryStatistics};
use mathstat_core::Policy;

/// A univariate probability distribution.
///
/// Only [`cdf`](Distribution::cdf), [`ppf`](Distribution::ppf) and
/// [`stats`](Distribution::stats) are required. The remaining methods have
/// generic definitions in terms of those three and should be overridden
/// whenever a direct formula is more accurate, in particular in the tails
/// where `1 - cdf(x)` cancels.
///
/// Methods never add error handling of their own: numeric conditions come
/// from the special-function kernels under the distribution's policy.
pub trait Distribution {
    /// Cumulative distribution function
    fn cdf(&self, x: f64) -> Result<f64>;

    /// Percent point function, the inverse of [`cdf`](Distribution::cdf)
    fn ppf(&self, q: f64) -> Result<f64>;

    /// Mean, variance, skewness and excess kurtosis
    fn stats(&self) -> SummaryStatistics;

    fn log_cdf(&self, x: f64) -> Result<f64> {
        Ok(self.cdf(x)?.ln())
    }

    /// Survival function `1 - cdf(x)`
    fn sf(&self, x: f64) -> Result<f64> {
        Ok(1.0 - self.cdf(x)?)
    }

    fn log_sf(&self, x: f64) -> Result<f64> {
        Ok(self.sf(x)?.ln())
    }

    /// Inverse of the survival function
    fn inverse_sf(&self, q: f64) -> Result<f64> {
        self.ppf(1.0 - q)
    }

    fn median(&self) -> Result<f64> {
        self.ppf(0.5)
    }

    fn mean(&self) -> f64 {
        self.stats().mean()
    }
}

/// A distribution with a density
pub trait ContinuousDistribution: Distribution {
    /// Probability density function
    fn pdf(&self, x: f64) -> Result<f64>;

    fn log_pdf(&self, x: f64) -> Result<f64> {
        Ok(self.pdf(x)?.ln())
    }
}

/// A distribution on its standardized axis (location 0, scale 1).
///
/// Implementors hold only their shape parameters. The policy is passed in
/// by the caller, usually [`LocationScale`](crate::LocationScale), which
/// maps an arbitrary location and scale onto these methods.
pub trait StandardDistribution {
    fn standard_pdf(&self, z: f64, policy: Policy) -> Result<f64>;

    fn standard_cdf(&self, z: f64, policy: Policy) -> Result<f64>;

    fn standard_ppf(&self, q: f64, policy: Policy) -> Result<f64>;

    /// Moments of the standardized form
    fn standard_stats(&self) -> SummaryStatistics;

    fn standard_log_pdf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(self.standard_pdf(z, policy)?.ln())
    }

    fn standard_log_cdf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(self.standard_cdf(z, policy)?.ln())
    }

    fn standard_sf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(1.0 - self.standard_cdf(z, policy)?)
    }

    fn standard_log_sf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(self.standard_sf(z, policy)?.ln())
    }

    fn standard_isf(&self, q: f64, policy: Policy) -> Result<f64> {
        self.standard_ppf(1.0 - q, policy)
    }
}
