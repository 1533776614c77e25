//! The normal distribution
//!
//! Every method goes straight to the Gaussian kernels rather than through
//! the generic complements: the survival function is `ndtr(-z)`, the log
//! forms use `log_ndtr` and the inverse survival function is `-ndtri(q)`,
//! so both tails keep full relative precision.

use crate::location_scale::LocationScale;
use crate::traits::{ContinuousDistribution, Distribution, StandardDistribution};
use crate::{Result, SummaryStatistics};
use mathstat_core::constants::{LOG_SQRT_2PI, SQRT_2PI};
use mathstat_core::{utils, Policy};
use mathstat_special::{log_ndtr, ndtr, ndtri};
use tracing::{debug, instrument};

/// The standard normal distribution N(0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardNormal;

impl StandardDistribution for StandardNormal {
    fn standard_pdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        Ok((-0.5 * z * z).exp() / SQRT_2PI)
    }

    fn standard_log_pdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        Ok(-0.5 * z * z - LOG_SQRT_2PI)
    }

    fn standard_cdf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(ndtr(z, policy)?)
    }

    fn standard_log_cdf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(log_ndtr(z, policy)?)
    }

    fn standard_sf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(ndtr(-z, policy)?)
    }

    fn standard_log_sf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(log_ndtr(-z, policy)?)
    }

    fn standard_ppf(&self, q: f64, policy: Policy) -> Result<f64> {
        Ok(ndtri(q, policy)?)
    }

    fn standard_isf(&self, q: f64, policy: Policy) -> Result<f64> {
        Ok(-ndtri(q, policy)?)
    }

    fn standard_stats(&self) -> SummaryStatistics {
        SummaryStatistics::new(0.0, 1.0, 0.0, 0.0)
    }
}

/// Normal distribution with a given mean and standard deviation.
///
/// # Example
///
/// ```rust
/// use mathstat_distributions::{ContinuousDistribution, Distribution, Normal};
///
/// let n = Normal::new(100.0, 15.0).unwrap();
/// assert!((n.cdf(100.0).unwrap() - 0.5).abs() < 1e-15);
/// assert!((n.ppf(0.975).unwrap() - 129.39945976810081).abs() < 1e-10);
///
/// let fitted = Normal::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(fitted.mean(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    inner: LocationScale<StandardNormal>,
}

impl Normal {
    /// `std_dev` must be positive and `mean` finite
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        Ok(Self {
            inner: LocationScale::new(StandardNormal, mean, std_dev)?,
        })
    }

    /// The standard normal with the process-wide default policy
    pub fn standard() -> Self {
        Self {
            inner: LocationScale::standard(StandardNormal),
        }
    }

    /// Moment estimate from a sample: the mean and the unbiased (n − 1)
    /// standard deviation.
    ///
    /// Fails with an insufficient-data error for fewer than two
    /// observations, and with an invalid parameter if the sample has no
    /// spread.
    #[instrument(skip(data), fields(n = data.len()))]
    pub fn from_sample(data: &[f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(mathstat_core::Error::InsufficientData {
                expected: 2,
                actual: data.len(),
            }
            .into());
        }
        let mean = utils::mean(data);
        let std_dev = utils::std_dev(data);
        debug!(mean, std_dev, "fitted normal distribution");
        Self::new(mean, std_dev)
    }

    pub fn with_policy(self, policy: Policy) -> Self {
        Self {
            inner: self.inner.with_policy(policy),
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.inner.scale()
    }

    pub fn policy(&self) -> Policy {
        self.inner.policy()
    }
}

impl Distribution for Normal {
    fn cdf(&self, x: f64) -> Result<f64> {
        self.inner.cdf(x)
    }

    fn ppf(&self, q: f64) -> Result<f64> {
        self.inner.ppf(q)
    }

    fn stats(&self) -> SummaryStatistics {
        self.inner.stats()
    }

    fn log_cdf(&self, x: f64) -> Result<f64> {
        self.inner.log_cdf(x)
    }

    fn sf(&self, x: f64) -> Result<f64> {
        self.inner.sf(x)
    }

    fn log_sf(&self, x: f64) -> Result<f64> {
        self.inner.log_sf(x)
    }

    fn inverse_sf(&self, q: f64) -> Result<f64> {
        self.inner.inverse_sf(q)
    }

    fn median(&self) -> Result<f64> {
        Ok(self.inner.loc())
    }

    fn mean(&self) -> f64 {
        self.inner.loc()
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> Result<f64> {
        self.inner.pdf(x)
    }

    fn log_pdf(&self, x: f64) -> Result<f64> {
        self.inner.log_pdf(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const XS: [f64; 4] = [-3.0, -2.0, -1.0, 0.0];
    const PDF: [f64; 4] = [0.0044318484, 0.0539909665, 0.2419707245, 0.3989422804];
    const CDF: [f64; 4] = [0.0013498980, 0.0227501319, 0.1586552539, 0.5];

    #[test]
    fn test_standard_reference_values() {
        let n = Normal::standard();
        for i in 0..XS.len() {
            assert_relative_eq!(n.pdf(XS[i]).unwrap(), PDF[i], epsilon = 1e-8);
            assert_relative_eq!(n.cdf(XS[i]).unwrap(), CDF[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_shifted_reference_values() {
        let n = Normal::new(10.0, 2.0).unwrap();
        for i in 0..XS.len() {
            let x = 10.0 + 2.0 * XS[i];
            assert_relative_eq!(n.pdf(x).unwrap(), PDF[i] / 2.0, epsilon = 1e-8);
            assert_relative_eq!(n.cdf(x).unwrap(), CDF[i], epsilon = 1e-8);
            assert_relative_eq!(n.log_pdf(x).unwrap(), (PDF[i] / 2.0).ln(), epsilon = 1e-8);
        }
    }

    #[test]
    fn test_quantile_endpoints() {
        let n = Normal::new(3.0, 0.5).unwrap();
        assert_eq!(n.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(n.ppf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(n.ppf(0.5).unwrap(), 3.0);
        assert_eq!(n.inverse_sf(0.5).unwrap(), 3.0);
        assert_eq!(n.median().unwrap(), 3.0);
        assert!(n.ppf(1.5).unwrap().is_nan());
    }

    #[test]
    fn test_tails_keep_precision() {
        let n = Normal::standard();
        // 1 - cdf(10) would be exactly zero
        assert_relative_eq!(n.sf(10.0).unwrap(), 7.619853024160527e-24, max_relative = 1e-12);
        assert_relative_eq!(n.log_sf(40.0).unwrap(), -804.6084420137538, max_relative = 1e-12);
        assert_relative_eq!(n.inverse_sf(1e-20).unwrap(), 9.262340089798408, max_relative = 1e-12);
    }

    #[test]
    fn test_saturated_tails_under_raise() {
        let n = Normal::new(1.0, 2.0).unwrap().with_policy(Policy::Raise);
        assert_eq!(n.cdf(f64::INFINITY).unwrap(), 1.0);
        assert_eq!(n.cdf(f64::NEG_INFINITY).unwrap(), 0.0);
        assert_eq!(n.sf(f64::NEG_INFINITY).unwrap(), 1.0);
        assert_eq!(n.cdf(100.0).unwrap(), 1.0);
    }

    #[test]
    fn test_stats_follow_parameters() {
        let n = Normal::new(-4.0, 3.0).unwrap();
        assert_eq!(n.stats(), SummaryStatistics::new(-4.0, 9.0, 0.0, 0.0));
        assert_eq!(n.mean(), -4.0);
        assert_eq!(n.std_dev(), 3.0);
    }

    #[test]
    fn test_from_sample() {
        let n = Normal::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(n.mean(), 5.0);
        assert_relative_eq!(n.std_dev(), (32.0f64 / 7.0).sqrt(), epsilon = 1e-14);

        for short in [&[][..], &[1.0][..]] {
            let err = Normal::from_sample(short).unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert!(Normal::from_sample(&[2.0, 2.0, 2.0]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_policy_controls_kernel_errors() {
        let quiet = Normal::standard().with_policy(Policy::Quiet);
        assert!(quiet.ppf(-0.5).unwrap().is_nan());

        let strict = quiet.with_policy(Policy::Raise);
        assert_eq!(strict.policy(), Policy::Raise);
        let err = strict.ppf(-0.5).unwrap_err();
        assert_eq!(err.numeric_kind(), Some(mathstat_core::ErrorKind::Domain));
    }
}
