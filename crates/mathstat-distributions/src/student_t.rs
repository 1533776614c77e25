//! Student's t distribution with integer degrees of freedom

use crate::traits::StandardDistribution;
use crate::{Error, Result, SummaryStatistics};
use mathstat_core::Policy;
use mathstat_special::{lgam, stdtr, stdtri};
use std::f64::consts::PI;

/// Standardized Student's t with `df` degrees of freedom.
///
/// Wrap in [`LocationScale`](crate::LocationScale) for a shifted or scaled
/// variant.
///
/// # Example
///
/// ```rust
/// use mathstat_core::Policy;
/// use mathstat_distributions::{StandardDistribution, StudentT};
///
/// let t = StudentT::new(2).unwrap();
/// let q = t.standard_ppf(0.975, Policy::Quiet).unwrap();
/// assert!((q - 4.302652729911275).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StudentT {
    df: u32,
}

impl StudentT {
    pub fn new(df: u32) -> Result<Self> {
        if df == 0 {
            return Err(Error::InvalidParameter {
                name: "df",
                value: 0.0,
                constraint: "must be at least 1",
            });
        }
        Ok(Self { df })
    }

    pub fn df(&self) -> u32 {
        self.df
    }

    /// `ln Γ((r+1)/2) − ln Γ(r/2) − ln(πr)/2`
    fn log_norm(&self, policy: Policy) -> Result<f64> {
        let r = f64::from(self.df);
        Ok(lgam((r + 1.0) / 2.0, policy)? - lgam(r / 2.0, policy)? - 0.5 * (PI * r).ln())
    }
}

impl StandardDistribution for StudentT {
    fn standard_pdf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(self.standard_log_pdf(z, policy)?.exp())
    }

    fn standard_log_pdf(&self, z: f64, policy: Policy) -> Result<f64> {
        let r = f64::from(self.df);
        Ok(self.log_norm(policy)? - (r + 1.0) / 2.0 * (z * z / r).ln_1p())
    }

    fn standard_cdf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(stdtr(self.df, z, policy)?)
    }

    fn standard_sf(&self, z: f64, policy: Policy) -> Result<f64> {
        Ok(stdtr(self.df, -z, policy)?)
    }

    fn standard_ppf(&self, q: f64, policy: Policy) -> Result<f64> {
        Ok(stdtri(self.df, q, policy)?)
    }

    fn standard_isf(&self, q: f64, policy: Policy) -> Result<f64> {
        Ok(-stdtri(self.df, q, policy)?)
    }

    /// Moments exist only for `df` above their order; the rest are
    /// infinite or undefined
    fn standard_stats(&self) -> SummaryStatistics {
        let df = f64::from(self.df);
        let mean = if self.df > 1 { 0.0 } else { f64::INFINITY };
        let variance = match self.df {
            1 => f64::NAN,
            2 => f64::INFINITY,
            _ => df / (df - 2.0),
        };
        let skewness = if self.df > 3 { 0.0 } else { f64::NAN };
        let kurtosis = match self.df {
            1 | 2 => f64::NAN,
            3 | 4 => f64::INFINITY,
            _ => 6.0 / (df - 4.0),
        };
        SummaryStatistics::new(mean, variance, skewness, kurtosis)
    }
}
