//! The hypergeometric distribution
//!
//! Counts successes in `draws` taken without replacement from a population
//! of `total` items, `successes` of which are marked. The mass function is
//! assembled from six log-beta terms, so it stays finite for populations far
//! beyond the range where the binomial coefficients themselves overflow.

use crate::{Error, Result, SummaryStatistics};
use mathstat_core::{global_policy, Policy};
use mathstat_special::lbeta;

/// Hypergeometric distribution over `total` items with `successes` marked
/// and `draws` taken.
///
/// # Example
///
/// ```rust
/// use mathstat_distributions::Hypergeometric;
///
/// let h = Hypergeometric::new(20, 7, 12).unwrap();
/// assert!((h.pmf(4).unwrap() - 0.35758513931888547).abs() < 1e-13);
/// assert_eq!(h.pmf(9).unwrap(), 0.0);
/// assert!((h.stats().mean() - 4.2).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypergeometric {
    total: u64,
    successes: u64,
    draws: u64,
    policy: Policy,
}

impl Hypergeometric {
    /// `successes` and `draws` may not exceed a non-empty `total`
    pub fn new(total: u64, successes: u64, draws: u64) -> Result<Self> {
        if total == 0 {
            return Err(Error::InvalidParameter {
                name: "total",
                value: 0.0,
                constraint: "must be at least 1",
            });
        }
        if successes > total {
            return Err(Error::InvalidParameter {
                name: "successes",
                value: successes as f64,
                constraint: "must not exceed total",
            });
        }
        if draws > total {
            return Err(Error::InvalidParameter {
                name: "draws",
                value: draws as f64,
                constraint: "must not exceed total",
            });
        }
        Ok(Self {
            total,
            successes,
            draws,
            policy: global_policy(),
        })
    }

    pub fn with_policy(self, policy: Policy) -> Self {
        Self { policy, ..self }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Smallest and largest attainable number of successes
    pub fn support(&self) -> (u64, u64) {
        let failures = self.total - self.successes;
        (
            self.draws.saturating_sub(failures),
            self.successes.min(self.draws),
        )
    }

    /// Natural log of `P(X = k)`; `-∞` outside the support
    pub fn log_pmf(&self, k: u64) -> Result<f64> {
        let (lo, hi) = self.support();
        if k < lo || k > hi {
            return Ok(f64::NEG_INFINITY);
        }
        let policy = self.policy;
        let m = self.total as f64;
        let n = self.successes as f64;
        let draws = self.draws as f64;
        let bad = m - n;
        let k = k as f64;

        let numerator = lbeta(n + 1.0, 1.0, policy)?
            + lbeta(bad + 1.0, 1.0, policy)?
            + lbeta(m - draws + 1.0, draws + 1.0, policy)?;
        let denominator = lbeta(k + 1.0, n - k + 1.0, policy)?
            + lbeta(draws - k + 1.0, bad - draws + k + 1.0, policy)?
            + lbeta(m + 1.0, 1.0, policy)?;
        Ok(numerator - denominator)
    }

    /// `P(X = k)`
    pub fn pmf(&self, k: u64) -> Result<f64> {
        Ok(self.log_pmf(k)?.exp())
    }

    /// Mean, variance, skewness and excess kurtosis.
    ///
    /// Skewness and kurtosis are NaN when the count is fixed or the
    /// population has fewer than four items.
    pub fn stats(&self) -> SummaryStatistics {
        let m = self.total as f64;
        let n = self.successes as f64;
        let draws = self.draws as f64;
        let bad = m - n;
        let rest = m - draws;

        let mean = draws * n / m;
        let variance = bad * n * draws * rest / (m * m * (m - 1.0));
        if m < 4.0 || variance <= 0.0 {
            let variance = if m > 1.0 { variance } else { 0.0 };
            return SummaryStatistics::new(mean, variance, f64::NAN, f64::NAN);
        }

        let skewness =
            (bad - n) * (m - 2.0 * draws) / (m - 2.0) * ((m - 1.0) / (bad * n * draws * rest)).sqrt();

        let mut kurtosis = m * (m + 1.0) - 6.0 * draws * rest - 6.0 * n * bad;
        kurtosis *= (m - 1.0) * m * m;
        kurtosis += 6.0 * n * draws * rest * bad * (5.0 * m - 6.0);
        kurtosis /= n * draws * rest * bad * (m - 2.0) * (m - 3.0);

        SummaryStatistics::new(mean, variance, skewness, kurtosis)
    }
}
