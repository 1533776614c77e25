//! The anglit distribution on `[-π/4, π/4]`

use crate::traits::StandardDistribution;
use crate::{Result, SummaryStatistics};
use mathstat_core::Policy;
use std::f64::consts::{FRAC_PI_4, PI};

/// Standardized anglit distribution, density `cos(2z)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anglit;

impl StandardDistribution for Anglit {
    fn standard_pdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        if z.abs() > FRAC_PI_4 {
            return Ok(0.0);
        }
        Ok((2.0 * z).cos())
    }

    fn standard_cdf(&self, z: f64, _policy: Policy) -> Result<f64> {
        if z <= -FRAC_PI_4 {
            return Ok(0.0);
        }
        if z >= FRAC_PI_4 {
            return Ok(1.0);
        }
        let s = (z + FRAC_PI_4).sin();
        Ok(s * s)
    }

    fn standard_ppf(&self, q: f64, _policy: Policy) -> Result<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Ok(f64::NAN);
        }
        Ok(q.sqrt().asin() - FRAC_PI_4)
    }

    fn standard_stats(&self) -> SummaryStatistics {
        let pi2 = PI * PI;
        let kurtosis = -2.0 * (pi2 * pi2 - 96.0) / ((pi2 - 8.0) * (pi2 - 8.0));
        SummaryStatistics::new(0.0, pi2 / 16.0 - 0.5, 0.0, kurtosis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const Q: Policy = Policy::Quiet;

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(Anglit.standard_pdf(0.3, Q).unwrap(), 0.8253356149096783, max_relative = 1e-15);
        assert_relative_eq!(Anglit.standard_cdf(0.3, Q).unwrap(), 0.7823212366975177, max_relative = 1e-15);
        assert_relative_eq!(Anglit.standard_ppf(0.7823212366975177, Q).unwrap(), 0.3, max_relative = 1e-13);
    }

    #[test]
    fn test_support() {
        assert_eq!(Anglit.standard_pdf(1.0, Q).unwrap(), 0.0);
        assert_eq!(Anglit.standard_cdf(-1.0, Q).unwrap(), 0.0);
        assert_eq!(Anglit.standard_cdf(1.0, Q).unwrap(), 1.0);
        assert_relative_eq!(Anglit.standard_ppf(0.0, Q).unwrap(), -FRAC_PI_4);
        assert_relative_eq!(Anglit.standard_ppf(1.0, Q).unwrap(), FRAC_PI_4);
        assert!(Anglit.standard_ppf(-0.1, Q).unwrap().is_nan());
    }

    #[test]
    fn test_stats() {
        let s = Anglit.standard_stats();
        assert_relative_eq!(s.variance(), 0.11685027506808491, max_relative = 1e-14);
        assert_relative_eq!(s.kurtosis(), -0.8062497699541908, max_relative = 1e-13);
    }
}
