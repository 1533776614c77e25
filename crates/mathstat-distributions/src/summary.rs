//! The four-moment summary of a distribution or a sample

use crate::{Error, Result};
use mathstat_core::utils;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// Decimal places used by `Display` when no precision is given
pub const DEFAULT_PRECISION: usize = 2;

const FIELDS: usize = 4;

/// Mean, variance, skewness and excess kurtosis.
///
/// Equality and hashing compare the bit patterns of the four values, so two
/// summaries with NaN in the same position are equal and `0.0` differs from
/// `-0.0`. Index 0..=3 maps to the fields in that order.
///
/// # Example
///
/// ```rust
/// use mathstat_distributions::SummaryStatistics;
///
/// let s = SummaryStatistics::new(0.0, 1.0, 0.0, 0.0);
/// assert_eq!(s[1], 1.0);
/// assert_eq!(s.to_string(), "Statistics {mean: 0.00, variance: 1.00, skewness: 0.00, kurtosis: 0.00}");
/// assert_eq!(format!("{s:.1}"), "Statistics {mean: 0.0, variance: 1.0, skewness: 0.0, kurtosis: 0.0}");
/// assert!(s.get(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryStatistics {
    mean: f64,
    variance: f64,
    skewness: f64,
    kurtosis: f64,
}

impl SummaryStatistics {
    pub const fn new(mean: f64, variance: f64, skewness: f64, kurtosis: f64) -> Self {
        Self {
            mean,
            variance,
            skewness,
            kurtosis,
        }
    }

    /// Sample summary: unbiased variance, moment skewness and excess kurtosis
    pub fn from_sample(data: &[f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(mathstat_core::Error::InsufficientData {
                expected: 2,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self::new(
            utils::mean(data),
            utils::variance(data),
            utils::skewness(data),
            utils::kurtosis(data),
        ))
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn skewness(&self) -> f64 {
        self.skewness
    }

    pub fn kurtosis(&self) -> f64 {
        self.kurtosis
    }

    /// Field by position, failing outside 0..=3
    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.mean),
            1 => Ok(self.variance),
            2 => Ok(self.skewness),
            3 => Ok(self.kurtosis),
            _ => Err(Error::Core(mathstat_core::Error::OutOfBounds {
                index,
                len: FIELDS,
            })),
        }
    }

    pub fn to_array(&self) -> [f64; FIELDS] {
        [self.mean, self.variance, self.skewness, self.kurtosis]
    }

    fn bits(&self) -> [u64; FIELDS] {
        self.to_array().map(canonical_bits)
    }
}

// All NaNs hash and compare alike
fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl Index<usize> for SummaryStatistics {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.mean,
            1 => &self.variance,
            2 => &self.skewness,
            3 => &self.kurtosis,
            _ => panic!("index {index} out of bounds for SummaryStatistics of length {FIELDS}"),
        }
    }
}

impl PartialEq for SummaryStatistics {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for SummaryStatistics {}

impl Hash for SummaryStatistics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "Statistics {{mean: {:.p$}, variance: {:.p$}, skewness: {:.p$}, kurtosis: {:.p$}}}",
            self.mean,
            self.variance,
            self.skewness,
            self.kurtosis,
            p = p
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_indexing() {
        let s = SummaryStatistics::new(1.0, 2.0, 3.0, 4.0);
        for i in 0..4 {
            assert_eq!(s[i], (i + 1) as f64);
            assert_eq!(s.get(i).unwrap(), (i + 1) as f64);
        }
        let err = s.get(4).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(mathstat_core::Error::OutOfBounds { index: 4, len: 4 })
        ));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_past_end() {
        let s = SummaryStatistics::new(1.0, 2.0, 3.0, 4.0);
        let _ = s[7];
    }

    #[test]
    fn test_value_semantics() {
        let a = SummaryStatistics::new(0.5, 0.125, 0.0, -1.5);
        let b = SummaryStatistics::new(0.5, 0.125, 0.0, -1.5);
        let nan = SummaryStatistics::new(f64::INFINITY, f64::INFINITY, f64::NAN, f64::NAN);
        assert_eq!(a, b);
        assert_eq!(nan, nan);
        assert_ne!(a, SummaryStatistics::new(0.5, 0.125, -0.0, -1.5));

        let set: HashSet<_> = [a, b, nan, nan].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_precision() {
        let s = SummaryStatistics::new(0.5, 0.1, 0.0, -1.5);
        assert_eq!(
            s.to_string(),
            "Statistics {mean: 0.50, variance: 0.10, skewness: 0.00, kurtosis: -1.50}"
        );
        assert_eq!(
            format!("{s:.4}"),
            "Statistics {mean: 0.5000, variance: 0.1000, skewness: 0.0000, kurtosis: -1.5000}"
        );
        let inf = SummaryStatistics::new(f64::INFINITY, f64::NAN, 0.0, 0.0);
        assert_eq!(
            inf.to_string(),
            "Statistics {mean: inf, variance: NaN, skewness: 0.00, kurtosis: 0.00}"
        );
    }

    #[test]
    fn test_from_sample() {
        let s = SummaryStatistics::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(s.mean(), 3.0);
        assert_relative_eq!(s.variance(), 2.5, epsilon = 1e-15);
        assert_relative_eq!(s.skewness(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(s.kurtosis(), -1.3, epsilon = 1e-14);

        let err = SummaryStatistics::from_sample(&[1.0]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = SummaryStatistics::new(1.0, 0.25, -0.5, 3.0);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"mean":1.0,"variance":0.25,"skewness":-0.5,"kurtosis":3.0}"#);
        let back: SummaryStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
