//! Sample moment helpers
//!
//! Two-pass formulas over a slice. Callers that need a minimum sample size
//! check it themselves; these helpers only define what happens for short
//! input.

/// Calculate the mean of a slice
///
/// Returns NaN for empty slices.
///
/// # Examples
///
/// ```rust
/// use mathstat_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Unbiased sample variance (n − 1 denominator)
///
/// Returns NaN for slices with fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    central_moment_sum(data, m, 2) / (data.len() - 1) as f64
}

/// Unbiased sample standard deviation
///
/// # Examples
///
/// ```rust
/// use mathstat_core::utils::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Sample skewness `m3 / m2^1.5` from the biased central moments
///
/// NaN for fewer than 2 elements or zero spread.
pub fn skewness(data: &[f64]) -> f64 {
    let Some((m2, m)) = biased_m2(data) else {
        return f64::NAN;
    };
    let m3 = central_moment_sum(data, m, 3) / data.len() as f64;
    m3 / m2.powf(1.5)
}

/// Sample excess kurtosis `m4 / m2² − 3` from the biased central moments
///
/// NaN for fewer than 2 elements or zero spread.
pub fn kurtosis(data: &[f64]) -> f64 {
    let Some((m2, m)) = biased_m2(data) else {
        return f64::NAN;
    };
    let m4 = central_moment_sum(data, m, 4) / data.len() as f64;
    m4 / (m2 * m2) - 3.0
}

fn biased_m2(data: &[f64]) -> Option<(f64, f64)> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data);
    let m2 = central_moment_sum(data, m, 2) / data.len() as f64;
    (m2 > 0.0).then_some((m2, m))
}

fn central_moment_sum(data: &[f64], m: f64, order: i32) -> f64 {
    data.iter().map(|&x| (x - m).powi(order)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&data), 5.0);
        assert_relative_eq!(variance(&data), 32.0 / 7.0, epsilon = 1e-14);
        assert_relative_eq!(std_dev(&data), (32.0f64 / 7.0).sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn test_short_input() {
        assert!(variance(&[1.0]).is_nan());
        assert!(std_dev(&[]).is_nan());
        assert!(skewness(&[3.0]).is_nan());
        assert!(kurtosis(&[1.0, 1.0, 1.0]).is_nan());
    }

    #[test]
    fn test_symmetric_sample_has_zero_skew() {
        let data = [-3.0, -1.0, 0.0, 1.0, 3.0];
        assert_relative_eq!(skewness(&data), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_shape_moments() {
        // m2 = 2, m3 = 0, m4 = 6.8 for 1..=5
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(kurtosis(&data), 6.8 / 4.0 - 3.0, epsilon = 1e-14);

        let data = [0.0, 0.0, 0.0, 4.0];
        // mean 1, m2 = (1+1+1+9)/4 = 3, m3 = (-1-1-1+27)/4 = 6
        assert_relative_eq!(skewness(&data), 6.0 / 3.0f64.powf(1.5), epsilon = 1e-14);
    }
}
