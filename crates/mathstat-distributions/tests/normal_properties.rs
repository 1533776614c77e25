//! Laws every normal distribution satisfies

mod common;

use common::{normal_sample, rng};
use mathstat_core::Policy;
use mathstat_distributions::prelude::*;
use proptest::prelude::*;

fn normal() -> impl Strategy<Value = Normal> {
    (-10.0f64..10.0, 0.1f64..100.0).prop_map(|(m, s)| Normal::new(m, s).unwrap())
}

proptest! {
    #[test]
    fn cdf_and_sf_are_complementary(n in normal(), z in -8.0f64..8.0) {
        let x = n.mean() + z * n.std_dev();
        let total = n.cdf(x).unwrap() + n.sf(x).unwrap();
        prop_assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ppf_inverts_cdf(n in normal(), p in 1e-10f64..(1.0 - 1e-10)) {
        let x = n.ppf(p).unwrap();
        let back = n.cdf(x).unwrap();
        prop_assert!((back - p).abs() <= 1e-12 * p.max(1e-3), "p={} back={}", p, back);
    }

    // The upper tail is capped where cdf(x) rounds towards 1
    #[test]
    fn cdf_inverts_ppf(n in normal(), z in -6.0f64..3.0) {
        let x = n.mean() + z * n.std_dev();
        let back = n.ppf(n.cdf(x).unwrap()).unwrap();
        prop_assert!((back - x).abs() <= 1e-9 * n.std_dev().max(x.abs()), "x={} back={}", x, back);
    }

    #[test]
    fn inverse_sf_mirrors_ppf(n in normal(), q in 1e-10f64..(1.0 - 1e-10)) {
        let upper = n.inverse_sf(q).unwrap();
        let lower = n.ppf(q).unwrap();
        let mirrored = 2.0 * n.mean() - lower;
        prop_assert!((upper - mirrored).abs() <= 1e-9 * n.std_dev().max(n.mean().abs()));
    }

    #[test]
    fn log_forms_match_direct_forms(n in normal(), z in -5.0f64..5.0) {
        let x = n.mean() + z * n.std_dev();
        prop_assert!((n.log_pdf(x).unwrap() - n.pdf(x).unwrap().ln()).abs() < 1e-10);
        prop_assert!((n.log_cdf(x).unwrap() - n.cdf(x).unwrap().ln()).abs() < 1e-10);
        prop_assert!((n.log_sf(x).unwrap() - n.sf(x).unwrap().ln()).abs() < 1e-10);
    }
}

#[test]
fn test_quantile_boundaries() {
    let n = Normal::new(12.0, 4.0).unwrap();
    assert_eq!(n.ppf(0.0).unwrap(), f64::NEG_INFINITY);
    assert_eq!(n.ppf(1.0).unwrap(), f64::INFINITY);
    assert_eq!(n.ppf(0.5).unwrap(), 12.0);
}

#[test]
fn test_fit_recovers_parameters() {
    let mut rng = rng(42);
    let data = normal_sample(&mut rng, 20_000, 50.0, 8.0);
    let fitted = Normal::from_sample(&data).unwrap();
    assert!((fitted.mean() - 50.0).abs() < 0.3);
    assert!((fitted.std_dev() - 8.0).abs() < 0.3);

    let summary = SummaryStatistics::from_sample(&data).unwrap();
    assert_eq!(summary.mean(), fitted.mean());
    assert!((summary.variance().sqrt() - fitted.std_dev()).abs() < 1e-12);
    assert!(summary.skewness().abs() < 0.1);
    assert!(summary.kurtosis().abs() < 0.2);
}

#[test]
fn test_too_few_observations() {
    for data in [vec![], vec![3.0]] {
        let err = Normal::from_sample(&data).unwrap_err();
        assert!(err.is_invalid_argument(), "{err}");
    }
}

#[test]
fn test_raise_policy_surfaces_domain_errors() {
    let n = Normal::new(0.0, 1.0).unwrap().with_policy(Policy::Raise);
    assert!(n.ppf(2.0).unwrap_err().numeric_kind().is_some());
    assert!(n.inverse_sf(-1.0).is_err());
    assert!(n.cdf(3.0).is_ok());
}
