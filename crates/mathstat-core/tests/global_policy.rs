//! Process-wide policy toggle
//!
//! Kept in its own test binary with a single test so no other test observes
//! the global while it is being flipped.

use mathstat_core::{global_policy, set_global_policy, Config, Policy};

#[test]
fn global_policy_round_trip() {
    assert_eq!(global_policy(), Policy::Quiet);
    assert_eq!(Policy::global(), Policy::Quiet);

    set_global_policy(Policy::Raise);
    assert_eq!(global_policy(), Policy::Raise);

    Config::new(Policy::Quiet).apply();
    assert_eq!(global_policy(), Policy::Quiet);

    std::env::set_var(mathstat_core::config::POLICY_ENV_VAR, "raise");
    let config = Config::from_env().unwrap();
    assert_eq!(config.policy, Policy::Raise);

    std::env::set_var(mathstat_core::config::POLICY_ENV_VAR, "bogus");
    assert!(Config::from_env().is_err());

    std::env::remove_var(mathstat_core::config::POLICY_ENV_VAR);
    assert_eq!(Config::from_env().unwrap(), Config::default());
}
