//! Runtime configuration
//!
//! The only tunable is the default error policy. It can be set in code,
//! deserialized from a config file section, or read from the
//! `MATHSTAT_ERROR_POLICY` environment variable.

use crate::error::Result;
use crate::policy::{set_global_policy, Policy};
use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`Config::from_env`]
pub const POLICY_ENV_VAR: &str = "MATHSTAT_ERROR_POLICY";

/// Library configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default policy for objects that do not get one explicitly
    pub policy: Policy,
}

impl Config {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Build a configuration from the environment.
    ///
    /// A missing variable yields the default; an unrecognised value is an error.
    pub fn from_env() -> Result<Self> {
        match std::env::var(POLICY_ENV_VAR) {
            Ok(value) => Self::from_policy_str(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    fn from_policy_str(value: &str) -> Result<Self> {
        Ok(Self {
            policy: value.parse()?,
        })
    }

    /// Install this configuration as the process-wide default
    pub fn apply(&self) {
        set_global_policy(self.policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(Config::default().policy, Policy::Quiet);
    }

    #[test]
    fn test_from_policy_str() {
        assert_eq!(Config::from_policy_str("raise").unwrap().policy, Policy::Raise);
        assert!(Config::from_policy_str("sometimes").is_err());
    }

    #[test]
    fn test_deserialize() {
        let config: Config = serde_json::from_str(r#"{"policy": "raise"}"#).unwrap();
        assert_eq!(config, Config::new(Policy::Raise));

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.policy, Policy::Quiet);
    }
}
