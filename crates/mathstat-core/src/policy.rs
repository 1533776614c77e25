//! Error-signal policy for the special-function kernels
//!
//! A kernel that detects a numerically meaningless result hands the
//! condition to a [`Policy`]. In [`Policy::Quiet`] mode the condition is
//! logged through `tracing` and the kernel's IEEE-754 fallback (0, 1, NaN
//! or an infinity) is returned as a normal value. In [`Policy::Raise`] mode
//! the computation is aborted with [`Error::Numeric`].
//!
//! Kernels take the policy as an argument. The process-wide default exists
//! only for objects that capture a policy at construction time.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::warn;

/// Kinds of numeric condition a kernel can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Argument outside the mathematically valid domain
    Domain,
    /// Function is undefined or infinite at the exact input
    Singular,
    /// True result exceeds the representable range
    Overflow,
    /// True result is non-zero but rounds to zero
    Underflow,
    /// Iterative refinement exhausted its budget before converging
    LossOfPrecision,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Singular => "singular",
            Self::Overflow => "overflow",
            Self::Underflow => "underflow",
            Self::LossOfPrecision => "loss_of_precision",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Domain => "Domain",
            Self::Singular => "Singularity",
            Self::Overflow => "Overflow",
            Self::Underflow => "Underflow",
            Self::LossOfPrecision => "Loss of precision",
        };
        f.write_str(name)
    }
}

/// How kernels surface numeric conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Log a diagnostic and return the fallback value
    #[default]
    Quiet,
    /// Abort with a typed [`Error::Numeric`]
    Raise,
}

impl Policy {
    /// Report a numeric condition.
    ///
    /// Returns `Ok(fallback)` in quiet mode and the typed error in raise mode.
    pub fn report(
        self,
        kind: ErrorKind,
        function: &'static str,
        message: &str,
        fallback: f64,
    ) -> Result<f64> {
        match self {
            Policy::Quiet => {
                warn!(kind = kind.as_str(), function, fallback, "{message}");
                Ok(fallback)
            }
            Policy::Raise => Err(Error::numeric(kind, function, message)),
        }
    }

    pub fn domain(self, function: &'static str, fallback: f64) -> Result<f64> {
        self.report(ErrorKind::Domain, function, "argument outside domain", fallback)
    }

    pub fn singular(self, function: &'static str, fallback: f64) -> Result<f64> {
        self.report(ErrorKind::Singular, function, "function has a pole here", fallback)
    }

    pub fn overflow(self, function: &'static str, fallback: f64) -> Result<f64> {
        self.report(ErrorKind::Overflow, function, "result overflows", fallback)
    }

    pub fn underflow(self, function: &'static str, fallback: f64) -> Result<f64> {
        self.report(ErrorKind::Underflow, function, "result underflows", fallback)
    }

    pub fn loss_of_precision(self, function: &'static str, fallback: f64) -> Result<f64> {
        self.report(
            ErrorKind::LossOfPrecision,
            function,
            "iteration did not converge",
            fallback,
        )
    }

    pub fn is_raising(self) -> bool {
        self == Policy::Raise
    }

    /// The process-wide default policy
    pub fn global() -> Policy {
        global_policy()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Quiet => f.write_str("quiet"),
            Policy::Raise => f.write_str("raise"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "silent" => Ok(Policy::Quiet),
            "raise" | "strict" => Ok(Policy::Raise),
            other => Err(Error::InvalidParameter(format!(
                "unknown error policy '{other}', expected 'quiet' or 'raise'"
            ))),
        }
    }
}

static GLOBAL_POLICY: AtomicU8 = AtomicU8::new(0);

/// Install the process-wide default policy
pub fn set_global_policy(policy: Policy) {
    let raw = match policy {
        Policy::Quiet => 0,
        Policy::Raise => 1,
    };
    GLOBAL_POLICY.store(raw, Ordering::Relaxed);
}

/// Read the process-wide default policy
pub fn global_policy() -> Policy {
    match GLOBAL_POLICY.load(Ordering::Relaxed) {
        0 => Policy::Quiet,
        _ => Policy::Raise,
    }
}
