//! Error types for numerical statistics
//!
//! Provides the error type shared by all mathstat crates. Numeric conditions
//! raised by the special-function kernels carry their [`ErrorKind`] so callers
//! can tell a domain violation from an overflow without parsing messages.

use crate::policy::ErrorKind;
use thiserror::Error;

/// Core error type for mathstat operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Indexing past the end of a fixed-size value
    #[error("Index out of bounds: {index} is not below {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A special function detected a numerically meaningless result
    #[error("{kind} error in {function}: {message}")]
    Numeric {
        kind: ErrorKind,
        function: &'static str,
        message: String,
    },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a numeric condition of the given kind
    pub fn numeric(kind: ErrorKind, function: &'static str, message: impl Into<String>) -> Self {
        Self::Numeric {
            kind,
            function,
            message: message.into(),
        }
    }

    /// Create an error for a non-positive scale parameter
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive, got {value}"))
    }

    /// Create an error for NaN/Inf parameters
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} must be finite"))
    }

    /// The kind of numeric condition, if this is one
    pub fn numeric_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Numeric { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether the caller supplied an argument the operation cannot accept.
    ///
    /// Covers bad parameters and sample sizes as well as raised domain errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_)
                | Self::InvalidInput(_)
                | Self::InsufficientData { .. }
                | Self::Numeric {
                    kind: ErrorKind::Domain,
                    ..
                }
        )
    }
}
