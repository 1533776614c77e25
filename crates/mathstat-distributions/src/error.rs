//! Error types for distribution construction and evaluation

use thiserror::Error;

/// Errors that can occur when building or evaluating a distribution
#[derive(Error, Debug)]
pub enum Error {
    /// A distribution parameter is outside its valid range
    #[error("Invalid parameter {name} = {value}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// Core computation error, including numeric conditions raised by the kernels
    #[error("Core computation error: {0}")]
    Core(#[from] mathstat_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that a scale-like parameter is strictly positive and finite
    pub fn check_positive(name: &'static str, value: f64) -> Result<()> {
        if !(value > 0.0 && value.is_finite()) {
            return Err(Error::InvalidParameter {
                name,
                value,
                constraint: "must be positive and finite",
            });
        }
        Ok(())
    }

    /// Check that a location-like parameter is finite
    pub fn check_finite(name: &'static str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::InvalidParameter {
                name,
                value,
                constraint: "must be finite",
            });
        }
        Ok(())
    }

    /// Whether the caller supplied an argument the operation cannot accept
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidParameter { .. } => true,
            Error::Core(e) => e.is_invalid_argument(),
        }
    }

    /// The kind of numeric condition, if a kernel raised one
    pub fn numeric_kind(&self) -> Option<mathstat_core::ErrorKind> {
        match self {
            Error::Core(e) => e.numeric_kind(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_checks() {
        assert!(Error::check_positive("scale", 1.5).is_ok());
        assert!(Error::check_positive("scale", 0.0).is_err());
        assert!(Error::check_positive("scale", f64::NAN).is_err());
        assert!(Error::check_positive("scale", f64::INFINITY).is_err());
        assert!(Error::check_finite("loc", -3.0).is_ok());
        assert!(Error::check_finite("loc", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display_and_classification() {
        let err = Error::check_positive("scale", -2.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter scale = -2: must be positive and finite"
        );
        assert!(err.is_invalid_argument());
        assert_eq!(err.numeric_kind(), None);

        let err: Error = mathstat_core::Error::InsufficientData {
            expected: 2,
            actual: 1,
        }
        .into();
        assert!(err.is_invalid_argument());
    }
}
