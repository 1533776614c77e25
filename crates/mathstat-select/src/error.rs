//! Error types for order-statistic selection

use thiserror::Error;

/// Errors that can occur during selection
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot select from empty data")]
    EmptyData,

    /// Target rank or window outside the data
    #[error("Rank {k} is out of range for window [{left}, {right}] of data with length {len}")]
    InvalidRank {
        k: usize,
        left: usize,
        right: usize,
        len: usize,
    },

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] mathstat_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty<T>(data: &[T]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(())
    }

    /// Check that `left <= k <= right < len`
    pub fn check_window(len: usize, left: usize, right: usize, k: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::EmptyData);
        }
        if left > k || k > right || right >= len {
            return Err(Error::InvalidRank { k, left, right, len });
        }
        Ok(())
    }

    /// Whether the caller supplied an argument the operation cannot accept
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::EmptyData | Error::InvalidRank { .. } | Error::InvalidProbability { .. } => true,
            Error::Numerical(_) => false,
            Error::Core(e) => e.is_invalid_argument(),
        }
    }
}
