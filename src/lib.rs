//! Special functions, distributions and order-statistic selection
//!
//! This crate re-exports the mathstat workspace:
//!
//! - [`mathstat_core`]: error type, error policy, configuration and numeric kernels
//! - [`mathstat_special`]: gamma, beta, error function, zeta and their inverses
//! - [`mathstat_distributions`]: continuous distributions on a common interface
//! - [`mathstat_select`]: Floyd-Rivest selection, medians and quantiles
//!
//! # Example
//!
//! ```rust
//! use mathstat::prelude::*;
//!
//! let data = [4.1, 5.3, 3.9, 5.0, 4.6, 4.4, 5.8, 4.9];
//! let fitted = Normal::from_sample(&data).unwrap();
//! let sample_median = median_of(&data).unwrap();
//! assert!((fitted.ppf(0.5).unwrap() - fitted.mean()).abs() < 1e-12);
//! assert!((sample_median - 4.75).abs() < 1e-12);
//! ```

pub use mathstat_core;
pub use mathstat_distributions;
pub use mathstat_select;
pub use mathstat_special;

// Re-export main types
pub use mathstat_core::{Config, ErrorKind, Policy};
pub use mathstat_distributions::{Normal, StudentT, SummaryStatistics};

/// Prelude for convenient imports
pub mod prelude {
    pub use mathstat_core::{global_policy, set_global_policy, Config, ErrorKind, Policy};
    pub use mathstat_distributions::prelude::*;
    pub use mathstat_select::prelude::*;
}
