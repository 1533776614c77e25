//! Distribution facade over the mathstat special functions
//!
//! A distribution is described once on its standardized axis by a
//! [`StandardDistribution`] and shifted or scaled by [`LocationScale`],
//! which divides densities by the scale and maps quantiles back with
//! `loc + scale · z`. Evaluation methods return [`Result`]: numeric
//! conditions come from the special-function kernels under the policy the
//! distribution captured at construction.
//!
//! # Distributions
//!
//! - [`Normal`]: every method overridden to call the Gaussian kernels
//!   directly, with [`Normal::from_sample`] for moment estimation
//! - [`StudentT`], [`Alpha`], [`Anglit`], [`Arcsine`], [`Bradford`]
//! - [`Hypergeometric`]: mass function and moments of a discrete count
//!
//! # Example
//!
//! ```rust
//! use mathstat_distributions::{Distribution, LocationScale, Normal, StudentT};
//!
//! let n = Normal::new(0.0, 1.0).unwrap();
//! let x = n.ppf(0.9).unwrap();
//! assert!((n.cdf(x).unwrap() - 0.9).abs() < 1e-14);
//!
//! let t = LocationScale::new(StudentT::new(4).unwrap(), 1.0, 0.5).unwrap();
//! assert!((t.median().unwrap() - 1.0).abs() < 1e-15);
//! println!("{:.3}", t.stats());
//! ```

pub mod alpha;
pub mod anglit;
pub mod arcsine;
pub mod bradford;
pub mod error;
pub mod hypergeometric;
pub mod location_scale;
pub mod normal;
pub mod student_t;
pub mod summary;
pub mod traits;

// Re-export main types
pub use alpha::Alpha;
pub use anglit::Anglit;
pub use arcsine::Arcsine;
pub use bradford::Bradford;
pub use error::{Error, Result};
pub use hypergeometric::Hypergeometric;
pub use location_scale::LocationScale;
pub use normal::{Normal, StandardNormal};
pub use student_t::StudentT;
pub use summary::SummaryStatistics;
pub use traits::{ContinuousDistribution, Distribution, StandardDistribution};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ContinuousDistribution, Distribution, Hypergeometric, LocationScale, Normal,
        StandardDistribution, StudentT, SummaryStatistics,
    };
}
