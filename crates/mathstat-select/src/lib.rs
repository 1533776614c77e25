//! Order-statistic selection without full sorting
//!
//! [`select`] finds the k-th smallest element of a slice in expected linear
//! time with the Floyd–Rivest algorithm, partitioning the slice around it
//! in place. [`min`], [`max`], [`median`] and [`quantile`] are built on top.
//!
//! Float slices are ordered with NaN greater than every other value, so a
//! NaN surfaces from [`max`] rather than corrupting the partition.
//!
//! # Example
//!
//! ```rust
//! use mathstat_select::{median, median_of, quantile};
//!
//! let data: Vec<f64> = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//! assert_eq!(median_of(&data).unwrap(), 3.5);
//!
//! let mut scratch = data.clone();
//! assert_eq!(median(&mut scratch).unwrap(), 3.5);
//! let q3: f64 = quantile(&mut scratch, 0.75).unwrap();
//! assert!((q3 - 5.25).abs() < 1e-12);
//! ```

pub mod error;
pub mod floyd_rivest;
pub mod order;

// Re-export main types
pub use error::{Error, Result};
pub use floyd_rivest::{select, select_by, select_range, SAMPLE_THRESHOLD};
pub use order::{argselect, max, median, median_of, min, quantile, quantile_of};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{argselect, max, median, median_of, min, quantile, quantile_of, select, select_by};
}
