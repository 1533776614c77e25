//! Core types and numeric kernels for mathstat
//!
//! This crate holds the pieces every other mathstat crate builds on:
//!
//! - [`Error`] / [`Result`]: the shared error type
//! - [`Policy`] / [`ErrorKind`]: how special functions report numerically
//!   meaningless results (quiet fallback value or typed error)
//! - [`Config`]: process-wide defaults, loadable from the environment
//! - [`polynomial`]: Horner, rational and Chebyshev series evaluation
//! - [`ieee`]: exact `ldexp`, `frexp`, `modf` and `exp2`
//! - [`constants`]: machine constants used by the approximations
//!
//! # Example
//!
//! ```rust
//! use mathstat_core::{ieee::ldexp, ErrorKind, Policy};
//!
//! assert_eq!(ldexp(3.0, 4), 48.0);
//!
//! // Quiet mode hands back the fallback value
//! let v = Policy::Quiet.domain("example", f64::NAN).unwrap();
//! assert!(v.is_nan());
//!
//! // Raise mode surfaces a typed error
//! let err = Policy::Raise.domain("example", f64::NAN).unwrap_err();
//! assert_eq!(err.numeric_kind(), Some(ErrorKind::Domain));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod ieee;
pub mod policy;
pub mod polynomial;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use policy::{global_policy, set_global_policy, ErrorKind, Policy};
