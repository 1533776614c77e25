//! Special functions for statistical distributions
//!
//! Each function picks among a handful of numerical regimes by the size of
//! its arguments (series, continued fraction, asymptotic expansion, rational
//! approximation) and reports numerically meaningless results through a
//! [`Policy`](mathstat_core::Policy) passed by the caller.
//!
//! # Families
//!
//! - **Error function**: [`erf`], [`erfc`], [`erfinv`], [`erfcinv`]
//! - **Normal distribution**: [`ndtr`], [`ndtri`], [`log_ndtr`]
//! - **Gamma**: [`gamma`], [`lgam`], [`lgam_sgn`], [`lgam1p`], [`log1pmx`]
//! - **Beta**: [`beta`], [`lbeta`]
//! - **Incomplete gamma**: [`igam`], [`igamc`], [`igami`], [`igamci`]
//! - **Incomplete beta**: [`incbet`], [`incbi`]
//! - **Distribution functions**: Student's t, chi-square, gamma, F,
//!   binomial, negative binomial and beta in [`cdf`]
//! - **Hurwitz zeta**: [`zeta`]
//!
//! # Example
//!
//! ```rust
//! use mathstat_core::{ErrorKind, Policy};
//! use mathstat_special::{igam, igamc, ndtri};
//!
//! let p = igam(3.0, 2.5, Policy::Quiet).unwrap();
//! let q = igamc(3.0, 2.5, Policy::Quiet).unwrap();
//! assert!((p + q - 1.0).abs() < 1e-15);
//!
//! // Out-of-domain input: NaN in quiet mode, a typed error in raise mode
//! assert!(ndtri(1.5, Policy::Quiet).unwrap().is_nan());
//! let err = ndtri(1.5, Policy::Raise).unwrap_err();
//! assert_eq!(err.numeric_kind(), Some(ErrorKind::Domain));
//! ```

pub mod beta;
pub mod cdf;
pub mod erf;
pub mod gamma;
pub mod igam;
pub mod igami;
pub mod incbet;
pub mod incbi;
pub mod lanczos;
pub mod ndtr;
pub mod zeta;

pub use beta::{beta, lbeta};
pub use cdf::{
    bdtr, bdtrc, bdtri, btdtr, chdtr, chdtrc, chdtri, fdtr, fdtrc, fdtri, gdtr, gdtrc, gdtri,
    nbdtr, nbdtrc, nbdtri, stdtr, stdtri,
};
pub use erf::{erf, erfc, erfcinv, erfinv};
pub use gamma::{gamma, lgam, lgam1p, lgam_sgn, log1pmx};
pub use igam::{igam, igamc};
pub use igami::{igamci, igami};
pub use incbet::incbet;
pub use incbi::incbi;
pub use lanczos::lanczos_sum_expg_scaled;
pub use ndtr::{log_ndtr, ndtr, ndtri};
pub use zeta::zeta;
