//! # fpricing
//!
//! Gaussian distribution algebra, Gauss-Legendre quadrature and
//! transform-based moment extraction for derivative pricing.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fp-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use fpricing::math::{fd_moments, CovarianceMatrix, Normal, Vector};
//!
//! let dist = Normal::new(
//!     Vector::<2>::new(0.1, -0.2),
//!     CovarianceMatrix::from_vols_and_corr(0.2, 0.3, 0.5),
//! );
//! let recovered = fd_moments(dist.laplace_transform_fn(), 1e-4);
//! assert!((recovered.mean()[0] - 0.1).abs() < 1e-3);
//! ```
//!
//! ```rust
//! let value = fpricing::pricingengines::bb76_spread_call(10.0, 7.0, 5.0, 0.2, 0.2, 0.5, 0.5)?;
//! assert!((value - 0.041131).abs() < 1e-5);
//! # Ok::<(), fpricing::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Scalar aliases, error definitions and numerical settings.
pub use fp_core as core;

/// Covariance matrices, quadrature, finite differences and the Normal distribution.
pub use fp_math as math;

/// Gaussian log-price processes.
pub use fp_processes as processes;

/// Market models.
pub use fp_models as models;

/// Pricers.
pub use fp_pricingengines as pricingengines;
