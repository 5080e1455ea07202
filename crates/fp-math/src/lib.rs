//! # fp-math
//!
//! The numerical engine of fpricing: fixed-size vector and covariance
//! algebra (over nalgebra), the multivariate Normal distribution with its
//! closed-form Laplace transform, tabulated Gauss-Legendre quadrature, and
//! a finite-difference moment extractor that recovers mean and covariance
//! from any Laplace transform.
//!
//! Dimensions are const generics. The numerical routines never allocate or fail:
//! inputs are trusted (see `fp_core::errors` for the checked surfaces).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Symmetric covariance matrices and their volatility/correlation views.
pub mod covariance;

/// Probability distributions.
pub mod distributions;

/// Central finite-difference operators.
pub mod finite_differences;

/// Numerical integration.
pub mod integrals;

/// Moments of a random vector recovered from its Laplace transform.
pub mod moments;

/// Fixed-size real and complex vector / matrix aliases.
pub mod types;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use covariance::CovarianceMatrix;
pub use distributions::{normal_cdf, normal_pdf, Normal};
pub use integrals::gauss_legendre::{gauss_legendre, GaussLegendreRule, Tabulated};
pub use integrals::{GaussLegendreIntegral, Integrator};
pub use moments::{
    fd_cov, fd_cov_centered, fd_cov_with, fd_mean, fd_mean_with, fd_moments, fd_moments_with,
};
pub use types::{complexify, vector_from_slice, Complex, ComplexVector, Matrix, Vector};
