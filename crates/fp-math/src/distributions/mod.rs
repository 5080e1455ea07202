//! Probability distributions.
//!
//! The univariate standard normal density and distribution function used by
//! the pricing formulas, and the multivariate [`Normal`] with its affine
//! closure and closed-form Laplace transform.

pub mod multivariate_normal;
pub mod normal;

pub use multivariate_normal::Normal;
pub use normal::{normal_cdf, normal_pdf};
