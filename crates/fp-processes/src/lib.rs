//! # fp-processes
//!
//! Gaussian processes for log prices and the distributions they induce.
//!
//! Each process maps a starting state and a horizon to the exact
//! conditional distribution of the state, a [`fp_math::Normal`]. The
//! multivariate geometric Brownian motion additionally exposes the affine
//! coefficients of its Laplace transform.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod gaussian_process;
pub mod geometric_brownian_motion;

pub use gaussian_process::{
    ConstantDrift, DriftSpecification, ExponentialMartingaleDrift, FnDrift, GaussianProcess,
};
pub use geometric_brownian_motion::{
    bivariate_black76_process, black76_process, GeometricBrownianMotion, TransformCoefficients,
};
