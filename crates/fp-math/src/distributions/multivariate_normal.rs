//! Multivariate Normal distribution.
//!
//! `Normal<N>` is a value type holding a mean vector and a covariance
//! matrix. It is closed under affine maps:
//!
//! ```text
//! X ~ N(μ, Σ)   ⇒   A·X + c ~ N(A·μ + c, A·Σ·Aᵗ)
//! ```
//!
//! and its Laplace transform is known in closed form:
//!
//! ```text
//! log E[exp(zᵗX)] = μᵗz + ½·zᵗΣz,   z ∈ ℂᴺ
//! ```
//!
//! Evaluating at `z = i·u` gives the characteristic function.

use crate::covariance::CovarianceMatrix;
use crate::types::{complexify, Complex, ComplexVector, Matrix, Vector};
use fp_core::Real;

/// A multivariate Normal distribution of dimension `N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal<const N: usize> {
    mean: Vector<N>,
    cov: CovarianceMatrix<N>,
}

impl<const N: usize> Normal<N> {
    /// Create from a mean vector and a covariance matrix.
    pub fn new(mean: Vector<N>, cov: CovarianceMatrix<N>) -> Self {
        Self { mean, cov }
    }

    /// The standard Normal: zero mean, identity covariance.
    pub fn standard() -> Self {
        Self::new(Vector::zeros(), CovarianceMatrix::identity())
    }

    /// The mean vector.
    pub fn mean(&self) -> &Vector<N> {
        &self.mean
    }

    /// The covariance matrix.
    pub fn cov(&self) -> &CovarianceMatrix<N> {
        &self.cov
    }

    /// Distribution of `A·X`: `N(A·μ, A·Σ·Aᵗ)`.
    pub fn premultiply<const K: usize>(&self, a: &Matrix<K, N>) -> Normal<K> {
        Normal::new(a * self.mean, self.cov.transform(a))
    }

    /// Distribution of `X + μ'`: the covariance is unchanged.
    pub fn add(&self, mu: &Vector<N>) -> Normal<N> {
        Normal::new(self.mean + mu, self.cov)
    }

    /// The `i`-th one-dimensional marginal.
    pub fn marginal(&self, i: usize) -> Normal<1> {
        Normal::new(
            Vector::<1>::new(self.mean[i]),
            CovarianceMatrix::from_variance(self.cov.variance(i)),
        )
    }

    /// `μᵗz + ½·zᵗΣz`, the cumulant generating function at complex `z`.
    pub fn log_laplace_transform(&self, z: &ComplexVector<N>) -> Complex {
        let sz = complexify(self.cov.as_matrix()) * z;
        complexify(&self.mean).dot(z) + z.dot(&sz) * 0.5
    }

    /// `E[exp(zᵗX)] = exp(μᵗz + ½·zᵗΣz)`.
    pub fn laplace_transform(&self, z: &ComplexVector<N>) -> Complex {
        self.log_laplace_transform(z).exp()
    }

    /// `E[exp(i·uᵗX)]`, the Laplace transform along the imaginary axis.
    pub fn characteristic_function(&self, u: &Vector<N>) -> Complex {
        let z = u.map(|x| Complex::new(0.0, x));
        self.laplace_transform(&z)
    }

    /// An owned closure evaluating [`Normal::log_laplace_transform`].
    ///
    /// The closure captures a copy of the parameters and does not borrow
    /// `self`.
    pub fn log_laplace_transform_fn(&self) -> impl Fn(&ComplexVector<N>) -> Complex {
        let d = *self;
        move |z: &ComplexVector<N>| d.log_laplace_transform(z)
    }

    /// An owned closure evaluating [`Normal::laplace_transform`].
    pub fn laplace_transform_fn(&self) -> impl Fn(&ComplexVector<N>) -> Complex {
        let d = *self;
        move |z: &ComplexVector<N>| d.laplace_transform(z)
    }
}

impl Normal<1> {
    /// Univariate Normal from a scalar mean and variance.
    pub fn univariate(mean: Real, variance: Real) -> Self {
        Self::new(Vector::<1>::new(mean), CovarianceMatrix::from_variance(variance))
    }
}
