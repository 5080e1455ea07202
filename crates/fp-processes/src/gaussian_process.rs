//! Gaussian processes with a pluggable drift specification.
//!
//! A [`GaussianProcess`] owns a constant instantaneous covariance matrix and
//! delegates the conditional distribution to its drift strategy:
//!
//! ```text
//! X(T) | X(t) = x  ~  N(m(t, T, x), (T − t)·Σ)
//! ```
//!
//! where `m` is supplied by a [`DriftSpecification`].

use fp_core::Time;
use fp_math::{CovarianceMatrix, Normal, Vector};

/// Strategy computing the conditional distribution of a Gaussian process.
pub trait DriftSpecification<const N: usize> {
    /// Distribution of `X(T)` given `X(t) = state`, for instantaneous
    /// covariance `cov`.
    fn conditional_distribution(
        &self,
        t: Time,
        maturity: Time,
        cov: &CovarianceMatrix<N>,
        state: &Vector<N>,
    ) -> Normal<N>;
}

/// Drift making `exp(X)` a martingale: `m = x − ½(T − t)·diag(Σ)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExponentialMartingaleDrift;

impl<const N: usize> DriftSpecification<N> for ExponentialMartingaleDrift {
    fn conditional_distribution(
        &self,
        t: Time,
        maturity: Time,
        cov: &CovarianceMatrix<N>,
        state: &Vector<N>,
    ) -> Normal<N> {
        let tau = maturity - t;
        Normal::new(state - cov.diagonal() * (0.5 * tau), cov.scaled(tau))
    }
}

/// Constant drift: `m = x + (T − t)·c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDrift<const N: usize> {
    /// The drift per unit time.
    pub constant_term: Vector<N>,
}

impl<const N: usize> ConstantDrift<N> {
    /// Create from the drift vector.
    pub fn new(constant_term: Vector<N>) -> Self {
        Self { constant_term }
    }
}

impl<const N: usize> Default for ConstantDrift<N> {
    fn default() -> Self {
        Self::new(Vector::zeros())
    }
}

impl<const N: usize> DriftSpecification<N> for ConstantDrift<N> {
    fn conditional_distribution(
        &self,
        t: Time,
        maturity: Time,
        cov: &CovarianceMatrix<N>,
        state: &Vector<N>,
    ) -> Normal<N> {
        let tau = maturity - t;
        Normal::new(state + self.constant_term * tau, cov.scaled(tau))
    }
}

/// Adapts a closure `(t, T, Σ, x) -> Normal` into a drift specification.
#[derive(Clone, Copy)]
pub struct FnDrift<F>(pub F);

impl<F> std::fmt::Debug for FnDrift<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnDrift")
    }
}

impl<const N: usize, F> DriftSpecification<N> for FnDrift<F>
where
    F: Fn(Time, Time, &CovarianceMatrix<N>, &Vector<N>) -> Normal<N>,
{
    fn conditional_distribution(
        &self,
        t: Time,
        maturity: Time,
        cov: &CovarianceMatrix<N>,
        state: &Vector<N>,
    ) -> Normal<N> {
        (self.0)(t, maturity, cov, state)
    }
}

/// A Gaussian process with constant covariance and a drift strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianProcess<const N: usize, D> {
    drift: D,
    cov: CovarianceMatrix<N>,
}

impl<const N: usize, D: DriftSpecification<N>> GaussianProcess<N, D> {
    /// Create from a drift strategy and an instantaneous covariance matrix.
    pub fn new(drift: D, cov: CovarianceMatrix<N>) -> Self {
        Self { drift, cov }
    }

    /// The drift strategy.
    pub fn drift(&self) -> &D {
        &self.drift
    }

    /// The instantaneous covariance matrix.
    pub fn cov(&self) -> &CovarianceMatrix<N> {
        &self.cov
    }

    /// Distribution of `X(T)` given `X(t) = state`. Requires `T >= t`.
    pub fn conditional_distribution(&self, t: Time, maturity: Time, state: &Vector<N>) -> Normal<N> {
        debug_assert!(maturity >= t, "maturity {maturity} precedes start {t}");
        self.drift
            .conditional_distribution(t, maturity, &self.cov, state)
    }
}

impl GaussianProcess<1, ExponentialMartingaleDrift> {
    /// Univariate Black-76 log-price process.
    pub fn black76(vol: fp_core::Volatility) -> Self {
        Self::new(
            ExponentialMartingaleDrift,
            CovarianceMatrix::from_variance(vol * vol),
        )
    }
}

impl GaussianProcess<2, ExponentialMartingaleDrift> {
    /// Two correlated Black-76 log-price processes.
    pub fn bivariate_black76(
        vol1: fp_core::Volatility,
        vol2: fp_core::Volatility,
        corr: fp_core::Correlation,
    ) -> Self {
        Self::new(
            ExponentialMartingaleDrift,
            CovarianceMatrix::from_vols_and_corr(vol1, vol2, corr),
        )
    }
}
