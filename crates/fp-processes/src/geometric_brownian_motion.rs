//! Multivariate geometric Brownian motion in log coordinates.
//!
//! ```text
//! dX = μ dt + dW,   Cov(dW) = Σ dt
//! ```
//!
//! `X` is the vector of log prices. The increment over `[t, T]` is exactly
//! `N((T − t)·μ, (T − t)·Σ)`, so the exponential Laplace transform of the
//! state is affine in the starting point:
//!
//! ```text
//! E[exp(zᵀX(T)) | X(t) = x] = exp(A(t, T, z) + zᵀx)
//! ```

use fp_core::{Correlation, Time, Volatility};
use fp_math::{complexify, Complex, ComplexVector, CovarianceMatrix, Normal, Vector};

/// Coefficients `(A, B)` of an affine exponential transform `exp(A + Bᵀx)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCoefficients<const N: usize> {
    /// The constant term `A`.
    pub const_term: Complex,
    /// The linear term `B`.
    pub linear_term: ComplexVector<N>,
}

impl<const N: usize> TransformCoefficients<N> {
    /// `A + Bᵀx`.
    pub fn dot(&self, state: &Vector<N>) -> Complex {
        self.const_term + self.linear_term.dot(&complexify(state))
    }

    /// `exp(A + Bᵀx)`.
    pub fn expdot(&self, state: &Vector<N>) -> Complex {
        self.dot(state).exp()
    }
}

/// Geometric Brownian motion with constant log drift and covariance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricBrownianMotion<const N: usize> {
    drift: Vector<N>,
    cov: CovarianceMatrix<N>,
}

impl<const N: usize> GeometricBrownianMotion<N> {
    /// Create from the log drift per unit time and the instantaneous covariance.
    pub fn new(drift: Vector<N>, cov: CovarianceMatrix<N>) -> Self {
        Self { drift, cov }
    }

    /// The drift that makes every `exp(Xᵢ)` a martingale: `μ = −½·diag(Σ)`.
    pub fn martingale(cov: CovarianceMatrix<N>) -> Self {
        Self::new(cov.diagonal() * -0.5, cov)
    }

    /// Log drift per unit time.
    pub fn drift(&self) -> &Vector<N> {
        &self.drift
    }

    /// Instantaneous covariance.
    pub fn cov(&self) -> &CovarianceMatrix<N> {
        &self.cov
    }

    /// Distribution of the increment `X(T) − X(t)`.
    pub fn increment_distribution(&self, t: Time, maturity: Time) -> Normal<N> {
        debug_assert!(maturity >= t, "maturity {maturity} precedes start {t}");
        let tau = maturity - t;
        Normal::new(self.drift * tau, self.cov.scaled(tau))
    }

    /// Distribution of `X(T)` given `X(t) = state`.
    pub fn log_state_distribution(&self, t: Time, maturity: Time, state: &Vector<N>) -> Normal<N> {
        self.increment_distribution(t, maturity).add(state)
    }

    /// Affine coefficients of `E[exp(zᵀX(T)) | X(t) = x]`.
    pub fn transform_coefficients(
        &self,
        t: Time,
        maturity: Time,
        z: &ComplexVector<N>,
    ) -> TransformCoefficients<N> {
        TransformCoefficients {
            const_term: self.increment_distribution(t, maturity).log_laplace_transform(z),
            linear_term: *z,
        }
    }
}

/// Martingale GBM for a single futures price with volatility `vol`.
pub fn black76_process(vol: Volatility) -> GeometricBrownianMotion<1> {
    GeometricBrownianMotion::martingale(CovarianceMatrix::from_variance(vol * vol))
}

/// Martingale GBM for two correlated futures prices.
pub fn bivariate_black76_process(
    vol1: Volatility,
    vol2: Volatility,
    corr: Correlation,
) -> GeometricBrownianMotion<2> {
    GeometricBrownianMotion::martingale(CovarianceMatrix::from_vols_and_corr(vol1, vol2, corr))
}
