//! Bivariate Black-76 model.
//!
//! Two futures prices following correlated driftless geometric Brownian
//! motions. In log coordinates the state after `τ` years is Gaussian:
//!
//! ```text
//! X(τ) ~ N(x − ½τ·diag(Σ), τ·Σ)
//! ```

use fp_core::{ensure, Correlation, Price, Real, Result, Time, Volatility};
use fp_math::{CovarianceMatrix, Normal, Vector};
use fp_processes::GeometricBrownianMotion;

/// Log futures prices `(ln F₁, ln F₂)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bb76State(Vector<2>);

impl Bb76State {
    /// State from two positive futures prices.
    pub fn from_prices(f1: Price, f2: Price) -> Result<Self> {
        ensure!(f1 > 0.0, "first futures price must be positive, got {f1}");
        ensure!(f2 > 0.0, "second futures price must be positive, got {f2}");
        Ok(Self::from_log_prices(f1.ln(), f2.ln()))
    }

    /// State from log prices.
    pub fn from_log_prices(x1: Real, x2: Real) -> Self {
        Self(Vector::<2>::new(x1, x2))
    }

    /// The log prices as a vector.
    pub fn log_prices(&self) -> &Vector<2> {
        &self.0
    }

    /// The futures prices.
    pub fn prices(&self) -> (Price, Price) {
        (self.0[0].exp(), self.0[1].exp())
    }
}

/// Bivariate Black-76 model with constant instantaneous covariance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bb76 {
    /// Instantaneous covariance of the log returns.
    pub cov: CovarianceMatrix<2>,
}

impl Bb76 {
    /// Create from a covariance matrix.
    pub fn new(cov: CovarianceMatrix<2>) -> Self {
        Self { cov }
    }

    /// Create from two volatilities and their correlation.
    pub fn from_vols_and_corr(vol1: Volatility, vol2: Volatility, corr: Correlation) -> Result<Self> {
        ensure!(vol1 >= 0.0, "first volatility must be non-negative, got {vol1}");
        ensure!(vol2 >= 0.0, "second volatility must be non-negative, got {vol2}");
        ensure!(
            (-1.0..=1.0).contains(&corr),
            "correlation must lie in [-1, 1], got {corr}"
        );
        Ok(Self::new(CovarianceMatrix::from_vols_and_corr(vol1, vol2, corr)))
    }

    /// The underlying martingale log-price process.
    pub fn process(&self) -> GeometricBrownianMotion<2> {
        GeometricBrownianMotion::martingale(self.cov)
    }

    /// Distribution of the log prices after `tau` years, starting from `state`.
    pub fn distribution_of_returns(&self, state: &Bb76State, tau: Time) -> Normal<2> {
        self.process().log_state_distribution(0.0, tau, state.log_prices())
    }
}

impl From<GeometricBrownianMotion<2>> for Bb76 {
    fn from(p: GeometricBrownianMotion<2>) -> Self {
        Self::new(*p.cov())
    }
}
