//! Call on the spread of two correlated lognormal prices.
//!
//! For `(X₁, X₂) ~ N(μ, Σ)` the payoff is `(e^{X₁} − e^{X₂} − K)⁺`. Writing
//! `X₂ = μ₂ + v₂z` with `z` standard normal, `X₁ | z` is Normal and the
//! conditional expectation is a Black-76 value with strike `K + e^{X₂}`:
//!
//! ```text
//! a  = μ₁ + v₁ρz,   b = v₁√(1 − ρ²),   c = K + e^{μ₂ + v₂z}
//! d₁ = (a + b² − ln c)/b,   d₂ = d₁ − b
//! E[payoff | z] = e^{a + b²/2} N(d₁) − c N(d₂)
//! ```
//!
//! The outer expectation over `z` is a Gauss-Legendre integral of order
//! [`SPREAD_QUADRATURE_ORDER`] on the configured truncation interval.

use fp_core::{ensure, Correlation, NumericalSettings, Price, Real, Result, Time, Volatility};
use fp_math::{gauss_legendre, normal_cdf, normal_pdf, Normal};
use fp_models::{Bb76, Bb76State};

/// Quadrature order used by the spread pricer.
pub const SPREAD_QUADRATURE_ORDER: usize = 32;

/// The spread-call payoff conditioned on the standardised second log price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalSpreadCallPayoff {
    mu1: Real,
    mu2: Real,
    v1: Volatility,
    v2: Volatility,
    rho: Correlation,
    strike: Real,
}

impl ConditionalSpreadCallPayoff {
    /// Build the integrand for `dist` and `strike`.
    pub fn new(dist: &Normal<2>, strike: Real) -> Self {
        let cov = dist.cov();
        let v1 = cov.variance(0).sqrt();
        let v2 = cov.variance(1).sqrt();
        let rho = if v1 > 0.0 && v2 > 0.0 {
            (cov[(0, 1)] / (v1 * v2)).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        Self {
            mu1: dist.mean()[0],
            mu2: dist.mean()[1],
            v1,
            v2,
            rho,
            strike,
        }
    }

    /// Conditional expectation at `z`, weighted by the standard normal density.
    pub fn value(&self, z: Real) -> Real {
        let a = self.mu1 + self.v1 * self.rho * z;
        let b = (1.0 - self.rho * self.rho).max(0.0).sqrt() * self.v1;
        let c = self.strike + (self.mu2 + self.v2 * z).exp();
        let conditional = if b > 0.0 {
            let d1 = (a + b * b - c.ln()) / b;
            let d2 = d1 - b;
            (a + 0.5 * b * b).exp() * normal_cdf(d1) - c * normal_cdf(d2)
        } else {
            (a.exp() - c).max(0.0)
        };
        conditional * normal_pdf(z)
    }
}

/// Undiscounted spread call `E[(e^{X₁} − e^{X₂} − K)⁺]` with default settings.
pub fn normal_spread_call(dist: &Normal<2>, strike: Real) -> Real {
    normal_spread_call_with(dist, strike, NumericalSettings::global())
}

/// As [`normal_spread_call`] with explicit integration bounds.
pub fn normal_spread_call_with(dist: &Normal<2>, strike: Real, settings: &NumericalSettings) -> Real {
    let payoff = ConditionalSpreadCallPayoff::new(dist, strike);
    let (lower, upper) = settings.integration_bounds();
    gauss_legendre::<SPREAD_QUADRATURE_ORDER, _, _>(|z| payoff.value(z), lower, upper)
}

/// Undiscounted spread call on two Black-76 futures.
///
/// # Arguments
/// * `f1`, `f2` — futures prices (must be > 0)
/// * `strike` — spread strike (must be ≥ 0)
/// * `vol1`, `vol2` — volatilities (must be ≥ 0)
/// * `corr` — correlation in `[-1, 1]`
/// * `tau` — time to expiry in years (must be > 0)
pub fn bb76_spread_call(
    f1: Price,
    f2: Price,
    strike: Price,
    vol1: Volatility,
    vol2: Volatility,
    corr: Correlation,
    tau: Time,
) -> Result<Real> {
    ensure!(strike >= 0.0, "strike must be non-negative, got {strike}");
    ensure!(tau > 0.0, "time to expiry must be positive, got {tau}");
    let state = Bb76State::from_prices(f1, f2)?;
    let model = Bb76::from_vols_and_corr(vol1, vol2, corr)?;

    let dist = model.distribution_of_returns(&state, tau);
    let value = normal_spread_call(&dist, strike);
    tracing::debug!(f1, f2, strike, vol1, vol2, corr, tau, value, "bb76 spread call");
    Ok(value)
}
