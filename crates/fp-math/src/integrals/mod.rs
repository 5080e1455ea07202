//! Numerical integration.
//!
//! The workhorse is the tabulated Gauss-Legendre rule in
//! [`gauss_legendre`], a plain weighted sum with no error control. The
//! [`Integrator`] trait wraps it behind a checked, scalar-valued interface
//! for callers that prefer an error over a silently wrong number.

pub mod gauss_legendre;
pub mod tables;

use fp_core::{ensure, ensure_post, errors::Result, Real};
use gauss_legendre::{GaussLegendreRule, Tabulated};
use std::marker::PhantomData;

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

/// [`Integrator`] backed by the tabulated `ORDER`-point Gauss-Legendre rule.
///
/// Rejects unordered or non-finite bounds and a non-finite result.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussLegendreIntegral<const ORDER: usize> {
    _rule: PhantomData<GaussLegendreRule<ORDER>>,
}

impl<const ORDER: usize> GaussLegendreIntegral<ORDER>
where
    GaussLegendreRule<ORDER>: Tabulated,
{
    /// Create a new integrator.
    pub fn new() -> Self {
        Self { _rule: PhantomData }
    }
}

impl<const ORDER: usize> Integrator for GaussLegendreIntegral<ORDER>
where
    GaussLegendreRule<ORDER>: Tabulated,
{
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        ensure!(
            a.is_finite() && b.is_finite(),
            "GaussLegendreIntegral: bounds must be finite, got [{a}, {b}]"
        );
        ensure!(a < b, "GaussLegendreIntegral: expected a < b, got [{a}, {b}]");
        let value = GaussLegendreRule::<ORDER>::get().integrate(f, a, b);
        ensure_post!(
            value.is_finite(),
            "GaussLegendreIntegral: integrand produced a non-finite value"
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_core::Error;

    #[test]
    fn exp_on_unit_interval() {
        let gl = GaussLegendreIntegral::<16>::new();
        // ∫₀¹ e^x dx = e - 1
        let result = gl.integrate(|x| x.exp(), 0.0, 1.0).unwrap();
        let expected = std::f64::consts::E - 1.0;
        assert!(
            (result - expected).abs() < 1e-14,
            "got {result}, expected {expected}"
        );
    }

    #[test]
    fn rejects_reversed_bounds() {
        let gl = GaussLegendreIntegral::<8>::new();
        assert!(matches!(
            gl.integrate(|x| x, 1.0, 0.0),
            Err(Error::Precondition(_))
        ));
        assert!(gl.integrate(|x| x, 0.0, 0.0).is_err());
        assert!(gl.integrate(|x| x, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_singular_integrand() {
        let gl = GaussLegendreIntegral::<8>::new();
        let result = gl.integrate(|x| if x > 0.5 { f64::NAN } else { 1.0 }, 0.0, 1.0);
        assert!(matches!(result, Err(Error::Postcondition(_))));
    }
}
