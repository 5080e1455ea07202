//! Fixed-order Gauss-Legendre quadrature.
//!
//! A rule of order `n` integrates every polynomial of degree `≤ 2n − 1`
//! exactly on [−1, 1]:
//!
//! ```text
//! ∫₋₁¹ p(x) dx = Σᵢ wᵢ p(xᵢ)
//! ```
//!
//! Rules are only available for the tabulated orders {8, 16, 24, 32, 48}; the
//! [`Tabulated`] bound turns any other order into a compile error. There is no
//! adaptive refinement and no error estimate: accuracy depends entirely on
//! the order and on the smoothness of the integrand.

use super::tables::{
    GAUSS_LEGENDRE_16, GAUSS_LEGENDRE_24, GAUSS_LEGENDRE_32, GAUSS_LEGENDRE_48, GAUSS_LEGENDRE_8,
};
use fp_core::Real;
use num_traits::Zero;
use std::ops::Mul;

/// The orders for which a rule is tabulated.
pub const TABULATED_ORDERS: [usize; 5] = [8, 16, 24, 32, 48];

/// Nodes and weights of an `ORDER`-point Gauss-Legendre rule on [−1, 1].
///
/// Nodes are ascending and symmetric about zero, weights are positive and
/// sum to 2.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendreRule<const ORDER: usize> {
    pub(crate) nodes: [Real; ORDER],
    pub(crate) weights: [Real; ORDER],
}

/// Implemented by the rule types that have a precomputed table.
pub trait Tabulated: 'static {
    /// The static table.
    fn tabulated() -> &'static Self;
}

macro_rules! tabulated {
    ($($order:literal => $table:ident),* $(,)?) => {
        $(
            impl Tabulated for GaussLegendreRule<$order> {
                #[inline]
                fn tabulated() -> &'static Self {
                    &$table
                }
            }
        )*
    };
}

tabulated! {
    8 => GAUSS_LEGENDRE_8,
    16 => GAUSS_LEGENDRE_16,
    24 => GAUSS_LEGENDRE_24,
    32 => GAUSS_LEGENDRE_32,
    48 => GAUSS_LEGENDRE_48,
}

impl<const ORDER: usize> GaussLegendreRule<ORDER> {
    /// Quadrature nodes in (−1, 1).
    pub fn nodes(&self) -> &[Real; ORDER] {
        &self.nodes
    }

    /// Quadrature weights.
    pub fn weights(&self) -> &[Real; ORDER] {
        &self.weights
    }

    /// Number of quadrature points.
    pub const fn order(&self) -> usize {
        ORDER
    }

    /// `Σᵢ wᵢ f(xᵢ)`, the rule applied on [−1, 1].
    pub fn integrate_unit<F, T>(&self, f: F) -> T
    where
        F: Fn(Real) -> T,
        T: Zero + Mul<Real, Output = T>,
    {
        self.nodes
            .iter()
            .zip(self.weights.iter())
            .fold(T::zero(), |acc, (&x, &w)| acc + f(x) * w)
    }

    /// Integrate `f` on `[a, b]` by mapping the rule onto the interval.
    ///
    /// Requires `a < b`. Reversed bounds are not reordered and a
    /// zero-width interval is not special-cased.
    pub fn integrate<F, T>(&self, f: F, a: Real, b: Real) -> T
    where
        F: Fn(Real) -> T,
        T: Zero + Mul<Real, Output = T>,
    {
        debug_assert!(a < b, "integration bounds must satisfy a < b, got [{a}, {b}]");
        let half = 0.5 * (b - a);
        self.integrate_unit(|x| f(a + (x + 1.0) * half)) * half
    }
}

impl<const ORDER: usize> GaussLegendreRule<ORDER>
where
    Self: Tabulated,
{
    /// The precomputed rule of this order.
    pub fn get() -> &'static Self {
        Self::tabulated()
    }
}

/// Integrate `f` on `[a, b]` with the tabulated `ORDER`-point rule.
///
/// `f` may return any additive value type that scales by a real, e.g.
/// `f64`, a complex number or a fixed-size vector.
///
/// ```
/// use fp_math::gauss_legendre;
/// let third: f64 = gauss_legendre::<8, _, _>(|x| x * x, 0.0, 1.0);
/// assert!((third - 1.0 / 3.0).abs() < 1e-15);
/// ```
#[inline]
pub fn gauss_legendre<const ORDER: usize, F, T>(f: F, a: Real, b: Real) -> T
where
    GaussLegendreRule<ORDER>: Tabulated,
    F: Fn(Real) -> T,
    T: Zero + Mul<Real, Output = T>,
{
    GaussLegendreRule::<ORDER>::get().integrate(f, a, b)
}
