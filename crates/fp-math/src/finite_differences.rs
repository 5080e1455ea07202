//! Central finite-difference operators.
//!
//! All three operators are second-order accurate in the step. The step is a
//! caller-chosen compromise: truncation error shrinks with it while round-off
//! error grows (roughly `ε/dx` for the first derivative and `ε/dx²` for the
//! second ones). Nothing here adapts the step.
//!
//! The operators are generic over the value type of `f`, so they work the
//! same for real, complex and vector-valued functions.

use fp_core::Real;
use std::ops::{Add, Div, Mul, Sub};

/// `(f(x + dx) − f(x − dx)) / (2·dx)`.
#[inline]
pub fn fd_first<F, T>(f: F, x: Real, dx: Real) -> T
where
    F: Fn(Real) -> T,
    T: Sub<Output = T> + Div<Real, Output = T>,
{
    debug_assert!(dx > 0.0, "finite-difference step must be positive");
    (f(x + dx) - f(x - dx)) / (2.0 * dx)
}

/// `(f(x + dx) − 2·f(x) + f(x − dx)) / dx²`.
///
/// `f_at_x` is `f(x)`, passed in because it is often already known (a
/// Laplace transform is 1 at the origin) and saves one evaluation.
#[inline]
pub fn fd_second<F, T>(f: F, x: Real, dx: Real, f_at_x: T) -> T
where
    F: Fn(Real) -> T,
    T: Add<Output = T> + Sub<Output = T> + Mul<Real, Output = T> + Div<Real, Output = T>,
{
    debug_assert!(dx > 0.0, "finite-difference step must be positive");
    (f(x + dx) - f_at_x * 2.0 + f(x - dx)) / (dx * dx)
}

/// Mixed second derivative `∂²f/∂x∂y` at `(x, y)`:
///
/// ```text
/// (f(x+dx, y+dy) − f(x+dx, y−dy) − f(x−dx, y+dy) + f(x−dx, y−dy)) / (4·dx·dy)
/// ```
#[inline]
pub fn fd_mixed<F, T>(f: F, x: Real, y: Real, dx: Real, dy: Real) -> T
where
    F: Fn(Real, Real) -> T,
    T: Add<Output = T> + Sub<Output = T> + Div<Real, Output = T>,
{
    debug_assert!(dx > 0.0 && dy > 0.0, "finite-difference steps must be positive");
    (f(x + dx, y + dy) - f(x + dx, y - dy) - f(x - dx, y + dy) + f(x - dx, y - dy))
        / (4.0 * dx * dy)
}
