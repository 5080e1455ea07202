//! Moments of a random vector from its Laplace transform.
//!
//! Given `lt(z) = E[exp(zᵗX)]` for a real random vector `X`, the
//! characteristic function along the `k`-th axis is `t ↦ lt(i·t·eₖ)` and
//!
//! ```text
//! E[Xₖ]     =  Im  d/dt  lt(i·t·eₖ)              at t = 0
//! E[Xₖ²]    = −Re  d²/dt² lt(i·t·eₖ)             at t = 0
//! E[XₖXₗ]   = −Re  ∂²/∂s∂t lt(i·s·eₖ + i·t·eₗ)   at s = t = 0
//! ```
//!
//! The derivatives are central finite differences with step `eps`
//! (see [`crate::finite_differences`] for the accuracy trade-off). This is a
//! verification oracle for closed-form distribution parameters, not a
//! production path: the mean costs `2N` transform evaluations and the
//! covariance `2N + 2N(N − 1)`.

use crate::covariance::CovarianceMatrix;
use crate::distributions::Normal;
use crate::finite_differences::{fd_first, fd_mixed, fd_second};
use crate::types::{imaginary_axis, Complex, ComplexVector, Matrix, Vector};
use fp_core::{NumericalSettings, Real};

/// The mean of `X` given its Laplace transform.
pub fn fd_mean<const N: usize, F>(lt: F, eps: Real) -> Vector<N>
where
    F: Fn(&ComplexVector<N>) -> Complex,
{
    tracing::trace!(dimension = N, eps, "finite-difference mean");
    Vector::from_fn(|k, _| {
        let chf = |t: Real| lt(&imaginary_axis::<N>(k, t));
        fd_first(chf, 0.0, eps).im
    })
}

/// [`fd_mean`] with the step taken from `settings`.
pub fn fd_mean_with<const N: usize, F>(lt: F, settings: &NumericalSettings) -> Vector<N>
where
    F: Fn(&ComplexVector<N>) -> Complex,
{
    fd_mean(lt, settings.fd_step())
}

/// The second-moment matrix `E[XXᵗ]` given the Laplace transform.
///
/// This is the covariance when `X` has zero mean; otherwise use
/// [`fd_cov_centered`].
pub fn fd_cov<const N: usize, F>(lt: F, eps: Real) -> CovarianceMatrix<N>
where
    F: Fn(&ComplexVector<N>) -> Complex,
{
    tracing::trace!(dimension = N, eps, "finite-difference covariance");
    let one = Complex::new(1.0, 0.0);
    let mut m = Matrix::<N, N>::zeros();
    for k in 0..N {
        let chf = |t: Real| lt(&imaginary_axis::<N>(k, t));
        m[(k, k)] = -fd_second(chf, 0.0, eps, one).re;
        for l in 0..k {
            let chf2 = |s: Real, t: Real| {
                let mut z = imaginary_axis::<N>(k, s);
                z[l] = Complex::new(0.0, t);
                lt(&z)
            };
            m[(k, l)] = -fd_mixed(chf2, 0.0, 0.0, eps, eps).re;
            m[(l, k)] = m[(k, l)];
        }
    }
    CovarianceMatrix::from_matrix(m)
}

/// [`fd_cov`] with the step taken from `settings`.
pub fn fd_cov_with<const N: usize, F>(lt: F, settings: &NumericalSettings) -> CovarianceMatrix<N>
where
    F: Fn(&ComplexVector<N>) -> Complex,
{
    fd_cov(lt, settings.fd_step())
}

/// The covariance of `X` when its mean is known: `E[XXᵗ] − mean·meanᵗ`.
pub fn fd_cov_centered<const N: usize, F>(lt: F, mean: &Vector<N>, eps: Real) -> CovarianceMatrix<N>
where
    F: Fn(&ComplexVector<N>) -> Complex,
{
    fd_cov(lt, eps).sub_outer(mean)
}

/// Mean and centred covariance in one call, as a [`Normal`].
pub fn fd_moments<const N: usize, F>(lt: F, eps: Real) -> Normal<N>
where
    F: Fn(&ComplexVector<N>) -> Complex,
{
    let mean = fd_mean(&lt, eps);
    let cov = fd_cov_centered(&lt, &mean, eps);
    Normal::new(mean, cov)
}

/// [`fd_moments`] with the step taken from `settings`.
pub fn fd_moments_with<const N: usize, F>(lt: F, settings: &NumericalSettings) -> Normal<N>
where
    F: Fn(&ComplexVector<N>) -> Complex,
{
    fd_moments(lt, settings.fd_step())
}
