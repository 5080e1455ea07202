//! Moment checks on GBM transforms: the martingale property and the
//! covariance of returns recovered numerically from the Laplace transform.

use approx::assert_relative_eq;
use fp_math::{fd_cov_centered, fd_mean, Complex, ComplexVector, CovarianceMatrix, Vector};
use fp_processes::{
    bivariate_black76_process, black76_process, ExponentialMartingaleDrift, GaussianProcess,
    GeometricBrownianMotion,
};
use proptest::prelude::*;

fn unit(i: usize) -> ComplexVector<2> {
    let mut z = ComplexVector::<2>::zeros();
    z[i] = Complex::new(1.0, 0.0);
    z
}

#[test]
fn bivariate_gbm_is_a_martingale() {
    let p = bivariate_black76_process(0.2, 0.2, 0.5);
    let f0 = Vector::<2>::new(10.0, 7.0);
    let x0 = f0.map(f64::ln);
    for tau in [0.1, 0.5, 1.0, 5.0] {
        for i in 0..2 {
            let lt = p.transform_coefficients(0.0, tau, &unit(i)).expdot(&x0);
            assert_relative_eq!(lt.re, f0[i], max_relative = 0.01);
        }
    }
}

#[test]
fn covariance_of_returns_from_transform() {
    let cov = CovarianceMatrix::<2>::from_vols_and_corr(0.2, 0.3, 0.5);
    let p = GeometricBrownianMotion::martingale(cov);
    let tau = 0.5;
    let x0 = Vector::<2>::new(10.0_f64.ln(), 7.0_f64.ln());
    let lt = |z: &ComplexVector<2>| p.transform_coefficients(0.0, tau, z).expdot(&x0);
    // Moments of X(T) − x0 come from the transform with the state set to zero.
    let lt_returns = |z: &ComplexVector<2>| p.transform_coefficients(0.0, tau, z).expdot(&Vector::zeros());

    let mean = fd_mean(&lt, 1e-6);
    let expected = x0 + p.drift() * tau;
    assert_relative_eq!(mean[0], expected[0], max_relative = 0.01);
    assert_relative_eq!(mean[1], expected[1], max_relative = 0.01);

    let ret_mean = fd_mean(&lt_returns, 1e-6);
    let ret_cov = fd_cov_centered(&lt_returns, &ret_mean, 1e-6);
    let want = cov.scaled(tau);
    for i in 0..2 {
        for j in 0..2 {
            assert_relative_eq!(ret_cov[(i, j)], want[(i, j)], max_relative = 0.25);
        }
    }
}

#[test]
fn gaussian_process_and_gbm_agree() {
    let gp = GaussianProcess::bivariate_black76(0.25, 0.35, -0.4);
    let gbm = bivariate_black76_process(0.25, 0.35, -0.4);
    let x = Vector::<2>::new(1.0, 2.0);
    let a = gp.conditional_distribution(0.0, 0.75, &x);
    let b = gbm.log_state_distribution(0.0, 0.75, &x);
    assert_relative_eq!(a.mean()[0], b.mean()[0], max_relative = 1e-14);
    assert_relative_eq!(a.mean()[1], b.mean()[1], max_relative = 1e-14);
    assert_relative_eq!(a.cov()[(0, 1)], b.cov()[(0, 1)], max_relative = 1e-14);
}

#[test]
fn univariate_factories_agree() {
    let gp = GaussianProcess::<1, ExponentialMartingaleDrift>::black76(0.3);
    let gbm = black76_process(0.3);
    assert_eq!(gp.cov(), gbm.cov());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn martingale_for_any_parameters(
        v1 in 0.01f64..0.8,
        v2 in 0.01f64..0.8,
        rho in -0.99f64..0.99,
        tau in 0.0f64..3.0,
        f1 in 1.0f64..200.0,
        f2 in 1.0f64..200.0,
    ) {
        let p = bivariate_black76_process(v1, v2, rho);
        let x0 = Vector::<2>::new(f1.ln(), f2.ln());
        let lt1 = p.transform_coefficients(0.0, tau, &unit(0)).expdot(&x0);
        let lt2 = p.transform_coefficients(0.0, tau, &unit(1)).expdot(&x0);
        prop_assert!((lt1.re / f1 - 1.0).abs() < 1e-12);
        prop_assert!((lt2.re / f2 - 1.0).abs() < 1e-12);
    }
}
