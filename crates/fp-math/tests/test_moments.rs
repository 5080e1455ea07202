//! Cross-checks of closed-form Normal parameters against the moments
//! recovered from their Laplace transforms.

use approx::assert_relative_eq;
use fp_math::{
    fd_cov, fd_cov_centered, fd_mean, fd_moments, ComplexVector, CovarianceMatrix, Matrix, Normal,
    Vector,
};
use proptest::prelude::*;

fn trivariate() -> Normal<3> {
    let vols = Vector::<3>::new(0.3, 0.2, 0.45);
    let corr = Matrix::<3, 3>::new(
        1.0, 0.6, -0.3, //
        0.6, 1.0, 0.2, //
        -0.3, 0.2, 1.0,
    );
    Normal::new(
        Vector::<3>::new(-0.045, 0.12, 0.3),
        CovarianceMatrix::from_vols_and_correlations(&vols, &corr),
    )
}

// ─── Fixed scenarios ──────────────────────────────────────────────────────────

#[test]
fn trivariate_mean_and_covariance() {
    let d = trivariate();
    let lt = d.laplace_transform_fn();
    let step = 1e-4;

    let mean = fd_mean(&lt, step);
    for i in 0..3 {
        assert_relative_eq!(mean[i], d.mean()[i], max_relative = 0.01);
    }

    let cov = fd_cov_centered(&lt, d.mean(), step);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(cov[(i, j)], d.cov()[(i, j)], max_relative = 0.1);
        }
    }
}

#[test]
fn single_call_moments_match() {
    let d = trivariate();
    let est = fd_moments(d.laplace_transform_fn(), 1e-4);
    for i in 0..3 {
        assert_relative_eq!(est.mean()[i], d.mean()[i], max_relative = 1e-4);
        for j in 0..3 {
            assert_relative_eq!(est.cov()[(i, j)], d.cov()[(i, j)], max_relative = 1e-3);
        }
    }
}

#[test]
fn martingale_scenario() {
    // volatility 0.2 over one year, log-return drift −σ²τ/2
    let (sigma, tau) = (0.2_f64, 1.0_f64);
    let d = Normal::univariate(-0.5 * sigma * sigma * tau, sigma * sigma * tau);
    let lt = d.laplace_transform_fn();

    let mean = fd_mean(&lt, 1e-6);
    assert_relative_eq!(mean[0], -0.02, max_relative = 0.01);
    let var = fd_cov_centered(&lt, &mean, 1e-6);
    assert_relative_eq!(var[(0, 0)], 0.04, max_relative = 0.1);
}

#[test]
fn premultiplied_distribution_is_consistent_with_its_transform() {
    let d = trivariate();
    let spread = Matrix::<2, 3>::new(
        1.0, -1.0, 0.0, //
        0.0, 1.0, -1.0,
    );
    let p = d.premultiply(&spread).add(&Vector::<2>::new(0.01, -0.01));
    let est = fd_moments(p.laplace_transform_fn(), 1e-4);
    for i in 0..2 {
        assert_relative_eq!(est.mean()[i], p.mean()[i], max_relative = 1e-3);
        for j in 0..2 {
            assert_relative_eq!(est.cov()[(i, j)], p.cov()[(i, j)], max_relative = 1e-2);
        }
    }
}

#[test]
fn user_supplied_transform() {
    // Two independent Normals written out by hand rather than through Normal<N>.
    let lt = |z: &ComplexVector<2>| {
        let (a, b) = (z[0], z[1]);
        (a * 0.1 + a * a * 0.02 + b * -0.2 + b * b * 0.08).exp()
    };
    let mean = fd_mean(lt, 1e-4);
    assert_relative_eq!(mean[0], 0.1, max_relative = 1e-6);
    assert_relative_eq!(mean[1], -0.2, max_relative = 1e-6);
    let cov = fd_cov_centered(lt, &mean, 1e-4);
    assert_relative_eq!(cov[(0, 0)], 0.04, max_relative = 1e-4);
    assert_relative_eq!(cov[(1, 1)], 0.16, max_relative = 1e-4);
    assert!(cov[(0, 1)].abs() < 1e-6);
}

#[test]
fn raw_second_moment_without_centring() {
    let d = Normal::univariate(0.3, 0.01);
    let raw = fd_cov(d.laplace_transform_fn(), 1e-4);
    assert_relative_eq!(raw[(0, 0)], 0.01 + 0.09, max_relative = 1e-5);
}

// ─── Randomised ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transform_reproduces_parameters(
        mean_abs in prop::array::uniform3(0.05f64..0.5),
        signs in prop::array::uniform3(any::<bool>()),
        vols in prop::array::uniform3(0.1f64..0.6),
        rho in prop::array::uniform3(-0.4f64..0.4),
    ) {
        let mean = Vector::<3>::from_fn(|i, _| if signs[i] { mean_abs[i] } else { -mean_abs[i] });
        let corr = Matrix::<3, 3>::new(
            1.0, rho[0], rho[1],
            rho[0], 1.0, rho[2],
            rho[1], rho[2], 1.0,
        );
        let d = Normal::new(mean, CovarianceMatrix::from_vols_and_correlations(&Vector::from(vols), &corr));
        let est = fd_moments(d.laplace_transform_fn(), 1e-4);
        for i in 0..3 {
            let m = d.mean()[i];
            prop_assert!((est.mean()[i] - m).abs() <= 0.01 * m.abs());
            for j in 0..3 {
                let c = d.cov()[(i, j)];
                prop_assert!((est.cov()[(i, j)] - c).abs() <= 0.1 * c.abs() + 1e-6);
            }
        }
    }
}
