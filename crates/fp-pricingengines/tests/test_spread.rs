//! Spread-call reference values and consistency with the Black-76 pricer.

use approx::assert_relative_eq;
use fp_core::NumericalSettings;
use fp_math::{CovarianceMatrix, Normal, Vector};
use fp_models::{Bb76, Bb76State};
use fp_pricingengines::{bb76_spread_call, black76_call, normal_spread_call, normal_spread_call_with};
use proptest::prelude::*;

#[test]
fn spread_reference_values() {
    let cases = [
        ((10.0, 7.0, 5.0, 0.2, 0.2, 0.5, 0.5), 0.041131),
        ((10.0, 7.0, 5.0, 0.2, 0.2, 0.99, 1.0), 0.002343),
        ((110.0, 100.0, 10.0, 0.3, 0.3, 0.9, 0.002), 0.256690),
    ];
    for ((f1, f2, k, v1, v2, rho, tau), expected) in cases {
        let value = bb76_spread_call(f1, f2, k, v1, v2, rho, tau).unwrap();
        assert_relative_eq!(value, expected, max_relative = 1e-4);
    }
}

#[test]
fn deterministic_second_leg_reduces_to_black76() {
    let spread = bb76_spread_call(10.0, 3.0, 5.0, 0.2, 0.0, 0.0, 1.0).unwrap();
    let vanilla = black76_call(10.0, 8.0, 0.2, 1.0).unwrap();
    assert_relative_eq!(spread, vanilla, max_relative = 1e-5);
}

#[test]
fn explicit_settings_match_default() {
    let d = Bb76::from_vols_and_corr(0.3, 0.3, 0.9)
        .unwrap()
        .distribution_of_returns(&Bb76State::from_prices(110.0, 100.0).unwrap(), 0.002);
    assert_eq!(
        normal_spread_call(&d, 10.0),
        normal_spread_call_with(&d, 10.0, &NumericalSettings::default())
    );
}

#[test]
fn direct_normal_input() {
    // Hand-built distribution equal to the BB76 one for the first reference case.
    let tau = 0.5;
    let mean = Vector::<2>::new(10.0_f64.ln() - 0.01, 7.0_f64.ln() - 0.01);
    let cov = CovarianceMatrix::from_vols_and_corr(0.2, 0.2, 0.5).scaled(tau);
    let value = normal_spread_call(&Normal::new(mean, cov), 5.0);
    assert_relative_eq!(value, 0.041131, max_relative = 1e-4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn spread_call_bounds(
        f1 in 5.0f64..20.0,
        f2 in 1.0f64..10.0,
        k in 0.0f64..5.0,
        v1 in 0.05f64..0.5,
        v2 in 0.05f64..0.5,
        rho in -0.9f64..0.9,
        tau in 0.05f64..2.0,
    ) {
        let value = bb76_spread_call(f1, f2, k, v1, v2, rho, tau).unwrap();
        let higher_strike = bb76_spread_call(f1, f2, k + 1.0, v1, v2, rho, tau).unwrap();
        prop_assert!(value >= (f1 - f2 - k).max(0.0) - 1e-3 * f1);
        prop_assert!(value <= f1);
        prop_assert!(higher_strike <= value + 1e-12);
    }
}
