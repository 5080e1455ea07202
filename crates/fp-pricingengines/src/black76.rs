//! Black-76 call on a lognormal underlying.
//!
//! For `X ~ N(μ, σ²)` and strike `K > 0` the undiscounted call value is
//!
//! $$E[(e^X - K)^+] = e^{\mu + \sigma^2/2} N(d_1) - K N(d_2)$$
//!
//! with $d_1 = (\mu + \sigma^2 - \ln K)/\sigma$ and $d_2 = d_1 - \sigma$.

use fp_core::{ensure, Price, Real, Result, Time, Volatility};
use fp_math::{normal_cdf, Normal, Vector};
use fp_processes::black76_process;

/// Expected call payoff `E[(e^X − K)⁺]` for a univariate Normal log price.
///
/// A degenerate distribution returns the intrinsic value. A non-positive
/// strike makes the call a forward, `E[e^X] − K`.
pub fn gbs(dist: &Normal<1>, strike: Real) -> Real {
    let mu = dist.mean()[0];
    let variance = dist.cov().variance_scalar();
    let forward = (mu + 0.5 * variance).exp();
    if strike <= 0.0 {
        return forward - strike;
    }
    if variance <= 0.0 {
        return (mu.exp() - strike).max(0.0);
    }
    let sigma = variance.sqrt();
    let d1 = (mu + variance - strike.ln()) / sigma;
    let d2 = d1 - sigma;
    forward * normal_cdf(d1) - strike * normal_cdf(d2)
}

/// Undiscounted Black-76 call on a futures price.
///
/// # Arguments
/// * `forward` — futures price (must be > 0)
/// * `strike` — strike (must be > 0)
/// * `vol` — lognormal volatility (must be ≥ 0)
/// * `tau` — time to expiry in years (must be > 0)
pub fn black76_call(forward: Price, strike: Price, vol: Volatility, tau: Time) -> Result<Real> {
    ensure!(forward > 0.0, "forward must be positive, got {forward}");
    ensure!(strike > 0.0, "strike must be positive, got {strike}");
    ensure!(vol >= 0.0, "volatility must be non-negative, got {vol}");
    ensure!(tau > 0.0, "time to expiry must be positive, got {tau}");

    let dist = black76_process(vol).log_state_distribution(0.0, tau, &Vector::<1>::new(forward.ln()));
    let value = gbs(&dist, strike);
    tracing::debug!(forward, strike, vol, tau, value, "black-76 call");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fp_core::Error;

    #[test]
    fn reference_value() {
        let v = black76_call(100.0, 100.0, 0.2, 1.0).unwrap();
        assert_relative_eq!(v, 7.965_567_455_405_803_8, max_relative = 1e-8);
    }

    #[test]
    fn gbs_matches_black76() {
        let tau = 0.75;
        let vol = 0.3;
        let f: Real = 50.0;
        let dist = Normal::univariate(f.ln() - 0.5 * vol * vol * tau, vol * vol * tau);
        let v = black76_call(f, 45.0, vol, tau).unwrap();
        assert_relative_eq!(gbs(&dist, 45.0), v, max_relative = 1e-14);
    }

    #[test]
    fn zero_volatility_is_intrinsic() {
        assert_relative_eq!(
            black76_call(110.0, 100.0, 0.0, 1.0).unwrap(),
            10.0,
            max_relative = 1e-12
        );
        assert_eq!(black76_call(90.0, 100.0, 0.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn non_positive_strike_is_forward() {
        let dist = Normal::univariate(0.0, 0.04);
        assert_relative_eq!(gbs(&dist, 0.0), 0.02_f64.exp(), max_relative = 1e-15);
        assert_relative_eq!(gbs(&dist, -1.0), 0.02_f64.exp() + 1.0, max_relative = 1e-15);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            black76_call(-1.0, 100.0, 0.2, 1.0),
            Err(Error::Precondition(_))
        ));
        assert!(black76_call(100.0, 0.0, 0.2, 1.0).is_err());
        assert!(black76_call(100.0, 100.0, -0.2, 1.0).is_err());
        assert!(black76_call(100.0, 100.0, 0.2, 0.0).is_err());
    }
}
