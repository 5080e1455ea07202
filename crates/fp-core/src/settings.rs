//! Numerical settings.
//!
//! [`NumericalSettings`] collects the tuning knobs that the pricers and the
//! transform-based moment checks otherwise hard-code: the finite-difference
//! step and the truncation bounds used when integrating against a standard
//! normal density.
//!
//! Settings are plain values. [`NumericalSettings::global`] hands out a
//! process-wide default instance through a `std::sync::OnceLock`; it is
//! never mutated after initialisation, so no locking is involved.

use crate::Real;
use std::sync::OnceLock;

/// Default step for central finite differences.
pub const DEFAULT_FD_STEP: Real = 1e-6;

/// Default truncation of a standardised normal integration domain.
pub const DEFAULT_INTEGRATION_BOUND: Real = 5.0;

/// Tuning knobs for finite differences and truncated quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericalSettings {
    fd_step: Real,
    lower_bound: Real,
    upper_bound: Real,
}

static GLOBAL: OnceLock<NumericalSettings> = OnceLock::new();

impl NumericalSettings {
    /// Return the process-wide default settings.
    pub fn global() -> &'static NumericalSettings {
        GLOBAL.get_or_init(NumericalSettings::default)
    }

    /// Step used by the finite-difference moment extractor.
    pub fn fd_step(&self) -> Real {
        self.fd_step
    }

    /// Integration bounds `(a, b)` for standardised-normal-weighted integrands.
    pub fn integration_bounds(&self) -> (Real, Real) {
        (self.lower_bound, self.upper_bound)
    }

    /// Replace the finite-difference step.
    pub fn with_fd_step(mut self, step: Real) -> Self {
        debug_assert!(step > 0.0, "finite-difference step must be positive");
        self.fd_step = step;
        self
    }

    /// Replace the integration bounds. Requires `lower < upper`.
    pub fn with_integration_bounds(mut self, lower: Real, upper: Real) -> Self {
        debug_assert!(lower < upper, "integration bounds must be ordered");
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }
}

impl Default for NumericalSettings {
    fn default() -> Self {
        Self {
            fd_step: DEFAULT_FD_STEP,
            lower_bound: -DEFAULT_INTEGRATION_BOUND,
            upper_bound: DEFAULT_INTEGRATION_BOUND,
        }
    }
}
