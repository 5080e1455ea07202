//! # fp-pricingengines
//!
//! Undiscounted option values computed as expectations under Gaussian
//! log-price distributions.
//!
//! * [`black76`]: closed-form call on a lognormal underlying.
//! * [`spread_call`]: call on the difference of two correlated lognormals,
//!   by one-dimensional Gauss-Legendre quadrature over the conditioning
//!   variable.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black76;
pub mod spread_call;

pub use black76::{black76_call, gbs};
pub use spread_call::{
    bb76_spread_call, normal_spread_call, normal_spread_call_with, ConditionalSpreadCallPayoff,
    SPREAD_QUADRATURE_ORDER,
};
