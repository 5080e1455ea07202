//! # fp-models
//!
//! Market models built on the Gaussian process layer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bb76;

pub use bb76::{Bb76, Bb76State};
