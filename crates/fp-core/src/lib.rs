//! # fp-core
//!
//! Core types, error definitions and numerical settings for fpricing.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – scalar type aliases, the error enum with
//! its `ensure!` / `fail!` macros, and the immutable [`NumericalSettings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

/// Numerical tuning knobs (finite-difference step, integration bounds).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for dimensions / indices.
pub type Size = usize;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A correlation coefficient in [-1, 1].
pub type Correlation = Real;

/// A price or value.
pub type Price = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::NumericalSettings;
