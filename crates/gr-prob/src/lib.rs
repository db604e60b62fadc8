//! Magnitude-frequency math for grlaw.
//!
//! This crate hosts the Gutenberg-Richter recurrence law and its helpers:
//! - the literal recurrence evaluator (exceedance probability + density)
//! - the normalized doubly-truncated law (cdf/survival/quantile)
//! - small grid and quadrature helpers

pub mod math;
pub mod recurrence;
pub mod truncated;

pub use recurrence::{B_VALUE, RecurrenceLaw, evaluate, evaluate_par, evaluate_with_b_value};
pub use truncated::TruncatedGutenbergRichter;
