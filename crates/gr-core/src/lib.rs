//! # gr-core
//!
//! Shared error type, result alias and value types used across the grlaw
//! crates. Nothing in here performs computation.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types.
pub mod error;
/// Common data types (evaluated recurrence curves).
pub mod types;

pub use error::{Error, Result};
pub use types::RecurrenceCurve;

/// Crate version, reported by `grlaw version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
