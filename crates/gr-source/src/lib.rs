//! # gr-source
//!
//! Synthetic seismic source catalogs. Each source carries its own
//! magnitude bounds and activity rate, which feed the recurrence law in
//! `gr-prob`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Named, ordered source collections and their JSON form.
pub mod catalog;
/// Generator configuration.
pub mod config;
/// Seeded source generator.
pub mod generator;
/// Source record types.
pub mod source;

pub use catalog::Catalog;
pub use config::SourceConfig;
pub use generator::SourceGenerator;
pub use source::{EventType, Mechanism, SeismicSource};
