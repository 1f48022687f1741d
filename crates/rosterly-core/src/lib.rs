//! rosterly-core — Core registry, data model, and error taxonomy.
//!
//! This crate defines the student record type, the typed error taxonomy,
//! the outcome wrapper, and the `Registry` that the rest of rosterly
//! builds on.

pub mod error;
pub mod model;
pub mod outcome;
pub mod registry;
pub mod stats;

pub use error::RegistryError;
pub use model::Student;
pub use outcome::Outcome;
pub use registry::Registry;
pub use stats::RosterStats;
