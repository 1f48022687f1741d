//! Core data model types for rosterly.
//!
//! A `Student` is the single record kind the registry holds. The inclusive
//! validation ranges live here so the registry and any external validator
//! agree on the bounds.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Accepted age range at insertion time, bounds inclusive.
pub const AGE_RANGE: RangeInclusive<u32> = 15..=80;

/// Accepted average-score range, bounds inclusive. Applies at insertion
/// and on every subsequent update.
pub const AVERAGE_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// A single student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier within a registry.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Age in years. Validated against [`AGE_RANGE`] when the record is
    /// added; no mutation path changes it afterwards.
    pub age: u32,
    /// Average score in [`AVERAGE_RANGE`].
    pub average: f64,
    /// Whether the student is currently considered enrolled.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Student {
    /// Construct an active student record.
    pub fn new(id: u32, name: impl Into<String>, age: u32, average: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            average,
            active: true,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} (age {}, avg {:.1}, {})",
            self.id,
            self.name,
            self.age,
            self.average,
            if self.active { "active" } else { "inactive" }
        )
    }
}
