//! Registry error types.
//!
//! Every failure a registry operation can report. All variants are
//! recoverable and surface through `Result`; domain-invalid input never
//! panics the process.

use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// An add used an id that is already present.
    #[error("a student with id {0} already exists")]
    DuplicateId(u32),

    /// An add carried an age outside the accepted range.
    #[error("age {0} is outside the accepted range 15..=80")]
    InvalidAge(u32),

    /// An add or update carried an average outside the accepted range.
    #[error("average {0} is outside the accepted range 0..=10")]
    InvalidAverage(f64),

    /// A lookup, update, or status change referenced an unknown id.
    #[error("no student with id {0}")]
    NotFound(u32),
}

impl RegistryError {
    /// Returns `true` for validation failures, as opposed to a missing
    /// record.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            RegistryError::DuplicateId(_)
                | RegistryError::InvalidAge(_)
                | RegistryError::InvalidAverage(_)
        )
    }
}
