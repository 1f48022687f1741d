//! The uniform success/failure wrapper the presentation layer prints.
//!
//! Registry operations return plain `Result`s; an `Outcome` is the
//! serializable ok/message/data rendering of one of those results, built
//! at the point where it is shown to a human.

use std::fmt;

use serde::Serialize;

use crate::error::RegistryError;

/// A tagged operation outcome: success with a message and an optional
/// payload, or failure with the error's message.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    /// Whether the operation succeeded. Inspect before trusting `data`.
    pub ok: bool,
    /// Human-readable message.
    pub message: String,
    /// Payload on success, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A failed outcome. Carries no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            data: None,
        }
    }

    /// Render a registry result, using `success_message` when it is `Ok`
    /// and the error's display when it is not.
    pub fn from_result(
        result: Result<T, RegistryError>,
        success_message: impl Into<String>,
    ) -> Self {
        match result {
            Ok(data) => Self::success(success_message, data),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

impl<T> fmt::Display for Outcome<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.ok { "ok" } else { "error" };
        match &self.data {
            Some(data) => write!(f, "[{tag}] {}: {data}", self.message),
            None => write!(f, "[{tag}] {}", self.message),
        }
    }
}
