//! Aggregate roster statistics.

use serde::Serialize;

use crate::model::Student;

/// A point-in-time summary of a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterStats {
    /// Total number of records.
    pub total: usize,
    /// Records with the active flag set.
    pub active: usize,
    /// Arithmetic mean of all averages; `0.0` when there are no records.
    pub overall_average: f64,
}

impl RosterStats {
    /// Compute a summary over a slice of records.
    pub fn compute(students: &[Student]) -> Self {
        let total = students.len();
        let active = students.iter().filter(|s| s.active).count();
        let overall_average = if total == 0 {
            0.0
        } else {
            students.iter().map(|s| s.average).sum::<f64>() / total as f64
        };

        Self {
            total,
            active,
            overall_average,
        }
    }
}
