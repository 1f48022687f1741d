//! The in-memory student registry.
//!
//! An ordered collection of `Student` records with validated mutation and
//! linear-scan lookup. Insertion order is preserved; records are never
//! removed. Linear scans are fine at this scale; a map keyed by id could
//! replace them without changing the public contract as long as `list`
//! keeps insertion order.

use crate::error::RegistryError;
use crate::model::{Student, AGE_RANGE, AVERAGE_RANGE};
use crate::stats::RosterStats;

/// An owned, in-memory registry of student records.
///
/// Construct one explicitly and pass it to whoever needs it; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct Registry {
    students: Vec<Student>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records ever added.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Add a student record.
    ///
    /// Validation order is a contract callers may rely on: duplicate id
    /// first, then age, then average. On success the record is appended
    /// and a reference to the stored copy is returned.
    pub fn add(&mut self, student: Student) -> Result<&Student, RegistryError> {
        if self.students.iter().any(|s| s.id == student.id) {
            return Err(RegistryError::DuplicateId(student.id));
        }
        if !AGE_RANGE.contains(&student.age) {
            return Err(RegistryError::InvalidAge(student.age));
        }
        if !AVERAGE_RANGE.contains(&student.average) {
            return Err(RegistryError::InvalidAverage(student.average));
        }

        tracing::debug!(id = student.id, name = %student.name, "adding student");
        let idx = self.students.len();
        self.students.push(student);
        Ok(&self.students[idx])
    }

    /// All records in insertion order. The shared borrow prevents any
    /// mutation of the registry through the returned view.
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    /// The record with the given id, or `NotFound`.
    pub fn find_by_id(&self, id: u32) -> Result<&Student, RegistryError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    /// Replace a student's average in place.
    ///
    /// The range check runs before the existence lookup: an out-of-range
    /// average on an unknown id reports `InvalidAverage`, not `NotFound`.
    pub fn update_average(
        &mut self,
        id: u32,
        new_average: f64,
    ) -> Result<&Student, RegistryError> {
        if !AVERAGE_RANGE.contains(&new_average) {
            return Err(RegistryError::InvalidAverage(new_average));
        }
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        tracing::debug!(id, old = student.average, new = new_average, "updating average");
        student.average = new_average;
        Ok(student)
    }

    /// Set a student's active flag.
    pub fn change_status(&mut self, id: u32, active: bool) -> Result<&Student, RegistryError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        tracing::debug!(id, active, "changing status");
        student.active = active;
        Ok(student)
    }

    /// Active records only, relative order preserved.
    pub fn list_active(&self) -> Vec<&Student> {
        self.students.iter().filter(|s| s.active).collect()
    }

    /// Arithmetic mean of all averages, or `0.0` for an empty registry.
    pub fn overall_average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.students.iter().map(|s| s.average).sum();
        sum / self.students.len() as f64
    }

    /// Aggregate snapshot of the roster.
    pub fn stats(&self) -> RosterStats {
        RosterStats::compute(&self.students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32, average: f64) -> Student {
        Student::new(id, format!("Student {id}"), 20, average)
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut reg = Registry::new();
        reg.add(sample(2, 8.0)).unwrap();
        reg.add(sample(1, 7.0)).unwrap();
        reg.add(sample(3, 9.0)).unwrap();

        let ids: Vec<u32> = reg.list().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn add_rejects_duplicate_id_before_other_checks() {
        let mut reg = Registry::new();
        reg.add(sample(1, 8.0)).unwrap();

        // Age and average are both invalid too; duplicate id wins.
        let clash = Student::new(1, "Clash", 14, 11.0);
        assert_eq!(reg.add(clash), Err(RegistryError::DuplicateId(1)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn add_checks_age_before_average() {
        let mut reg = Registry::new();
        let bad_both = Student::new(1, "Bad", 81, -0.1);
        assert_eq!(reg.add(bad_both), Err(RegistryError::InvalidAge(81)));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let mut reg = Registry::new();
        assert_eq!(
            reg.add(Student::new(1, "Young", 14, 5.0)),
            Err(RegistryError::InvalidAge(14))
        );
        assert_eq!(
            reg.add(Student::new(2, "Old", 81, 5.0)),
            Err(RegistryError::InvalidAge(81))
        );
        assert!(reg.add(Student::new(3, "Min", 15, 5.0)).is_ok());
        assert!(reg.add(Student::new(4, "Max", 80, 5.0)).is_ok());
    }

    #[test]
    fn average_bounds_are_inclusive() {
        let mut reg = Registry::new();
        assert_eq!(
            reg.add(sample(1, -0.1)),
            Err(RegistryError::InvalidAverage(-0.1))
        );
        assert_eq!(
            reg.add(sample(2, 10.1)),
            Err(RegistryError::InvalidAverage(10.1))
        );
        assert!(reg.add(sample(3, 0.0)).is_ok());
        assert!(reg.add(sample(4, 10.0)).is_ok());
    }

    #[test]
    fn find_by_id_on_empty_registry() {
        let reg = Registry::new();
        assert_eq!(reg.find_by_id(1), Err(RegistryError::NotFound(1)));
    }

    #[test]
    fn find_by_id_returns_the_match() {
        let mut reg = Registry::new();
        reg.add(sample(1, 8.0)).unwrap();
        reg.add(sample(2, 9.0)).unwrap();
        assert_eq!(reg.find_by_id(2).unwrap().id, 2);
        assert_eq!(reg.find_by_id(9), Err(RegistryError::NotFound(9)));
    }

    #[test]
    fn update_average_mutates_in_place() {
        let mut reg = Registry::new();
        reg.add(sample(1, 8.5)).unwrap();
        let updated = reg.update_average(1, 9.0).unwrap();
        assert!((updated.average - 9.0).abs() < f64::EPSILON);
        assert!((reg.find_by_id(1).unwrap().average - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn update_average_checks_range_before_existence() {
        let mut reg = Registry::new();
        reg.add(sample(1, 8.5)).unwrap();

        // Unknown id, invalid value: the range check wins.
        assert_eq!(
            reg.update_average(99, 11.0),
            Err(RegistryError::InvalidAverage(11.0))
        );
        // Known id, invalid value.
        assert_eq!(
            reg.update_average(1, 11.0),
            Err(RegistryError::InvalidAverage(11.0))
        );
        // Unknown id, valid value.
        assert_eq!(reg.update_average(99, 5.0), Err(RegistryError::NotFound(99)));
    }

    #[test]
    fn change_status_and_list_active() {
        let mut reg = Registry::new();
        reg.add(sample(1, 8.0)).unwrap();
        reg.add(sample(2, 9.0)).unwrap();
        reg.add(sample(3, 7.0)).unwrap();

        let all_active: Vec<u32> = reg.list_active().iter().map(|s| s.id).collect();
        assert_eq!(all_active, vec![1, 2, 3]);

        reg.change_status(3, false).unwrap();
        let active: Vec<u32> = reg.list_active().iter().map(|s| s.id).collect();
        assert_eq!(active, vec![1, 2]);

        assert_eq!(
            reg.change_status(9, true),
            Err(RegistryError::NotFound(9))
        );
    }

    #[test]
    fn overall_average_empty_and_populated() {
        let mut reg = Registry::new();
        assert_eq!(reg.overall_average(), 0.0);

        reg.add(sample(1, 8.5)).unwrap();
        reg.add(sample(2, 9.2)).unwrap();
        reg.add(sample(3, 7.8)).unwrap();
        assert!((reg.overall_average() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn full_demo_scenario() {
        let mut reg = Registry::new();
        reg.add(Student::new(1, "Ana", 20, 8.5)).unwrap();
        reg.add(Student::new(2, "Luis", 22, 9.2)).unwrap();
        reg.add(Student::new(3, "Marta", 19, 7.8)).unwrap();

        reg.update_average(1, 9.0).unwrap();
        assert!((reg.find_by_id(1).unwrap().average - 9.0).abs() < f64::EPSILON);

        reg.change_status(3, false).unwrap();
        let active: Vec<u32> = reg.list_active().iter().map(|s| s.id).collect();
        assert_eq!(active, vec![1, 2]);

        let expected = (9.0 + 9.2 + 7.8) / 3.0;
        assert!((reg.overall_average() - expected).abs() < 1e-9);
    }
}
