//! Dataset-level orchestration.
//!
//! Runs the per-record validators across full collections, threading the
//! reference collections through for the foreign-key checks, then appends
//! the collection-scope rules no single record can see: duplicate ids in
//! every collection and duplicate emails among students. Validation is
//! exhaustive, never fail-fast: a report carries every problem found.

use std::fmt;

use serde_json::Value;

use crate::record::{self, Record};
use crate::result::ValidationResult;
use crate::validators::{courses, members, students};

/// The three entity kinds a fixture dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Members,
    Courses,
    Students,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Members => write!(f, "Members"),
            Self::Courses => write!(f, "Courses"),
            Self::Students => write!(f, "Students"),
        }
    }
}

/// One [`ValidationResult`] per entity kind.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    pub members: ValidationResult,
    pub courses: ValidationResult,
    pub students: ValidationResult,
}

impl DatasetReport {
    /// Result for one entity kind.
    pub fn get(&self, kind: EntityKind) -> &ValidationResult {
        match kind {
            EntityKind::Members => &self.members,
            EntityKind::Courses => &self.courses,
            EntityKind::Students => &self.students,
        }
    }

    /// Per-entity results in fixed Members, Courses, Students order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, &ValidationResult)> {
        [
            (EntityKind::Members, &self.members),
            (EntityKind::Courses, &self.courses),
            (EntityKind::Students, &self.students),
        ]
        .into_iter()
    }

    /// True iff every entity kind validated cleanly.
    pub fn all_valid(&self) -> bool {
        self.iter().all(|(_, result)| result.is_valid())
    }

    /// Total error count across all entity kinds.
    pub fn error_count(&self) -> usize {
        self.iter().map(|(_, result)| result.errors().len()).sum()
    }

    /// Total warning count across all entity kinds.
    pub fn warning_count(&self) -> usize {
        self.iter()
            .map(|(_, result)| result.warnings().len())
            .sum()
    }
}

/// Validate a full dataset with cross-referential checks.
///
/// Every course is checked against the members collection and every
/// student against the courses collection; an empty reference collection
/// skips the foreign-key check so partial fixtures validate. Records are
/// visited in input order and collection-scope errors are appended after
/// the per-record ones, so output is deterministic for a given input.
pub fn validate_all(
    members_data: &[Record],
    courses_data: &[Record],
    students_data: &[Record],
) -> DatasetReport {
    let mut members_result = ValidationResult::new();
    for (idx, rec) in members_data.iter().enumerate() {
        members_result =
            members_result.merge(members::validate(rec).prefixed(&format!("Member[{}]", idx)));
    }
    append_duplicates(members_data, "id", "Member", &mut members_result);

    // An empty reference collection means "nothing to check against", not
    // "every reference is dangling": partial fixtures without members (or
    // courses) skip the foreign-key checks the same way a lone-record
    // validation with `None` does.
    let member_refs = (!members_data.is_empty()).then_some(members_data);
    let course_refs = (!courses_data.is_empty()).then_some(courses_data);

    let mut courses_result = ValidationResult::new();
    for (idx, rec) in courses_data.iter().enumerate() {
        courses_result = courses_result
            .merge(courses::validate(rec, member_refs).prefixed(&format!("Course[{}]", idx)));
    }
    append_duplicates(courses_data, "id", "Course", &mut courses_result);

    let mut students_result = ValidationResult::new();
    for (idx, rec) in students_data.iter().enumerate() {
        students_result = students_result
            .merge(students::validate(rec, course_refs).prefixed(&format!("Student[{}]", idx)));
    }
    append_duplicates(students_data, "id", "Student", &mut students_result);
    append_duplicates(students_data, "email", "Student", &mut students_result);

    DatasetReport {
        members: members_result,
        courses: courses_result,
        students: students_result,
    }
}

/// One error per duplicate occurrence: the second and later sightings of a
/// value each produce their own entry, naming the offending value. Records
/// without the field contribute nothing.
fn append_duplicates(
    records: &[Record],
    field: &str,
    label: &str,
    result: &mut ValidationResult,
) {
    let mut seen: Vec<&Value> = Vec::new();
    for (idx, rec) in records.iter().enumerate() {
        let Some(value) = record::field(rec, field) else {
            continue;
        };
        if seen.contains(&value) {
            result.push_error(format!(
                "{}[{}]: duplicate {} {}",
                label,
                idx,
                field,
                record::value_text(value)
            ));
        } else {
            seen.push(value);
        }
    }
}
