//! Member record rules.

use super::{check_enum, check_required};
use crate::fields::validate_email;
use crate::record::{self, Record};
use crate::result::ValidationResult;

/// Closed set of member designations.
pub const DESIGNATIONS: [&str; 7] = [
    "Professor",
    "Associate Professor",
    "Assistant Professor",
    "Lecturer",
    "Senior Lecturer",
    "Instructor",
    "Teaching Assistant",
];

const REQUIRED_FIELDS: [&str; 4] = ["id", "first_name", "last_name", "designation"];

/// Validate a single member record.
///
/// Email is optional for members: a malformed email degrades to a warning
/// rather than rejecting the record. Duplicate-id detection is collection
/// scope and handled by the dataset orchestrator.
pub fn validate(record: &Record) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_required(record, &REQUIRED_FIELDS, &mut result);
    check_name(record, "first_name", &mut result);
    check_name(record, "last_name", &mut result);
    check_enum(record, "designation", &DESIGNATIONS, &mut result);

    if let Some(email) = record::text_nonempty(record, "email") {
        if !validate_email(&email) {
            result.push_warning(format!("invalid email format: {}", email));
        }
    }

    result
}

/// Names must be at least two characters and alphabetic. Spaces and
/// hyphens are allowed for compound names.
fn check_name(record: &Record, field: &str, result: &mut ValidationResult) {
    let Some(name) = record::text_nonempty(record, field) else {
        return;
    };
    if name.chars().count() < 2 {
        result.push_error(format!("{} too short (min 2 chars)", field));
    }
    // Spaces and hyphens are separators, not letters: once stripped, the
    // remainder must be nonempty and alphabetic, so "--" is rejected.
    let letters: String = name.chars().filter(|c| *c != ' ' && *c != '-').collect();
    if letters.is_empty() || !letters.chars().all(char::is_alphabetic) {
        result.push_error(format!("{} contains invalid characters", field));
    }
}
