//! Per-entity rule sets for fixture records.
//!
//! Each submodule validates one record in isolation and returns a
//! [`ValidationResult`](crate::result::ValidationResult). Collection-scope
//! rules (duplicate ids, duplicate student emails) live in
//! [`dataset`](crate::dataset), which also threads the reference
//! collections through for the foreign-key checks.

pub mod courses;
pub mod members;
pub mod students;

use crate::record::{self, Record};
use crate::result::ValidationResult;

/// Required-field presence check shared by the entity validators.
/// An absent key, JSON null, and a blank string all count as missing.
fn check_required(record: &Record, fields: &[&str], result: &mut ValidationResult) {
    for field in fields {
        if !record.contains_key(*field) {
            result.push_error(format!("missing required field '{}'", field));
        } else if record::is_blank(record, field) {
            result.push_error(format!("required field '{}' is empty", field));
        }
    }
}

/// Minimum-length check for a present text field.
fn check_min_length(record: &Record, field: &str, min: usize, result: &mut ValidationResult) {
    let Some(value) = record::text_nonempty(record, field) else {
        return;
    };
    if value.chars().count() < min {
        result.push_error(format!("{} too short (min {} chars)", field, min));
    }
}

/// Membership check against a closed enumeration, case-sensitive.
fn check_enum(record: &Record, field: &str, allowed: &[&str], result: &mut ValidationResult) {
    let Some(value) = record::text_nonempty(record, field) else {
        return;
    };
    if !allowed.contains(&value.as_str()) {
        result.push_error(format!(
            "invalid {} '{}' (valid: {})",
            field,
            value,
            allowed.join(", ")
        ));
    }
}
