//! Course record rules.

use chrono::NaiveDate;

use super::{check_enum, check_min_length, check_required};
use crate::fields::validate_date;
use crate::record::{self, Record};
use crate::result::ValidationResult;

/// Closed set of course categories.
pub const CATEGORIES: [&str; 6] = [
    "Programming",
    "Web Development",
    "Data Analysis",
    "DevOps",
    "Testing",
    "Others",
];

const REQUIRED_FIELDS: [&str; 4] = ["id", "course_name", "faculty_id", "category"];

/// Validate a single course record.
///
/// When `members` is supplied, `faculty_id` must match some member's `id`;
/// passing `None` skips the foreign-key check so a course can be validated
/// in isolation.
pub fn validate(record: &Record, members: Option<&[Record]>) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_required(record, &REQUIRED_FIELDS, &mut result);
    check_min_length(record, "course_name", 3, &mut result);
    check_enum(record, "category", &CATEGORIES, &mut result);

    if let (Some(members), Some(faculty_id)) = (members, record::field(record, "faculty_id")) {
        if !record::contains_id(members, faculty_id) {
            result.push_error(format!(
                "faculty reference not found: faculty_id {}",
                record::value_text(faculty_id)
            ));
        }
    }

    check_dates(record, &mut result);
    result
}

/// Both dates are optional. A present date must be format-valid; when both
/// are present and format-valid, the end date must be strictly after the
/// start date, so a same-day course is rejected.
fn check_dates(record: &Record, result: &mut ValidationResult) {
    let start = record::text_nonempty(record, "start_date");
    let end = record::text_nonempty(record, "end_date");

    if let Some(s) = &start {
        if !validate_date(s) {
            result.push_error(format!("invalid start_date format: {}", s));
        }
    }
    if let Some(e) = &end {
        if !validate_date(e) {
            result.push_error(format!("invalid end_date format: {}", e));
        }
    }

    if let (Some(s), Some(e)) = (&start, &end) {
        if validate_date(s) && validate_date(e) {
            // Lax-format dates that are not real calendar dates (e.g. day
            // 31 in February) cannot be ordered and skip this check.
            let parsed_start = NaiveDate::parse_from_str(s, "%Y-%m-%d");
            let parsed_end = NaiveDate::parse_from_str(e, "%Y-%m-%d");
            if let (Ok(parsed_start), Ok(parsed_end)) = (parsed_start, parsed_end) {
                if parsed_end <= parsed_start {
                    result.push_error(format!(
                        "end_date {} must be strictly after start_date {}",
                        e, s
                    ));
                }
            }
        }
    }
}
