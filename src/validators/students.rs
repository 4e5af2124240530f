//! Student record rules.

use super::{check_min_length, check_required};
use crate::fields::{validate_email, validate_url};
use crate::record::{self, Record};
use crate::result::ValidationResult;

const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "email", "course_id"];

/// Validate a single student record.
///
/// Unlike members, a student's email is required, so a malformed value is
/// a hard error. The resume URL is optional and informational; a malformed
/// one only warns. Email uniqueness across the collection is the dataset
/// orchestrator's job.
pub fn validate(record: &Record, courses: Option<&[Record]>) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_required(record, &REQUIRED_FIELDS, &mut result);
    check_min_length(record, "name", 3, &mut result);

    if let Some(email) = record::text_nonempty(record, "email") {
        if !validate_email(&email) {
            result.push_error(format!("invalid email format: {}", email));
        }
    }

    if let (Some(courses), Some(course_id)) = (courses, record::field(record, "course_id")) {
        if !record::contains_id(courses, course_id) {
            result.push_error(format!(
                "course reference not found: course_id {}",
                record::value_text(course_id)
            ));
        }
    }

    if let Some(resume) = record::text_nonempty(record, "resume") {
        if !validate_url(&resume) {
            result.push_warning(format!("invalid resume URL format: {}", resume));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student(value: serde_json::Value) -> Record {
        value.as_object().unwrap().clone()
    }

    fn valid_student() -> Record {
        student(json!({
            "id": 100,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "course_id": 10,
            "resume": "https://cdn.example.com/resumes/ada.pdf",
            "skills": "mathematics, analysis"
        }))
    }

    fn courses() -> Vec<Record> {
        vec![student(json!({"id": 10})), student(json!({"id": 11}))]
    }

    #[test]
    fn test_valid_student_passes() {
        let result = validate(&valid_student(), Some(&courses()));
        assert!(result.is_valid(), "errors: {:?}", result.errors());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_bad_email_is_hard_error() {
        let mut rec = valid_student();
        rec.insert("email".into(), json!("not-an-email"));
        let result = validate(&rec, Some(&courses()));
        assert!(!result.is_valid());
        assert!(result.errors()[0].contains("invalid email format"));
    }

    #[test]
    fn test_missing_email_is_error() {
        let mut rec = valid_student();
        rec.remove("email");
        let result = validate(&rec, Some(&courses()));
        assert!(result
            .errors()
            .iter()
            .any(|e| e.contains("missing required field 'email'")));
    }

    #[test]
    fn test_short_name_rejected() {
        let mut rec = valid_student();
        rec.insert("name".into(), json!("Al"));
        let result = validate(&rec, Some(&courses()));
        assert!(result.errors().iter().any(|e| e.contains("name too short")));
    }

    #[test]
    fn test_unknown_course_id_is_reference_error() {
        let mut rec = valid_student();
        rec.insert("course_id".into(), json!(999));
        let result = validate(&rec, Some(&courses()));
        assert!(result.errors()[0].contains("course reference not found: course_id 999"));
    }

    #[test]
    fn test_missing_courses_collection_skips_fk_check() {
        let mut rec = valid_student();
        rec.insert("course_id".into(), json!(999));
        assert!(validate(&rec, None).is_valid());
    }

    #[test]
    fn test_bad_resume_url_is_warning() {
        let mut rec = valid_student();
        rec.insert("resume".into(), json!("cdn.example.com/ada.pdf"));
        let result = validate(&rec, Some(&courses()));
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("invalid resume URL format"));
    }

    #[test]
    fn test_idempotent_over_same_input() {
        let rec = valid_student();
        let refs = courses();
        let first = validate(&rec, Some(&refs));
        let second = validate(&rec, Some(&refs));
        assert_eq!(first, second);
    }
}
