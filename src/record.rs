//! Field access helpers for fixture records.
//!
//! A record is one entity instance as parsed from a fixture source: a
//! field-name-to-value mapping where values are strings, integers, or null.
//! Validators only ever read records; nothing here mutates them.

use serde_json::Value;

/// One entity instance: a field-name-to-value mapping.
pub type Record = serde_json::Map<String, Value>;

/// Look up a field, treating JSON null as absent.
pub fn field<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    match record.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// Whether a required field is missing: key absent, JSON null, or a
/// blank/whitespace-only string.
pub fn is_blank(record: &Record, name: &str) -> bool {
    match record.get(name) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Field value rendered as text, for format checks and error messages.
/// Integers render in decimal; absent and null yield `None`.
pub fn text(record: &Record, name: &str) -> Option<String> {
    field(record, name).map(value_text)
}

/// Present-and-nonempty accessor for optional fields. A blank string is
/// treated the same as an absent field.
pub fn text_nonempty(record: &Record, name: &str) -> Option<String> {
    text(record, name).filter(|s| !s.trim().is_empty())
}

/// Render a field value as plain text. Strings lose their JSON quotes;
/// everything else uses its JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether any record in the collection carries `id` equal to the given
/// value. Ids compare as JSON values, so `1` and `"1"` are distinct.
pub fn contains_id(collection: &[Record], id: &Value) -> bool {
    collection.iter().any(|rec| field(rec, "id") == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_field_treats_null_as_absent() {
        let rec = record(json!({"id": null, "name": "Ada"}));
        assert!(field(&rec, "id").is_none());
        assert!(field(&rec, "name").is_some());
        assert!(field(&rec, "missing").is_none());
    }

    #[test]
    fn test_is_blank() {
        let rec = record(json!({"a": "", "b": "   ", "c": "x", "d": 0}));
        assert!(is_blank(&rec, "a"));
        assert!(is_blank(&rec, "b"));
        assert!(is_blank(&rec, "missing"));
        assert!(!is_blank(&rec, "c"));
        assert!(!is_blank(&rec, "d"));
    }

    #[test]
    fn test_text_renders_integers() {
        let rec = record(json!({"id": 42, "name": "Ada"}));
        assert_eq!(text(&rec, "id").as_deref(), Some("42"));
        assert_eq!(text(&rec, "name").as_deref(), Some("Ada"));
    }

    #[test]
    fn test_contains_id_distinguishes_types() {
        let collection = vec![record(json!({"id": 1})), record(json!({"id": "2"}))];
        assert!(contains_id(&collection, &json!(1)));
        assert!(contains_id(&collection, &json!("2")));
        assert!(!contains_id(&collection, &json!("1")));
        assert!(!contains_id(&collection, &json!(3)));
    }
}
