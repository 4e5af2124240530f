//! JSON fixture loading.
//!
//! The validation engine itself has no knowledge of file formats; this
//! module parses the on-disk fixture shape into the plain record
//! collections the validators consume.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::record::Record;

/// A parsed fixture file: one collection per entity kind. A missing
/// top-level key yields an empty collection, so partial fixtures load
/// without error.
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default, rename = "Members")]
    pub members: Vec<Record>,
    #[serde(default, rename = "Courses")]
    pub courses: Vec<Record>,
    #[serde(default, rename = "Students")]
    pub students: Vec<Record>,
}

/// Load a fixture from a JSON file with top-level `"Members"`,
/// `"Courses"` and `"Students"` arrays of objects.
///
/// A file that cannot be read or does not match that shape is an error;
/// bad *field data* inside the records is not — that is the validators'
/// territory.
pub fn load_fixture(path: &Path) -> Result<Fixture> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture as JSON: {}", path.display()))
}
