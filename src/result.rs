//! Validation outcome value type.

use std::fmt;

/// Outcome of validating one record or one collection.
///
/// Warnings never affect validity: a result is valid exactly when its error
/// list is empty, so the `is_valid == errors.is_empty()` invariant holds
/// structurally rather than by bookkeeping. Results are built up during a
/// single validation call and treated as immutable values afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// An empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Valid iff no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rule violations, in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Non-blocking notices, in the order the checks ran.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub(crate) fn push_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub(crate) fn push_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Concatenate two results, preserving order within each list.
    pub fn merge(mut self, other: ValidationResult) -> ValidationResult {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    /// The same result with every message prefixed, e.g. `Member[3]: ...`.
    /// Used by the dataset orchestrator to tag per-record messages with the
    /// record's position in its collection.
    pub fn prefixed(self, prefix: &str) -> ValidationResult {
        ValidationResult {
            errors: self
                .errors
                .into_iter()
                .map(|msg| format!("{}: {}", prefix, msg))
                .collect(),
            warnings: self
                .warnings
                .into_iter()
                .map(|msg| format!("{}: {}", prefix, msg))
                .collect(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", if self.is_valid() { "PASS" } else { "FAIL" })?;
        if !self.errors.is_empty() {
            writeln!(f, "Errors ({}):", self.errors.len())?;
            for err in &self.errors {
                writeln!(f, "  - {}", err)?;
            }
        }
        if !self.warnings.is_empty() {
            writeln!(f, "Warnings ({}):", self.warnings.len())?;
            for warn in &self.warnings {
                writeln!(f, "  - {}", warn)?;
            }
        }
        Ok(())
    }
}
