//! # fixlint - fixture data validation
//!
//! fixlint judges learning-portal test fixture data (members, courses,
//! students) before it is fed into a UI/API/DB test run. It checks
//! structural correctness, field formats, closed enumerations, uniqueness,
//! and cross-entity referential integrity, and reports every problem in
//! one pass instead of failing fast.
//!
//! ## Core Concepts
//!
//! - **Records**: one entity instance as a field-name-to-value mapping;
//!   the engine never cares where the data came from
//! - **Per-record validators**: one rule set per entity kind, usable in
//!   isolation (reference collections are optional)
//! - **Dataset report**: collection-scope rules (duplicate ids, duplicate
//!   student emails, foreign keys) plus one result per entity kind
//!
//! ## Modules
//!
//! - [`record`] - record type and field access helpers
//! - [`result`] - the [`result::ValidationResult`] value type
//! - [`fields`] - pure email/URL/date format validators
//! - [`validators`] - per-entity rule sets
//! - [`dataset`] - whole-dataset orchestration and uniqueness checks
//! - [`loader`] - JSON fixture file loading
//! - [`report`] - colored report rendering
//!
//! ## Example
//!
//! ```
//! use fixlint::dataset::validate_all;
//! use fixlint::record::Record;
//!
//! let members: Vec<Record> = serde_json::from_str(
//!     r#"[{"id": 1, "first_name": "Grace", "last_name": "Hopper",
//!          "designation": "Professor"}]"#,
//! )
//! .unwrap();
//!
//! let report = validate_all(&members, &[], &[]);
//! assert!(report.all_valid());
//! ```

pub mod cli;
pub mod dataset;
pub mod fields;
pub mod loader;
pub mod record;
pub mod report;
pub mod result;
pub mod validators;
