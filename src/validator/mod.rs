//! Schema-version-aware validation of `SECURITY-INSIGHTS.yml`.
//!
//! # Pipeline
//!
//! 1. **Route**: [`detect_family`] reads only `header.schema-version` and
//!    picks a [`SchemaFamily`]. A document that is not well-formed YAML stops
//!    here with a single error.
//! 2. **Validate**: [`v1::validate`] or [`v2::validate`] parses the full
//!    document for that family and runs its field checks.
//!
//! Findings are split into *errors* (the file is non-compliant) and
//! *warnings* (style or staleness issues). Only errors affect
//! [`ValidationResult::is_valid`]. Expected conditions never surface as
//! `Err`; only I/O and unsupported file types do, via [`validate_file`].
//!
//! ```rust
//! use baseline_init::validator;
//!
//! let yaml = b"header:\n  schema-version: 2.0.0\n  url: https://example.com\n\
//! repository:\n  url: https://example.com/repo\n  status: active\n";
//! let result = validator::validate_security_insights(yaml);
//! assert!(result.is_valid);
//! ```

pub mod v1;
pub mod v2;

use crate::error::{Error, Result};
use crate::insights::{parse_document, SchemaVersion};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Lifecycle statuses recognised by both schema revisions.
pub const KNOWN_STATUSES: &[&str] = &["active", "archived", "concept", "moved", "wip"];

/// Outcome of validating one document.
///
/// `is_valid` is always equal to `errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn new() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A result carrying a single fatal error and nothing else.
    fn fatal(message: String) -> Self {
        let mut result = ValidationResult::new();
        result.error(message);
        result
    }

    fn error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// `true` when the result should fail under strict mode, i.e. it carries
    /// errors or warnings.
    pub fn fails_strict(&self) -> bool {
        !self.is_valid || !self.warnings.is_empty()
    }
}

/// Which schema revision a document is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFamily {
    V1,
    V2,
}

impl fmt::Display for SchemaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaFamily::V1 => write!(f, "1.x"),
            SchemaFamily::V2 => write!(f, "2.x"),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct VersionProbe {
    header: HeaderProbe,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct HeaderProbe {
    #[serde(rename = "schema-version")]
    schema_version: SchemaVersion,
}

/// Decides the schema family from `header.schema-version` alone.
///
/// Nothing else in the document has to conform to either schema. A version
/// whose canonical rendering starts with `"2."` selects [`SchemaFamily::V2`];
/// everything else, including a missing version, selects
/// [`SchemaFamily::V1`].
///
/// # Errors
///
/// Returns the YAML error when the bytes are not a well-formed document.
pub fn detect_family(data: &[u8]) -> std::result::Result<SchemaFamily, serde_yaml::Error> {
    let probe: VersionProbe = parse_document(data)?;
    let family = if probe.header.schema_version.is_v2() {
        SchemaFamily::V2
    } else {
        SchemaFamily::V1
    };
    tracing::debug!(
        version = %probe.header.schema_version,
        %family,
        "routed security insights document"
    );
    Ok(family)
}

/// Validates a `SECURITY-INSIGHTS.yml` document held in memory.
///
/// Staleness checks compare against the current UTC time; use
/// [`validate_security_insights_at`] to pin the clock.
pub fn validate_security_insights(data: &[u8]) -> ValidationResult {
    validate_security_insights_at(data, Utc::now())
}

/// Same as [`validate_security_insights`] with an explicit "now".
pub fn validate_security_insights_at(data: &[u8], now: DateTime<Utc>) -> ValidationResult {
    match detect_family(data) {
        Ok(SchemaFamily::V2) => v2::validate(data),
        Ok(SchemaFamily::V1) => v1::validate(data, now),
        Err(e) => ValidationResult::fatal(format!("Invalid YAML: {e}")),
    }
}

/// Reads and validates a compliance file.
///
/// The file type is inferred from its path: any path containing
/// `security-insights` (case-insensitive) is validated as Security Insights.
///
/// # Errors
///
/// - [`Error::Read`] when the file cannot be read.
/// - [`Error::UnknownFileType`] for any other file.
pub fn validate_file(path: &Path) -> Result<ValidationResult> {
    let data = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lowered = path.to_string_lossy().to_lowercase();
    if lowered.contains("security-insights") {
        Ok(validate_security_insights(&data))
    } else {
        Err(Error::UnknownFileType(path.display().to_string()))
    }
}

/// Shared status-set check; returns the warning text for an unusual value.
fn unusual_status(field: &str, status: &str) -> Option<String> {
    if KNOWN_STATUSES.contains(&status) {
        None
    } else {
        Some(format!(
            "Unusual {field}: {status} (expected one of: {})",
            KNOWN_STATUSES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_v2_routes_to_v2() {
        let family = detect_family(b"header:\n  schema-version: 2.0.0\n").unwrap();
        assert_eq!(family, SchemaFamily::V2);
    }

    #[test]
    fn numeric_v2_routes_to_v2() {
        let family = detect_family(b"header:\n  schema-version: 2.5\n").unwrap();
        assert_eq!(family, SchemaFamily::V2);
    }

    #[test]
    fn everything_else_routes_to_v1() {
        for doc in [
            "header:\n  schema-version: 1.0.0\n",
            "header:\n  schema-version: ''\n",
            "header:\n  project-url: x\n",
            "project: {}\n",
            "header:\n  schema-version: '20.1'\n",
            "header:\n  schema-version: 2\n",
            "",
        ] {
            assert_eq!(
                detect_family(doc.as_bytes()).unwrap(),
                SchemaFamily::V1,
                "{doc:?}"
            );
        }
    }

    #[test]
    fn malformed_yaml_fails_routing() {
        assert!(detect_family(b"this is not: valid: yaml:").is_err());
    }

    #[test]
    fn router_ignores_fields_it_does_not_read() {
        // project-lifecycle is a list here, which neither schema allows.
        let doc = b"header:\n  schema-version: 2.0.0\nproject-lifecycle: [1, 2]\n";
        assert_eq!(detect_family(doc).unwrap(), SchemaFamily::V2);
    }

    #[test]
    fn unusual_status_lists_expected_values() {
        assert!(unusual_status("repository.status", "active").is_none());
        let msg = unusual_status("repository.status", "retired").unwrap();
        assert!(msg.contains("retired"));
        assert!(msg.contains("active, archived, concept, moved, wip"));
    }

    #[test]
    fn fatal_result_is_invalid_with_one_error() {
        let r = ValidationResult::fatal("boom".into());
        assert!(!r.is_valid);
        assert_eq!(r.errors, vec!["boom".to_string()]);
        assert!(r.warnings.is_empty());
    }
}
