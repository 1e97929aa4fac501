//! Checks for schema 2.x documents.
//!
//! The document is parsed into the authoritative
//! [`SecurityInsights`](crate::insights::v2::SecurityInsights) structure and
//! then inspected only through
//! [`SecurityInsightsDocument`](crate::insights::SecurityInsightsDocument).
//! Schema 2.x has no expiration date, so there is no staleness check.

use super::{unusual_status, ValidationResult};
use crate::insights::v2::SecurityInsights;
use crate::insights::{parse_document, SecurityInsightsDocument};

/// Validates a schema 2.x document.
pub fn validate(data: &[u8]) -> ValidationResult {
    match parse_document::<SecurityInsights>(data) {
        Ok(insights) => validate_document(&insights),
        Err(e) => ValidationResult::fatal(format!("Schema validation failed: {e}")),
    }
}

/// Runs the schema 2.x checks against an already-parsed document.
///
/// A version that does not start with `2.` is rejected on its own; none of
/// the remaining checks run in that case.
pub fn validate_document<D: SecurityInsightsDocument + ?Sized>(doc: &D) -> ValidationResult {
    let version = doc.schema_version();
    if !version.is_v2() {
        return ValidationResult::fatal(format!(
            "Invalid schema version: {version} (expected 2.x.x)"
        ));
    }

    let mut result = ValidationResult::new();

    if doc.last_updated().is_empty() {
        result.warn("Missing recommended field: header.last-updated");
    }
    if doc.last_reviewed().is_empty() {
        result.warn("Missing recommended field: header.last-reviewed");
    }
    if doc.header_url().is_empty() {
        result.error("Missing required field: header.url");
    }

    if doc.project_name().is_empty() {
        result.warn("Missing recommended field: project.name");
    }

    let admins = doc.administrators();
    if admins.is_empty() {
        result.warn("No project administrators specified");
    }
    for (i, admin) in admins.iter().enumerate() {
        if admin.name.is_empty() {
            result.warn(format!("Administrator {i} missing name"));
        }
        if admin.email.is_empty() {
            result.warn(format!("Administrator {i} missing email"));
        }
    }

    if doc.repository_url().is_empty() {
        result.error("Missing required field: repository.url");
    }

    let status = doc.repository_status();
    if status.is_empty() {
        result.error("Missing required field: repository.status");
    } else if let Some(warning) = unusual_status("repository.status", status) {
        result.warn(warning);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{ContactView, SchemaVersion};

    /// A hand-built document standing in for any upstream structure.
    struct Stub {
        version: SchemaVersion,
        admins: Vec<(&'static str, &'static str)>,
        status: &'static str,
    }

    impl SecurityInsightsDocument for Stub {
        fn schema_version(&self) -> &SchemaVersion {
            &self.version
        }
        fn header_url(&self) -> &str {
            "https://example.com"
        }
        fn last_updated(&self) -> &str {
            "2025-01-01"
        }
        fn last_reviewed(&self) -> &str {
            "2025-01-01"
        }
        fn project_name(&self) -> &str {
            "stub"
        }
        fn administrators(&self) -> Vec<ContactView<'_>> {
            self.admins
                .iter()
                .map(|&(name, email)| ContactView { name, email })
                .collect()
        }
        fn repository_url(&self) -> &str {
            "https://example.com/repo"
        }
        fn repository_status(&self) -> &str {
            self.status
        }
    }

    fn stub(version: &str) -> Stub {
        Stub {
            version: SchemaVersion::Text(version.to_string()),
            admins: vec![("Jane", "jane@example.com")],
            status: "active",
        }
    }

    #[test]
    fn complete_stub_is_clean() {
        let r = validate_document(&stub("2.0.0"));
        assert!(r.is_valid);
        assert!(r.warnings.is_empty(), "{:?}", r.warnings);
    }

    #[test]
    fn version_mismatch_short_circuits() {
        let mut doc = stub("1.0.0");
        doc.status = "";
        doc.admins.clear();
        let r = validate_document(&doc);
        assert_eq!(
            r.errors,
            vec!["Invalid schema version: 1.0.0 (expected 2.x.x)".to_string()]
        );
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn admins_are_indexed_from_zero() {
        let mut doc = stub("2.0.0");
        doc.admins = vec![("Jane", ""), ("", "x@example.com")];
        let r = validate_document(&doc);
        assert_eq!(
            r.warnings,
            vec![
                "Administrator 0 missing email".to_string(),
                "Administrator 1 missing name".to_string(),
            ]
        );
    }
}
