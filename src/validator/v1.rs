//! Checks for legacy schema 1.0.0 documents.
//!
//! Every failing check is recorded and checking continues, so a single run
//! reports all problems at once.

use super::{unusual_status, ValidationResult};
use crate::insights::parse_document;
use crate::insights::v1::SecurityInsightsV1;
use chrono::{DateTime, Utc};

/// Validates a schema 1.x document.
///
/// `now` is the reference time for the `expiration-date` staleness check.
pub fn validate(data: &[u8], now: DateTime<Utc>) -> ValidationResult {
    let si: SecurityInsightsV1 = match parse_document(data) {
        Ok(si) => si,
        Err(e) => return ValidationResult::fatal(format!("Invalid YAML: {e}")),
    };

    let mut result = ValidationResult::new();

    if si.header.schema_version.is_empty() {
        result.error("Missing required field: header.schema-version");
    }

    if si.header.project_url.is_empty() {
        result.error("Missing required field: header.project-url");
    }

    check_expiration(&mut result, &si.header.expiration_date, now);

    if si.header.last_updated.is_empty() {
        result.warn("Missing recommended field: header.last-updated");
    }
    if si.header.last_reviewed.is_empty() {
        result.warn("Missing recommended field: header.last-reviewed");
    }

    let status = si.project_lifecycle.status.as_str();
    if status.is_empty() {
        result.error("Missing required field: project-lifecycle.status");
    } else if let Some(warning) = unusual_status("project-lifecycle.status", status) {
        result.warn(warning);
    }

    if si.security_contacts.is_empty() {
        result.warn("No security-contacts specified");
    } else {
        for (i, contact) in si.security_contacts.iter().enumerate() {
            if contact.kind.is_empty() {
                result.warn(format!("Security contact {i} missing type"));
            }
            if contact.value.is_empty() {
                result.warn(format!("Security contact {i} missing value"));
            }
        }
    }

    result
}

/// `expiration-date` is required; a malformed or past value is only a
/// warning.
fn check_expiration(result: &mut ValidationResult, raw: &str, now: DateTime<Utc>) {
    if raw.is_empty() {
        result.error("Missing required field: header.expiration-date");
        return;
    }

    match DateTime::parse_from_rfc3339(raw) {
        Err(_) => result.warn("Invalid expiration-date format (should be RFC3339)"),
        Ok(expires) if expires < now => {
            result.warn("File has expired - please update expiration-date");
        }
        Ok(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn check(raw: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_expiration(&mut result, raw, fixed_now());
        result
    }

    #[test]
    fn future_expiration_is_clean() {
        let r = check("2025-06-01T12:00:01Z");
        assert!(r.is_valid);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn past_expiration_warns() {
        let r = check("2025-06-01T11:59:59Z");
        assert!(r.is_valid);
        assert_eq!(r.warnings.len(), 1);
        assert!(r.warnings[0].contains("expired"));
    }

    #[test]
    fn expiration_exactly_now_is_not_expired() {
        let r = check("2025-06-01T12:00:00Z");
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn offset_timestamps_compare_in_utc() {
        // 13:30+02:00 is 11:30Z, before the reference time.
        let r = check("2025-06-01T13:30:00+02:00");
        assert!(r.warnings.iter().any(|w| w.contains("expired")));
    }

    #[test]
    fn date_only_expiration_is_a_format_warning() {
        let r = check("2026-12-31");
        assert!(r.is_valid);
        assert_eq!(
            r.warnings,
            vec!["Invalid expiration-date format (should be RFC3339)".to_string()]
        );
    }

    #[test]
    fn empty_expiration_is_an_error() {
        let r = check("");
        assert!(!r.is_valid);
        assert_eq!(r.errors.len(), 1);
    }
}
