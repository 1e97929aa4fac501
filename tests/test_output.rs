use baseline_init::checker::{CheckResult, Checker};
use baseline_init::output::{self, OutputFormat};
use baseline_init::validator::{validate_file, ValidationResult};
use std::path::Path;

const INVALID: &str = "tests/fixtures/insights/invalid/SECURITY-INSIGHTS.yml";
const VALID: &str = "tests/fixtures/insights/v2/SECURITY-INSIGHTS.yml";

fn partial_check() -> CheckResult {
    Checker::new("tests/fixtures/partial-repo").check()
}

fn compliant_check() -> CheckResult {
    Checker::new("tests/fixtures/compliant-repo").check()
}

fn invalid_validation() -> ValidationResult {
    validate_file(Path::new(INVALID)).unwrap()
}

// ---------------------------------------------------------------------------
// Check results
// ---------------------------------------------------------------------------

#[test]
fn json_check_output_is_valid() {
    let json = output::format_check(&partial_check(), OutputFormat::Json).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    assert!(!parsed["is_compliant"].as_bool().unwrap());
    assert_eq!(parsed["files"].as_array().unwrap().len(), 5);
    assert_eq!(parsed["missing_files"][0], "SECURITY-INSIGHTS.yml");
    assert_eq!(parsed["recommendations"][0]["priority"], "high");
    // Empty per-file lists are omitted.
    assert!(parsed["files"][0].get("errors").is_none());
}

#[test]
fn yaml_check_output_parses() {
    let yaml = output::format_check(&compliant_check(), OutputFormat::Yaml).unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("YAML should be valid");
    assert_eq!(parsed["is_compliant"], serde_yaml::Value::Bool(true));
}

#[test]
fn sarif_check_output_is_valid() {
    let sarif = output::format_check(&partial_check(), OutputFormat::Sarif).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&sarif).expect("SARIF should be valid JSON");
    assert_eq!(parsed["version"], "2.1.0");
    let run = &parsed["runs"][0];
    assert_eq!(run["tool"]["driver"]["name"], "baseline-init");
    assert_eq!(run["tool"]["driver"]["rules"].as_array().unwrap().len(), 5);

    let results = run["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["ruleId"], "baseline/missing-security-insights-yml");
    assert_eq!(results[0]["level"], "error");
}

#[test]
fn sarif_compliant_repo_has_no_results() {
    let sarif = output::format_check(&compliant_check(), OutputFormat::Sarif).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();
    let results = parsed["runs"][0]["results"].as_array();
    assert!(results.map_or(true, |r| r.is_empty()));
}

#[test]
fn pretty_check_output_lists_sections() {
    let pretty = output::format_check(&partial_check(), OutputFormat::Pretty).unwrap();
    assert!(pretty.contains("OpenSSF Baseline Compliance Check"));
    assert!(pretty.contains("NOT COMPLIANT"));
    assert!(pretty.contains("Missing Files:"));
    assert!(pretty.contains("Recommendations:"));
    assert!(pretty.contains("Next Steps:"));
}

#[test]
fn pretty_compliant_output_skips_next_steps() {
    let pretty = output::format_check(&compliant_check(), OutputFormat::Pretty).unwrap();
    assert!(pretty.contains("COMPLIANT"));
    assert!(!pretty.contains("NOT COMPLIANT"));
    assert!(!pretty.contains("Next Steps:"));
    assert!(pretty.contains("Location:"));
}

// ---------------------------------------------------------------------------
// Validation results
// ---------------------------------------------------------------------------

#[test]
fn json_validation_output_is_valid() {
    let json =
        output::format_validation(Path::new(INVALID), &invalid_validation(), OutputFormat::Json)
            .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(!parsed["is_valid"].as_bool().unwrap());
    assert!(!parsed["errors"].as_array().unwrap().is_empty());
    assert!(parsed["warnings"].is_array());
}

#[test]
fn sarif_validation_output_locates_file() {
    let validation = invalid_validation();
    let sarif =
        output::format_validation(Path::new(INVALID), &validation, OutputFormat::Sarif).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();

    let results = parsed["runs"][0]["results"].as_array().unwrap();
    assert_eq!(
        results.len(),
        validation.errors.len() + validation.warnings.len()
    );
    assert_eq!(results[0]["ruleId"], "insights/schema-error");
    assert_eq!(
        results[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
        INVALID
    );
}

#[test]
fn pretty_validation_output() {
    let valid = validate_file(Path::new(VALID)).unwrap();
    let pretty = output::format_validation(Path::new(VALID), &valid, OutputFormat::Pretty).unwrap();
    assert!(pretty.contains("is valid"));

    let pretty =
        output::format_validation(Path::new(INVALID), &invalid_validation(), OutputFormat::Pretty)
            .unwrap();
    assert!(pretty.contains("is invalid:"));
    assert!(pretty.contains("Warnings:"));
}
