use std::path::Path;

use baseline_init::checker::{Checker, Priority, ARTIFACTS};

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "x").unwrap();
}

// ---------------------------------------------------------------------------
// Empty repository
// ---------------------------------------------------------------------------

#[test]
fn empty_repo_is_not_compliant() {
    let dir = tempfile::tempdir().unwrap();
    let result = Checker::new(dir.path()).check();

    assert!(!result.is_compliant);
    assert_eq!(
        result.missing_files,
        vec!["SECURITY-INSIGHTS.yml", "SECURITY.md", "LICENSE"]
    );
    assert_eq!(result.recommendations.len(), 5);
    assert!(result.files.iter().all(|f| !f.exists && !f.valid && f.path.is_empty()));
}

#[test]
fn files_are_reported_in_table_order() {
    let dir = tempfile::tempdir().unwrap();
    let result = Checker::new(dir.path()).check();
    let names: Vec<_> = result.files.iter().map(|f| f.name.as_str()).collect();
    let expected: Vec<_> = ARTIFACTS.iter().map(|a| a.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn recommendations_carry_priority_and_category() {
    let dir = tempfile::tempdir().unwrap();
    let result = Checker::new(dir.path()).check();

    let insights = &result.recommendations[0];
    assert_eq!(insights.priority, Priority::High);
    assert_eq!(insights.category, "Security Metadata");
    assert_eq!(insights.description, "SECURITY-INSIGHTS.yml file is missing");
    assert!(insights.action.contains("setup --auto"));

    let contributing = result
        .recommendations
        .iter()
        .find(|r| r.description.starts_with("CONTRIBUTING.md"))
        .unwrap();
    assert_eq!(contributing.priority, Priority::Low);
    assert_eq!(contributing.category, "Community");
}

// ---------------------------------------------------------------------------
// Candidate locations
// ---------------------------------------------------------------------------

#[test]
fn required_files_in_alternate_locations_are_found() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), ".github/SECURITY-INSIGHTS.yaml");
    touch(dir.path(), "docs/SECURITY.md");
    touch(dir.path(), "COPYING");

    let result = Checker::new(dir.path()).check();
    assert!(result.is_compliant, "{:?}", result.missing_files);
    assert!(result.missing_files.is_empty());
    // Only the two optional community files remain as recommendations.
    assert_eq!(result.recommendations.len(), 2);
    assert!(result.files[0].path.ends_with("SECURITY-INSIGHTS.yaml"));
}

#[test]
fn optional_files_do_not_affect_compliance() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "SECURITY-INSIGHTS.yml");
    touch(dir.path(), "SECURITY.md");
    touch(dir.path(), "LICENSE.md");

    let result = Checker::new(dir.path()).check();
    assert!(result.is_compliant);
    assert_eq!(
        result
            .recommendations
            .iter()
            .filter(|r| r.category == "Community")
            .count(),
        2
    );
}

#[test]
fn existing_file_is_marked_valid_without_validation() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("SECURITY-INSIGHTS.yml"), "not: valid: yaml:").unwrap();

    let result = Checker::new(dir.path()).check();
    let insights = &result.files[0];
    assert!(insights.exists);
    assert!(insights.valid);
    assert!(insights.errors.is_empty());
}

#[test]
fn fixture_repos() {
    let compliant = Checker::new("tests/fixtures/compliant-repo").check();
    assert!(compliant.is_compliant);
    assert!(compliant.files[0].path.contains(".github"));

    let partial = Checker::new("tests/fixtures/partial-repo").check();
    assert!(!partial.is_compliant);
    assert_eq!(partial.missing_files, vec!["SECURITY-INSIGHTS.yml", "SECURITY.md"]);
    let coc = partial
        .files
        .iter()
        .find(|f| f.name == "CODE_OF_CONDUCT.md")
        .unwrap();
    assert!(coc.exists);
}

#[test]
fn recommendations_with_filters_by_priority() {
    let dir = tempfile::tempdir().unwrap();
    let result = Checker::new(dir.path()).check();
    assert_eq!(result.recommendations_with(Priority::High).count(), 2);
    assert_eq!(result.recommendations_with(Priority::Medium).count(), 2);
    assert_eq!(result.recommendations_with(Priority::Low).count(), 1);
    assert_eq!(result.recommendations_with(Priority::Critical).count(), 0);
}
