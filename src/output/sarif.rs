//! SARIF 2.1.0 formatter.
//!
//! Missing artifacts and validation findings become SARIF results so that
//! code-scanning dashboards can track baseline compliance alongside other
//! tools.

use crate::checker::{CheckResult, Priority, ARTIFACTS};
use crate::error::{Error, Result};
use crate::validator::ValidationResult;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::path::Path;

const TOOL_NAME: &str = "baseline-init";
const RULE_SCHEMA_ERROR: &str = "insights/schema-error";
const RULE_SCHEMA_WARNING: &str = "insights/schema-warning";

/// Rule id for a missing artifact, e.g. `baseline/missing-security-md`.
pub fn missing_rule_id(artifact: &str) -> String {
    let slug: String = artifact
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("baseline/missing-{slug}")
}

fn level_for(priority: Priority) -> ResultLevel {
    match priority {
        Priority::Critical | Priority::High => ResultLevel::Error,
        Priority::Medium => ResultLevel::Warning,
        Priority::Low => ResultLevel::Note,
    }
}

fn rule(id: String, text: &str, help: Option<&str>) -> ReportingDescriptor {
    let mut rule = ReportingDescriptor::builder().id(id).build();
    rule.short_description = Some(
        MultiformatMessageString::builder()
            .text(text.to_string())
            .build(),
    );
    if let Some(help) = help {
        rule.help = Some(
            MultiformatMessageString::builder()
                .text(help.to_string())
                .build(),
        );
    }
    rule
}

fn result(
    rule_id: &str,
    rule_index: i64,
    level: ResultLevel,
    text: &str,
    uri: Option<String>,
) -> SarifResult {
    let mut result = SarifResult::builder()
        .message(Message::builder().text(text.to_string()).build())
        .build();
    result.rule_id = Some(rule_id.to_string());
    result.rule_index = Some(rule_index);
    result.level = Some(level);

    if let Some(uri) = uri {
        let mut location = Location::builder().build();
        let mut physical = PhysicalLocation::builder().build();
        physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
        location.physical_location = Some(physical);
        result.locations = Some(vec![location]);
    }

    result
}

fn render(rules: Vec<ReportingDescriptor>, results: Vec<SarifResult>) -> Result<String> {
    let driver = ToolComponent::builder()
        .name(TOOL_NAME)
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();
    let tool = Tool::builder().driver(driver).build();
    let run = Run::builder().tool(tool).results(results).build();
    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).map_err(|e| Error::Serialize(e.to_string()))
}

/// One rule per known artifact; one result per recommendation.
pub fn format_check(check: &CheckResult) -> Result<String> {
    let rules: Vec<ReportingDescriptor> = ARTIFACTS
        .iter()
        .map(|a| {
            rule(
                missing_rule_id(a.name),
                &format!("{} file is missing", a.name),
                Some(a.action),
            )
        })
        .collect();

    let results: Vec<SarifResult> = ARTIFACTS
        .iter()
        .enumerate()
        .filter_map(|(index, artifact)| {
            let description = format!("{} file is missing", artifact.name);
            check
                .recommendations
                .iter()
                .find(|r| r.description == description)
                .map(|rec| {
                    result(
                        &missing_rule_id(artifact.name),
                        index as i64,
                        level_for(rec.priority),
                        &format!("{} {}", rec.description, rec.action),
                        Some(artifact.name.to_string()),
                    )
                })
        })
        .collect();

    render(rules, results)
}

/// Errors map to `error` results, warnings to `warning` results, all located
/// at `path`.
pub fn format_validation(path: &Path, validation: &ValidationResult) -> Result<String> {
    let rules = vec![
        rule(
            RULE_SCHEMA_ERROR.to_string(),
            "SECURITY-INSIGHTS.yml violates its schema",
            Some("Add or correct the reported field"),
        ),
        rule(
            RULE_SCHEMA_WARNING.to_string(),
            "SECURITY-INSIGHTS.yml has a recommended field missing or a stale value",
            None,
        ),
    ];

    let uri = path.to_string_lossy().replace('\\', "/");
    let errors = validation
        .errors
        .iter()
        .map(|e| result(RULE_SCHEMA_ERROR, 0, ResultLevel::Error, e, Some(uri.clone())));
    let warnings = validation
        .warnings
        .iter()
        .map(|w| result(RULE_SCHEMA_WARNING, 1, ResultLevel::Warning, w, Some(uri.clone())));

    render(rules, errors.chain(warnings).collect())
}
