//! Legacy schema 1.0.0 model.
//!
//! Flat sections, RFC3339 timestamps, an explicit `expiration-date`. Every
//! field defaults so a partially filled document still parses and the
//! validator can report each gap individually.

use super::lenient_string;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SecurityInsightsV1 {
    pub header: Header,
    pub project_lifecycle: ProjectLifecycle,
    pub contribution_policy: ContributionPolicy,
    pub security_contacts: Vec<SecurityContact>,
    pub vulnerability_reporting: VulnerabilityReporting,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Header {
    #[serde(deserialize_with = "lenient_string")]
    pub schema_version: String,
    #[serde(deserialize_with = "lenient_string")]
    pub expiration_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_updated: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_reviewed: String,
    #[serde(deserialize_with = "lenient_string")]
    pub project_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectLifecycle {
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    pub bug_fixes_only: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContributionPolicy {
    pub accepts_pull_requests: bool,
    pub accepts_automated_pull_requests: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityContact {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VulnerabilityReporting {
    pub accepts_vulnerability_reports: bool,
}
