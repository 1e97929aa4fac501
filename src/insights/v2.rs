//! Security Insights schema 2.0.0.
//!
//! This is the authoritative structure of the current schema as published by
//! the OpenSSF Security Insights specification: field names, nesting and
//! types follow the upstream definition. Local code adds no rules here; the
//! checks layered on top live in [`crate::validator`] and reach the document
//! through [`SecurityInsightsDocument`].

use super::{
    lenient_opt_string, lenient_string, lenient_strings, ContactView, SchemaVersion,
    SecurityInsightsDocument,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityInsights {
    pub header: Header,
    pub project: Project,
    pub repository: Repository,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Header {
    pub schema_version: SchemaVersion,
    #[serde(deserialize_with = "lenient_string")]
    pub last_updated: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_reviewed: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub project_si_source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Project {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub homepage: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub funding: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub roadmap: Option<String>,
    pub steward: Option<Link>,
    pub administrators: Vec<Person>,
    pub documentation: Option<Documentation>,
    pub repositories: Vec<ProjectRepository>,
    pub vulnerability_reporting: VulnerabilityReporting,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "lenient_string")]
    pub uri: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub comment: Option<String>,
}

/// An administrator or core-team member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub affiliation: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub social: Option<String>,
    pub primary: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Documentation {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub quickstart_guide: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub detailed_guide: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub code_of_conduct: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub release_process: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub support_policy: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub signature_verification: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectRepository {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VulnerabilityReporting {
    pub reports_accepted: bool,
    pub bug_bounty_available: bool,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub bug_bounty_program: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub security_policy: Option<String>,
    pub contact: Option<Person>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub pgp_key: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub in_scope: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub out_of_scope: Vec<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Repository {
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    pub bug_fixes_only: bool,
    pub accepts_change_request: bool,
    pub accepts_automated_change_request: bool,
    pub no_third_party_packages: bool,
    pub core_team: Vec<Person>,
    pub license: Option<License>,
    pub security: Option<RepositorySecurity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct License {
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub expression: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepositorySecurity {
    pub assessments: Assessments,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Assessments {
    #[serde(rename = "self")]
    pub self_assessment: Option<Assessment>,
    #[serde(rename = "third-party")]
    pub third_party: Vec<Assessment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Assessment {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub evidence: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub comment: Option<String>,
}

impl SecurityInsightsDocument for SecurityInsights {
    fn schema_version(&self) -> &SchemaVersion {
        &self.header.schema_version
    }

    fn header_url(&self) -> &str {
        &self.header.url
    }

    fn last_updated(&self) -> &str {
        &self.header.last_updated
    }

    fn last_reviewed(&self) -> &str {
        &self.header.last_reviewed
    }

    fn project_name(&self) -> &str {
        &self.project.name
    }

    fn administrators(&self) -> Vec<ContactView<'_>> {
        self.project
            .administrators
            .iter()
            .map(|p| ContactView {
                name: &p.name,
                email: &p.email,
            })
            .collect()
    }

    fn repository_url(&self) -> &str {
        &self.repository.url
    }

    fn repository_status(&self) -> &str {
        &self.repository.status
    }
}
