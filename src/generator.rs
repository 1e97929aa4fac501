//! Generation of default compliance files.
//!
//! [`Generator`] writes `SECURITY-INSIGHTS.yml` (schema 2.0.0) and
//! `SECURITY.md` into a repository from a [`ProjectConfig`]. Existing files
//! are left alone unless the generator was created with `force`.
//!
//! The renderers are plain functions so the produced text can be inspected or
//! validated without touching the filesystem:
//!
//! ```rust
//! use baseline_init::config::ProjectConfig;
//! use baseline_init::generator::render_security_insights;
//! use baseline_init::validator::validate_security_insights;
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let yaml = render_security_insights(&ProjectConfig::default(), today).unwrap();
//! assert!(validate_security_insights(yaml.as_bytes()).is_valid);
//! ```

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const SECURITY_INSIGHTS_FILE: &str = "SECURITY-INSIGHTS.yml";
pub const SECURITY_POLICY_FILE: &str = "SECURITY.md";

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    Written,
    /// The file already existed and `force` was not set.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub path: PathBuf,
    pub outcome: GenerationOutcome,
}

pub struct Generator {
    repo_path: PathBuf,
    force: bool,
}

impl Generator {
    pub fn new(repo_path: impl Into<PathBuf>, force: bool) -> Self {
        Generator {
            repo_path: repo_path.into(),
            force,
        }
    }

    /// Generates both files from [`ProjectConfig::default`].
    pub fn generate_defaults(&self) -> Result<Vec<GeneratedFile>> {
        self.generate_with_config(&ProjectConfig::default())
    }

    /// Generates both files from `config`.
    ///
    /// Ensures a `.github/` directory exists, then writes each file at the
    /// repository root. An empty project name is replaced by the repository
    /// directory name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when a directory or file cannot be written.
    pub fn generate_with_config(&self, config: &ProjectConfig) -> Result<Vec<GeneratedFile>> {
        let config = config.clone().with_repo_defaults(&self.repo_path);

        let github_dir = self.repo_path.join(".github");
        std::fs::create_dir_all(&github_dir).map_err(|source| Error::Write {
            path: github_dir.clone(),
            source,
        })?;

        let today = chrono::Local::now().date_naive();
        let insights = render_security_insights(&config, today)?;
        let policy = render_security_policy(&config);

        Ok(vec![
            self.write_file(SECURITY_INSIGHTS_FILE, &insights)?,
            self.write_file(SECURITY_POLICY_FILE, &policy)?,
        ])
    }

    fn write_file(&self, name: &'static str, content: &str) -> Result<GeneratedFile> {
        let path = self.repo_path.join(name);
        if path.exists() && !self.force {
            tracing::debug!(file = name, "keeping existing file");
            return Ok(GeneratedFile {
                name,
                path,
                outcome: GenerationOutcome::Skipped,
            });
        }

        std::fs::write(&path, content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(file = name, path = %path.display(), "wrote file");
        Ok(GeneratedFile {
            name,
            path,
            outcome: GenerationOutcome::Written,
        })
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct InsightsDoc<'a> {
    header: HeaderDoc<'a>,
    project: ProjectDoc<'a>,
    repository: RepositoryDoc<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct HeaderDoc<'a> {
    schema_version: &'static str,
    last_updated: &'a str,
    last_reviewed: &'a str,
    url: &'a str,
    comment: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct ProjectDoc<'a> {
    name: &'a str,
    administrators: Vec<PersonDoc<'a>>,
    vulnerability_reporting: ReportingDoc,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct ReportingDoc {
    reports_accepted: bool,
    bug_bounty_available: bool,
}

#[derive(Debug, Clone, Serialize)]
struct PersonDoc<'a> {
    name: &'a str,
    affiliation: &'static str,
    email: &'a str,
    social: String,
    primary: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct RepositoryDoc<'a> {
    url: &'a str,
    status: &'a str,
    bug_fixes_only: bool,
    accepts_change_request: bool,
    accepts_automated_change_request: bool,
    core_team: Vec<PersonDoc<'a>>,
    license: LicenseDoc,
    security: SecurityDoc,
}

#[derive(Serialize)]
struct LicenseDoc {
    url: String,
    expression: &'static str,
}

#[derive(Serialize)]
struct SecurityDoc {
    assessments: AssessmentsDoc,
}

#[derive(Serialize)]
struct AssessmentsDoc {
    #[serde(rename = "self")]
    self_assessment: AssessmentDoc,
}

#[derive(Serialize)]
struct AssessmentDoc {
    comment: &'static str,
}

/// Renders a schema 2.0.0 `SECURITY-INSIGHTS.yml`.
///
/// `today` is written to both `last-updated` and `last-reviewed`. Config
/// values go through the YAML serializer, so any text reads back unchanged.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if the document cannot be serialized.
pub fn render_security_insights(config: &ProjectConfig, today: NaiveDate) -> Result<String> {
    let date = today.format("%Y-%m-%d").to_string();
    let url = config.project_url.trim_end_matches('/');
    let name = if config.project_name.is_empty() {
        "project"
    } else {
        config.project_name.as_str()
    };
    let team = people(&config.maintainers, &config.security_email);

    let doc = InsightsDoc {
        header: HeaderDoc {
            schema_version: "2.0.0",
            last_updated: &date,
            last_reviewed: &date,
            url,
            comment: "This file provides security insights for the project.\n",
        },
        project: ProjectDoc {
            name,
            administrators: team.clone(),
            vulnerability_reporting: ReportingDoc {
                reports_accepted: config.accepts_vuln_reports,
                bug_bounty_available: false,
            },
        },
        repository: RepositoryDoc {
            url,
            status: &config.project_stage,
            bug_fixes_only: config.bug_fixes_only,
            accepts_change_request: config.accepts_pull_requests,
            accepts_automated_change_request: config.accepts_automated_pr,
            core_team: team,
            license: LicenseDoc {
                url: format!("{url}/blob/main/LICENSE"),
                expression: "Apache-2.0",
            },
            security: SecurityDoc {
                assessments: AssessmentsDoc {
                    self_assessment: AssessmentDoc {
                        comment: "Self assessment has not yet been completed.\n",
                    },
                },
            },
        },
    };
    let body = serde_yaml::to_string(&doc).map_err(|e| Error::Serialize(e.to_string()))?;

    let mut out = String::new();
    out.push_str("# OpenSSF Security Insights\n");
    out.push_str("# Schema version 2.0.0\n");
    out.push_str("# For more information, see: https://github.com/ossf/security-insights-spec\n\n");
    out.push_str(&body);

    // The 2.x schema has no field for these.
    if !config.distribution_points.is_empty() {
        out.push_str("\n# Distribution points\n");
        for point in &config.distribution_points {
            out.push_str(&format!("#   - {}\n", point.replace(['\n', '\r'], " ")));
        }
    }

    Ok(out)
}

/// Administrators / core team from maintainer handles.
///
/// `github:` prefixes are stripped; the first maintainer is primary. An
/// empty list yields a single placeholder entry.
fn people<'a>(maintainers: &'a [String], email: &'a str) -> Vec<PersonDoc<'a>> {
    if maintainers.is_empty() {
        return vec![PersonDoc {
            name: "Maintainer",
            affiliation: "Organization",
            email,
            social: "https://github.com/maintainer".to_string(),
            primary: true,
        }];
    }

    maintainers
        .iter()
        .enumerate()
        .map(|(i, handle)| {
            let username = handle.strip_prefix("github:").unwrap_or(handle.as_str());
            PersonDoc {
                name: username,
                affiliation: "Organization",
                email,
                social: format!("https://github.com/{username}"),
                primary: i == 0,
            }
        })
        .collect()
}

/// Renders the human-readable `SECURITY.md` policy.
pub fn render_security_policy(config: &ProjectConfig) -> String {
    format!(
        "# Security Policy

## Supported Versions

We release patches for security vulnerabilities. Which versions are eligible for
receiving such patches depends on the CVSS v3.0 Rating:

| Version | Supported          |
| ------- | ------------------ |
| 1.0.x   | :white_check_mark: |

## Reporting a Vulnerability

Please report security vulnerabilities to: {email}

We will acknowledge your email within 48 hours, and will send a more detailed response
within 7 days indicating the next steps in handling your report.

After the initial reply to your report, we will endeavor to keep you informed of the
progress being made towards a fix and full announcement.

## Disclosure Policy

When we receive a security bug report, we will:

1. Confirm the problem and determine the affected versions.
2. Audit code to find any potential similar problems.
3. Prepare fixes for all releases still under maintenance.

## Comments on this Policy

If you have suggestions on how this process could be improved, please submit a pull
request or open an issue.
",
        email = config.security_email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn people_strip_github_prefix_and_mark_first_primary() {
        let maintainers = ["github:alice".to_string(), "bob".to_string()];
        let people = people(&maintainers, "sec@example.com");
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "alice");
        assert_eq!(people[1].name, "bob");
        assert_eq!(people[0].social, "https://github.com/alice");
        assert!(people[0].primary);
        assert!(!people[1].primary);
    }

    #[test]
    fn empty_maintainers_get_placeholder() {
        let none: Vec<String> = Vec::new();
        let people = people(&none, "sec@example.com");
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Maintainer");
        assert_eq!(people[0].email, "sec@example.com");
    }

    #[test]
    fn distribution_points_stay_single_line_comments() {
        let config = ProjectConfig {
            distribution_points: vec!["https://a.dev\nkey: injected".to_string()],
            ..ProjectConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let yaml = render_security_insights(&config, today).unwrap();
        assert!(yaml.contains("#   - https://a.dev key: injected\n"));
        assert!(!yaml.lines().any(|l| l.starts_with("key:")));
    }
}
