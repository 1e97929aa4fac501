//! Repository compliance check.
//!
//! [`Checker::check`] probes a repository for each [`Artifact`] in
//! [`ARTIFACTS`], records where it was found, and turns every miss into a
//! prioritized [`Recommendation`]. Probes are independent filesystem stats
//! and run in parallel via [rayon]; results keep the table order.
//!
//! ```rust,no_run
//! use baseline_init::checker::Checker;
//!
//! let result = Checker::new(".").check();
//! std::process::exit(if result.is_compliant { 0 } else { 1 });
//! ```

use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

/// Importance of a recommendation, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// A compliance file the checker looks for.
#[derive(Debug)]
pub struct Artifact {
    /// Canonical file name, used in reports.
    pub name: &'static str,
    /// Candidate locations relative to the repository root, in lookup order.
    pub candidates: &'static [&'static str],
    /// Required artifacts make the repository non-compliant when missing.
    pub required: bool,
    pub priority: Priority,
    pub category: &'static str,
    pub action: &'static str,
}

/// Every artifact checked, in report order.
pub const ARTIFACTS: &[Artifact] = &[
    Artifact {
        name: "SECURITY-INSIGHTS.yml",
        candidates: &[
            "SECURITY-INSIGHTS.yml",
            ".github/SECURITY-INSIGHTS.yml",
            "SECURITY-INSIGHTS.yaml",
            ".github/SECURITY-INSIGHTS.yaml",
        ],
        required: true,
        priority: Priority::High,
        category: "Security Metadata",
        action: "Run 'baseline-init setup --auto' to generate this file",
    },
    Artifact {
        name: "SECURITY.md",
        candidates: &["SECURITY.md", ".github/SECURITY.md", "docs/SECURITY.md"],
        required: true,
        priority: Priority::Medium,
        category: "Security Policy",
        action: "Create a SECURITY.md file documenting your security policy",
    },
    Artifact {
        name: "LICENSE",
        candidates: &["LICENSE", "LICENSE.md", "LICENSE.txt", "COPYING"],
        required: true,
        priority: Priority::High,
        category: "Legal",
        action: "Add an appropriate open source license to your repository",
    },
    Artifact {
        name: "CODE_OF_CONDUCT.md",
        candidates: &[
            "CODE_OF_CONDUCT.md",
            ".github/CODE_OF_CONDUCT.md",
            "docs/CODE_OF_CONDUCT.md",
        ],
        required: false,
        priority: Priority::Medium,
        category: "Community",
        action: "Consider adding a code of conduct for contributors",
    },
    Artifact {
        name: "CONTRIBUTING.md",
        candidates: &[
            "CONTRIBUTING.md",
            ".github/CONTRIBUTING.md",
            "docs/CONTRIBUTING.md",
        ],
        required: false,
        priority: Priority::Low,
        category: "Community",
        action: "Consider adding contribution guidelines",
    },
];

/// Presence status of one artifact.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileCheck {
    pub name: String,
    /// Location where the file was found; empty when missing.
    pub path: String,
    pub exists: bool,
    /// Mirrors `exists`; the file contents are not validated here.
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Actionable guidance for a missing artifact.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub description: String,
    pub action: String,
}

/// Result of checking one repository.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckResult {
    pub path: String,
    pub is_compliant: bool,
    pub files: Vec<FileCheck>,
    pub missing_files: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl CheckResult {
    /// Recommendations with the given priority, in report order.
    pub fn recommendations_with(&self, priority: Priority) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.priority == priority)
    }
}

/// Checks a repository for OpenSSF baseline compliance files.
pub struct Checker {
    repo_path: PathBuf,
}

impl Checker {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Checker {
            repo_path: repo_path.into(),
        }
    }

    /// Runs the compliance check.
    ///
    /// # Pipeline
    ///
    /// 1. Probes every artifact's candidate paths **in parallel**.
    /// 2. Records a [`FileCheck`] per artifact, in [`ARTIFACTS`] order.
    /// 3. Adds missing required artifacts to `missing_files`.
    /// 4. Adds a [`Recommendation`] for every missing artifact.
    pub fn check(&self) -> CheckResult {
        let files: Vec<FileCheck> = ARTIFACTS
            .par_iter()
            .map(|artifact| probe(&self.repo_path, artifact))
            .collect();

        let mut missing_files = Vec::new();
        let mut recommendations = Vec::new();

        for (artifact, file) in ARTIFACTS.iter().zip(&files) {
            if file.exists {
                continue;
            }
            if artifact.required {
                missing_files.push(artifact.name.to_string());
            }
            recommendations.push(Recommendation {
                priority: artifact.priority,
                category: artifact.category.to_string(),
                description: format!("{} file is missing", artifact.name),
                action: artifact.action.to_string(),
            });
        }

        CheckResult {
            path: self.repo_path.display().to_string(),
            is_compliant: missing_files.is_empty(),
            files,
            missing_files,
            recommendations,
        }
    }
}

/// Returns the first existing candidate for `artifact`.
fn probe(repo: &Path, artifact: &Artifact) -> FileCheck {
    let found = artifact
        .candidates
        .iter()
        .map(|candidate| repo.join(candidate))
        .find(|path| path.exists());

    tracing::debug!(
        artifact = artifact.name,
        found = ?found,
        "probed compliance artifact"
    );

    match found {
        Some(path) => FileCheck {
            name: artifact.name.to_string(),
            path: path.display().to_string(),
            exists: true,
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        },
        None => FileCheck {
            name: artifact.name.to_string(),
            path: String::new(),
            exists: false,
            valid: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        },
    }
}
