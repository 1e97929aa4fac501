//! Configuration loading.
//!
//! The optional `baseline-init.toml` file supplies the defaults used when
//! generating compliance files and toggles strict validation.
//!
//! ```toml
//! [project]
//! project_url = "https://github.com/acme/widget"
//! security_email = "security@acme.dev"
//! maintainers = ["github:alice", "github:bob"]
//!
//! [strict]
//! enabled = true
//! ```
//!
//! ```rust,no_run
//! use baseline_init::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! println!("{}", config.project.security_email);
//! ```

use crate::error::{Error, Result};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "baseline-init.toml";

/// Main configuration.
///
/// All sections carry defaults so the file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Values substituted into generated files.
    pub project: ProjectConfig,
    /// When strict mode is enabled, validation warnings fail the run.
    pub strict: StrictConfig,
}

/// Strict-mode configuration.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

/// Project facts used to render `SECURITY-INSIGHTS.yml` and `SECURITY.md`.
///
/// Produced from defaults, the config file, or the interactive prompts.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub project_url: String,
    /// Empty means "use the repository directory name".
    pub project_name: String,
    pub security_email: String,
    pub accepts_vuln_reports: bool,
    pub accepts_pull_requests: bool,
    pub accepts_automated_pr: bool,
    /// Lifecycle status written to `repository.status`.
    pub project_stage: String,
    pub bug_fixes_only: bool,
    /// Maintainer handles, conventionally `github:<username>`.
    pub maintainers: Vec<String>,
    pub distribution_points: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            project_url: "https://github.com/example/repo".to_string(),
            project_name: String::new(),
            security_email: "security@example.com".to_string(),
            accepts_vuln_reports: true,
            accepts_pull_requests: true,
            accepts_automated_pr: true,
            project_stage: "active".to_string(),
            bug_fixes_only: false,
            maintainers: vec!["github:maintainer".to_string()],
            distribution_points: Vec::new(),
        }
    }
}

impl ProjectConfig {
    /// Fills in the project name from the repository directory when unset.
    pub fn with_repo_defaults(mut self, repo_path: &Path) -> Self {
        if self.project_name.trim().is_empty() {
            self.project_name = repo_dir_name(repo_path);
        }
        self
    }
}

/// Last path component of `repo_path`, resolving `.` through the working
/// directory. Falls back to `"project"`.
pub fn repo_dir_name(repo_path: &Path) -> String {
    let resolved = std::fs::canonicalize(repo_path).unwrap_or_else(|_| repo_path.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string())
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the explicit path does not exist, the
    /// file cannot be read, or the TOML fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )))
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let Some(path) = config_path else {
            tracing::debug!("no config file found, using built-in defaults");
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })?;

        if !crate::validator::KNOWN_STATUSES.contains(&config.project.project_stage.as_str()) {
            tracing::warn!(
                stage = %config.project.project_stage,
                "project_stage is not a recognised lifecycle status"
            );
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
