//! Interactive collection of a [`ProjectConfig`].
//!
//! Prompts are written to any [`Write`] and answers read from any
//! [`BufRead`], so the CLI wires them to the terminal and tests feed scripted
//! input. Pressing Enter accepts the default shown in brackets.

use crate::config::{repo_dir_name, ProjectConfig};
use crate::error::{Error, Result};
use crate::validator::KNOWN_STATUSES;
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

/// `git@host:owner/repo(.git)` style remotes.
static RE_SCP_REMOTE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^git@(?P<host>[^:]+):(?P<path>.+?)(?:\.git)?$").unwrap()
});

/// Walks the user through every [`ProjectConfig`] field.
///
/// `base` supplies the defaults offered for each question (typically from
/// the config file); the project URL default prefers the repository's
/// `origin` remote when one is configured.
///
/// # Errors
///
/// Returns [`Error::Prompt`] when input ends before all questions are
/// answered or the terminal cannot be written.
pub fn gather_configuration<R: BufRead, W: Write>(
    repo_path: &Path,
    base: &ProjectConfig,
    mut input: R,
    mut output: W,
) -> Result<ProjectConfig> {
    let mut prompter = Prompter {
        input: &mut input,
        output: &mut output,
    };

    prompter.line("OpenSSF Baseline Interactive Setup")?;
    prompter.line("======================================")?;
    prompter.line("")?;

    let url_default = detect_git_remote(repo_path).unwrap_or_else(|| base.project_url.clone());
    let project_url = prompter.text("Project URL", &url_default)?;

    let name_default = if base.project_name.is_empty() {
        repo_dir_name(repo_path)
    } else {
        base.project_name.clone()
    };
    let project_name = prompter.text("Project Name", &name_default)?;

    let security_email = loop {
        let email = prompter.text("Security Contact Email", &base.security_email)?;
        if email.contains('@') {
            break email;
        }
        prompter.line("  invalid email address")?;
    };

    let project_stage = prompter.select(
        "Project Lifecycle Stage",
        KNOWN_STATUSES,
        &base.project_stage,
    )?;
    let accepts_vuln_reports =
        prompter.confirm("Accept Vulnerability Reports", base.accepts_vuln_reports)?;
    let accepts_pull_requests =
        prompter.confirm("Accept Pull Requests", base.accepts_pull_requests)?;
    let accepts_automated_pr = prompter.confirm(
        "Accept Automated Pull Requests (e.g., Dependabot)",
        base.accepts_automated_pr,
    )?;
    let bug_fixes_only =
        prompter.confirm("Bug Fixes Only (no new features)", base.bug_fixes_only)?;

    let maintainer_default = base
        .maintainers
        .iter()
        .map(|m| m.strip_prefix("github:").unwrap_or(m.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let maintainers = split_list(&prompter.text(
        "GitHub Maintainer Username(s) (comma-separated)",
        &maintainer_default,
    )?)
    .into_iter()
    .map(|m| {
        if m.starts_with("github:") {
            m
        } else {
            format!("github:{m}")
        }
    })
    .collect();

    let distribution_points = split_list(&prompter.text(
        "Distribution Points (URLs, comma-separated, or press Enter to skip)",
        &base.distribution_points.join(", "),
    )?);

    prompter.line("")?;

    Ok(ProjectConfig {
        project_url,
        project_name,
        security_email,
        accepts_vuln_reports,
        accepts_pull_requests,
        accepts_automated_pr,
        project_stage,
        bug_fixes_only,
        maintainers,
        distribution_points,
    })
}

struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|e| Error::Prompt(e.to_string()))
    }

    fn ask(&mut self, label: &str, hint: &str) -> Result<String> {
        let written = if hint.is_empty() {
            write!(self.output, "{label}: ")
        } else {
            write!(self.output, "{label} [{hint}]: ")
        };
        written
            .and_then(|_| self.output.flush())
            .map_err(|e| Error::Prompt(e.to_string()))?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| Error::Prompt(e.to_string()))?;
        if read == 0 {
            return Err(Error::Prompt(format!("no answer for '{label}'")));
        }
        Ok(answer.trim().to_string())
    }

    fn text(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = self.ask(label, default)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let answer = self.ask(label, hint)?.to_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.line("  please answer yes or no")?,
            }
        }
    }

    /// Accepts either an option's 1-based number or its text.
    fn select(&mut self, label: &str, options: &[&str], default: &str) -> Result<String> {
        for (i, option) in options.iter().enumerate() {
            self.line(&format!("  {}) {option}", i + 1))?;
        }
        let default = if options.contains(&default) {
            default
        } else {
            options[0]
        };
        loop {
            let answer = self.ask(label, default)?;
            if answer.is_empty() {
                return Ok(default.to_string());
            }
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(options[n - 1].to_string());
                }
            }
            if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                return Ok(option.to_string());
            }
            self.line(&format!("  choose one of: {}", options.join(", ")))?;
        }
    }
}

/// Splits a comma-separated answer, dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads `remote.origin.url` for the repository, normalised to HTTPS.
fn detect_git_remote(repo_path: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .current_dir(repo_path)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if url.is_empty() {
        return None;
    }
    tracing::debug!(remote = %url, "detected git remote");
    Some(normalize_remote(&url))
}

/// Converts an SSH `git@host:owner/repo.git` remote to its HTTPS form.
///
/// Other remotes are returned unchanged apart from a trailing `.git` on
/// HTTPS URLs.
pub fn normalize_remote(url: &str) -> String {
    if let Some(caps) = RE_SCP_REMOTE.captures(url) {
        return format!("https://{}/{}", &caps["host"], &caps["path"]);
    }
    if url.starts_with("https://") {
        return url.trim_end_matches(".git").to_string();
    }
    url.to_string()
}
