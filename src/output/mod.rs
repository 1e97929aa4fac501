//! Output formatting for check and validation results.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Yaml`](OutputFormat::Yaml)     | [`yaml`]   | Automation / scripting  |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | CI/CD integration       |

pub mod json;
pub mod pretty;
pub mod sarif;
pub mod yaml;

use crate::checker::CheckResult;
use crate::error::Result;
use crate::validator::ValidationResult;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// Machine-readable YAML.
    Yaml,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`CheckResult`] in the requested [`OutputFormat`].
///
/// # Errors
///
/// Returns [`Error::Serialize`](crate::error::Error::Serialize) if a
/// machine-readable format fails to serialize.
pub fn format_check(result: &CheckResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_check(result)),
        OutputFormat::Json => json::to_string(result),
        OutputFormat::Yaml => yaml::to_string(result),
        OutputFormat::Sarif => sarif::format_check(result),
    }
}

/// Formats the [`ValidationResult`] for the file at `path`.
pub fn format_validation(
    path: &Path,
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_validation(path, result)),
        OutputFormat::Json => json::to_string(result),
        OutputFormat::Yaml => yaml::to_string(result),
        OutputFormat::Sarif => sarif::format_validation(path, result),
    }
}
