//! Human-readable colored text formatter.

use crate::checker::{CheckResult, Priority};
use crate::validator::ValidationResult;
use colored::{ColoredString, Colorize};
use std::path::Path;

/// Formats a [`CheckResult`] as ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header**: repository path and overall status.
/// 2. **File Checks**: one line per artifact with its location.
/// 3. **Missing Files**: required artifacts that were not found.
/// 4. **Recommendations**: grouped by priority, most urgent first.
/// 5. **Next Steps**: only when the repository is not compliant.
pub fn format_check(result: &CheckResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "OpenSSF Baseline Compliance Check".bold()));
    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!("Repository: {}\n\n", result.path));

    let status = if result.is_compliant {
        "✓ COMPLIANT".green().bold()
    } else {
        "✗ NOT COMPLIANT".red().bold()
    };
    out.push_str(&format!("Status: {status}\n\n"));

    out.push_str(&format!("{}\n", "File Checks:".bold()));
    for file in &result.files {
        if file.exists {
            out.push_str(&format!("  {} {}\n", "✓".green(), file.name));
            if !file.path.is_empty() {
                out.push_str(&format!("    Location: {}\n", file.path.cyan()));
            }
            for warning in &file.warnings {
                out.push_str(&format!("    {} {}\n", "⚠".yellow(), warning));
            }
        } else {
            out.push_str(&format!("  {} {}\n", "✗".red(), file.name));
        }
    }
    out.push('\n');

    if !result.missing_files.is_empty() {
        out.push_str(&format!("{}\n", "Missing Files:".bold()));
        for missing in &result.missing_files {
            out.push_str(&format!("  {} {}\n", "✗".red(), missing));
        }
        out.push('\n');
    }

    if !result.recommendations.is_empty() {
        out.push_str(&format!("{}\n", "Recommendations:".bold()));
        for priority in Priority::ALL {
            for rec in result.recommendations_with(priority) {
                out.push_str(&format!(
                    "\n  [{}] {}\n",
                    priority_label(priority),
                    rec.description.bold()
                ));
                out.push_str(&format!("  Category: {}\n", rec.category));
                out.push_str(&format!("  Action: {}\n", rec.action.cyan()));
            }
        }
        out.push('\n');
    }

    if !result.is_compliant {
        out.push_str(&format!("{}\n", "Next Steps:".bold()));
        out.push_str("  1. Run 'baseline-init setup --auto' to auto-generate missing files\n");
        out.push_str("  2. Or run 'baseline-init setup --interactive' for guided setup\n");
        out.push_str("  3. Review and customize generated files\n");
        out.push_str("  4. Run 'baseline-init check' again to verify\n");
    }

    out
}

fn priority_label(priority: Priority) -> ColoredString {
    let label = priority.to_string().to_uppercase();
    match priority {
        Priority::Critical => label.red().bold(),
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.cyan(),
    }
}

/// Formats a [`ValidationResult`] for the file at `path`.
///
/// Warnings are listed for valid and invalid files alike.
pub fn format_validation(path: &Path, result: &ValidationResult) -> String {
    let mut out = String::new();

    if result.is_valid {
        out.push_str(&format!("{} {} is valid\n", "✓".green(), path.display()));
    } else {
        out.push_str(&format!("{} {} is invalid:\n", "✗".red(), path.display()));
        for error in &result.errors {
            out.push_str(&format!("  - {}\n", error.red()));
        }
    }

    if !result.warnings.is_empty() {
        out.push_str(&format!("\n{}\n", "Warnings:".yellow().bold()));
        for warning in &result.warnings {
            out.push_str(&format!("  - {warning}\n"));
        }
    }

    out
}
