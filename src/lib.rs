//! # baseline-init
//!
//! OpenSSF Baseline compliance tooling for repositories.
//!
//! `baseline-init` checks a repository for the compliance files the OpenSSF
//! Security Baseline expects (`SECURITY-INSIGHTS.yml`, `SECURITY.md`,
//! `LICENSE`, `CODE_OF_CONDUCT.md`, `CONTRIBUTING.md`), validates
//! `SECURITY-INSIGHTS.yml` against schema 1.0.0 or 2.0.0, and generates
//! compliant defaults.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use baseline_init::{checker::Checker, validator};
//!
//! let check = Checker::new(".").check();
//! println!("compliant: {}", check.is_compliant);
//!
//! let result = validator::validate_file(Path::new("SECURITY-INSIGHTS.yml"))?;
//! for error in &result.errors {
//!     eprintln!("error: {error}");
//! }
//! # Ok::<(), baseline_init::Error>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`checker`]**: probe the repository for each compliance artifact.
//! 2. **[`validator`]**: route a `SECURITY-INSIGHTS.yml` document to the
//!    schema 1.x or 2.x checks and collect errors and warnings.
//! 3. **[`insights`]**: the document models for both schema revisions.
//! 4. **[`generator`]** / **[`interactive`]**: produce default files from a
//!    [`config::ProjectConfig`].
//! 5. **[`output`]**: render results as pretty text, JSON, YAML, or [SARIF].
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod checker;
pub mod config;
pub mod error;
pub mod generator;
pub mod insights;
pub mod interactive;
pub mod output;
pub mod validator;

pub use error::{Error, Result};
