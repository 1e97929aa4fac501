use baseline_init::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "baseline-init",
    version,
    about = "OpenSSF Baseline compliance tool",
    long_about = "Checks repositories for missing OpenSSF baseline compliance files, \
validates existing ones, and generates compliant defaults.\n\n\
For more information about OpenSSF baseline, visit:\n\
https://github.com/ossf/security-baseline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a repository for OpenSSF baseline compliance
    Check {
        /// Path to the repository
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Validate a compliance file against its schema
    Validate {
        /// File to validate (e.g., SECURITY-INSIGHTS.yml)
        file: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate OpenSSF baseline compliance files
    Setup {
        /// Path to the repository
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Generate files with defaults, without prompting
        #[arg(long, conflicts_with = "interactive")]
        auto: bool,

        /// Walk through each setting interactively (the default)
        #[arg(long)]
        interactive: bool,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
