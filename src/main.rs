mod cli;

use baseline_init::generator::{GenerationOutcome, Generator};
use baseline_init::{checker::Checker, config, interactive, output, validator};
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            format,
            output: output_path,
        } => {
            require_exists(&path, "path");

            let result = Checker::new(&path).check();
            let formatted = output::format_check(&result, format).unwrap_or_else(|e| fail(e));

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if result.is_compliant { 0 } else { 1 });
        }

        Commands::Validate {
            file,
            format,
            strict,
            config: config_path,
        } => {
            require_exists(&file, "file");

            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| fail(e));
            let strict = strict || config.strict.enabled;

            let result = validator::validate_file(&file).unwrap_or_else(|e| fail(e));
            let formatted =
                output::format_validation(&file, &result, format).unwrap_or_else(|e| fail(e));
            print!("{formatted}");

            let failed = if strict {
                result.fails_strict()
            } else {
                !result.is_valid
            };
            std::process::exit(if failed { 1 } else { 0 });
        }

        Commands::Setup {
            path,
            auto,
            interactive: _,
            force,
            config: config_path,
        } => {
            require_exists(&path, "path");

            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| fail(e));

            // Interactive is the default when neither mode is given.
            let project = if auto {
                config.project.clone()
            } else {
                let stdin = std::io::stdin();
                interactive::gather_configuration(
                    &path,
                    &config.project,
                    stdin.lock(),
                    std::io::stdout(),
                )
                .unwrap_or_else(|e| fail(e))
            };

            let generator = Generator::new(&path, force);
            let files = generator
                .generate_with_config(&project)
                .unwrap_or_else(|e| fail(e));

            for file in &files {
                match file.outcome {
                    GenerationOutcome::Written => {
                        println!("{} Generated {}", "✓".green(), file.name);
                    }
                    GenerationOutcome::Skipped => {
                        println!(
                            "{} {} already exists (use --force to overwrite)",
                            "⚠".yellow(),
                            file.name
                        );
                    }
                }
            }

            println!(
                "\n{} OpenSSF baseline compliance files generated in {}",
                "✓".green(),
                generator.repo_path().display()
            );
            println!("\nNext steps:");
            println!("  1. Review and customize the generated files");
            println!("  2. Run 'baseline-init check' to validate");
            println!("  3. Commit the files to your repository");
        }
    }
}

fn require_exists(path: &Path, what: &str) {
    if !path.exists() {
        eprintln!("Error: {what} does not exist: {}", path.display());
        std::process::exit(2);
    }
}

fn fail(e: baseline_init::Error) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(2);
}
