// Rust guideline compliant 2026-02-06

//! Hooksieve CLI Application
//!
//! Prunes a pre-commit configuration down to the hooks named on the command line.

use clap::Parser;
use hooksieve_cli::{commands, create_formatter, exit_code, logging, OutputFormatter};
use hooksieve_core::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "hooksieve",
    version,
    about = "Keep only the named hooks in a pre-commit configuration",
    after_help = concat!(
        "Examples:\n",
        "  hooksieve check-yaml,black\n",
        "  hooksieve ruff --config ci/.pre-commit-config.yaml --dry-run\n",
    )
)]
struct Cli {
    /// Comma-separated hook ids to keep
    hooks: String,

    /// Pre-commit configuration file [default: .pre-commit-config.yaml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report the result without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let formatter = create_formatter(if cli.json { "json" } else { "plain" });

    match run(cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let level = cli.log_level.as_deref().unwrap_or(settings.log_level.as_str());
    let _guard = logging::init(level, settings.log_file.as_deref())?;

    let config_path = cli.config.unwrap_or(settings.config_path);
    let report = commands::filter::execute(&cli.hooks, &config_path, cli.dry_run)?;

    println!("{}", formatter.format_report(&report));
    Ok(())
}
