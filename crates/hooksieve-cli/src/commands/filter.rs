// Rust guideline compliant 2026-02-06

//! Implementation of the filter command.
//!
//! Keeps only the named hooks in a pre-commit configuration file and logs what
//! changed per repository.

use anyhow::Result;
use hooksieve_core::{filter_file_with, FilterOptions, FilterReport};
use std::path::Path;
use tracing::{info, warn};

/// Filters the configuration file down to the hooks in `hooks`.
///
/// # Arguments
///
/// * `hooks` - Comma-separated hook ids to keep
/// * `config_path` - Path to the pre-commit configuration file
/// * `dry_run` - Report without writing the file
///
/// # Returns
///
/// The filter report.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file does not exist
/// - The configuration file is malformed
/// - The filtered file cannot be written
pub fn execute(hooks: &str, config_path: &Path, dry_run: bool) -> Result<FilterReport> {
    info!(path = %config_path.display(), hooks, dry_run, "filtering pre-commit hooks");

    let report = filter_file_with(config_path, hooks, FilterOptions { dry_run })?;

    for repo in &report.repos {
        info!(
            repo = %repo.repo,
            before = ?repo.before,
            after = ?repo.after,
            "filtered repository"
        );
    }

    for id in report.unmatched() {
        warn!(id, "requested hook not found in configuration");
    }

    if report.written {
        info!(
            path = %config_path.display(),
            kept = report.kept(),
            removed = report.removed(),
            "configuration updated"
        );
    }

    Ok(report)
}
