// Rust guideline compliant 2026-02-06

//! The hook filter.
//!
//! [`apply`] is the pure transformation over an in-memory document. [`filter_file`]
//! wraps it with the load and the atomic write-back.

use crate::{AllowSet, ConfigDocument, ConfigFile, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Hook ids of one repository entry before and after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoReport {
    /// The entry's `repo` value (or its position when absent).
    pub repo: String,
    /// Hook ids before filtering.
    pub before: Vec<String>,
    /// Hook ids that survived.
    pub after: Vec<String>,
}

impl RepoReport {
    /// Returns the ids that were removed, in document order.
    pub fn removed(&self) -> Vec<&str> {
        self.before
            .iter()
            .filter(|id| !self.after.contains(id))
            .map(String::as_str)
            .collect()
    }
}

/// Outcome of a filter run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Hook ids as requested by the caller.
    pub requested: Vec<String>,
    /// Per-repository before/after ids, in document order.
    pub repos: Vec<RepoReport>,
    /// Whether the document was written back.
    pub written: bool,
}

impl FilterReport {
    /// Total number of hooks kept across all repositories.
    pub fn kept(&self) -> usize {
        self.repos.iter().map(|r| r.after.len()).sum()
    }

    /// Total number of hooks removed across all repositories.
    pub fn removed(&self) -> usize {
        self.repos
            .iter()
            .map(|r| r.before.len() - r.after.len())
            .sum()
    }

    /// Returns requested ids that matched no hook in the document.
    pub fn unmatched(&self) -> Vec<&str> {
        self.requested
            .iter()
            .filter(|id| !self.repos.iter().any(|r| r.after.contains(id)))
            .map(String::as_str)
            .collect()
    }
}

/// Options for [`filter_file_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Compute the report without writing the file.
    pub dry_run: bool,
}

/// Removes every hook whose `id` is not in `allow`.
///
/// Each repository's `hooks` becomes the subsequence of its original hooks whose
/// ids are allowed, in original order, with every other field untouched. The
/// `repos` sequence itself is never changed.
///
/// # Errors
///
/// Returns `MalformedDocument` if the document lacks the `repos`/`hooks`/`id`
/// shape. The document is not modified in that case.
pub fn apply(document: &mut ConfigDocument, allow: &AllowSet) -> Result<FilterReport> {
    let before = document.hook_ids()?;
    document.retain_hooks(|id| allow.contains(id))?;

    let repos = before
        .into_iter()
        .map(|entry| {
            let after = entry
                .ids
                .iter()
                .filter(|id| allow.contains(id))
                .cloned()
                .collect();
            RepoReport {
                repo: entry.repo,
                before: entry.ids,
                after,
            }
        })
        .collect();

    Ok(FilterReport {
        requested: allow.requested().to_vec(),
        repos,
        written: false,
    })
}

/// Filters the configuration file at `path`, keeping the hooks named in `hooks_csv`.
///
/// # Arguments
///
/// * `path` - Path to the pre-commit configuration file
/// * `hooks_csv` - Comma-separated hook ids to keep
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist (`NotFound`)
/// - The document is malformed (`MalformedDocument`)
/// - The filtered document cannot be written (`WriteFailure`)
pub fn filter_file(path: &Path, hooks_csv: &str) -> Result<FilterReport> {
    filter_file_with(path, hooks_csv, FilterOptions::default())
}

/// Same as [`filter_file`], with options.
///
/// With `dry_run` set the file is read and filtered in memory but never written.
///
/// # Errors
///
/// See [`filter_file`].
pub fn filter_file_with(
    path: &Path,
    hooks_csv: &str,
    options: FilterOptions,
) -> Result<FilterReport> {
    let allow = AllowSet::parse(hooks_csv);
    let file = ConfigFile::new(path)?;
    let mut document = file.load()?;

    let mut report = apply(&mut document, &allow)?;
    debug!(
        kept = report.kept(),
        removed = report.removed(),
        "filtered hooks"
    );

    if !options.dry_run {
        file.save(&document)?;
        report.written = true;
    }

    Ok(report)
}
