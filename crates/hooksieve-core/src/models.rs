// Rust guideline compliant 2026-02-06

//! Data models for Hooksieve.
//!
//! The configuration document is held as an untyped YAML tree so that keys the
//! filter does not know about survive a round-trip unchanged and in order. Shape
//! checks happen on access and name the offending location.

use crate::{Error, Result};
use serde_yaml::Value;
use std::collections::HashSet;

/// The set of hook identifiers a caller wants to keep.
///
/// Built by splitting a comma-separated string with no trimming or case folding.
/// Doubled commas produce the empty-string identifier, which never matches a
/// real hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowSet {
    /// Identifiers in the order they were requested, duplicates included.
    requested: Vec<String>,
    /// Identifiers for membership tests.
    ids: HashSet<String>,
}

impl AllowSet {
    /// Parses a comma-separated list of hook identifiers.
    ///
    /// # Arguments
    ///
    /// * `csv` - Identifiers separated by `,`
    ///
    /// # Returns
    ///
    /// An allow-set holding every segment of `csv` verbatim.
    pub fn parse(csv: &str) -> Self {
        csv.split(',').map(str::to_string).collect()
    }

    /// Returns true if `id` is an allowed hook identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns the identifiers in the order they were requested.
    pub fn requested(&self) -> &[String] {
        &self.requested
    }
}

impl FromIterator<String> for AllowSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let requested: Vec<String> = iter.into_iter().collect();
        let ids = requested.iter().cloned().collect();
        Self { requested, ids }
    }
}

/// Hook identifiers of a single repository entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHooks {
    /// The entry's `repo` value, or its position when `repo` is absent.
    pub repo: String,
    /// Hook `id` values in document order.
    pub ids: Vec<String>,
}

/// A parsed pre-commit configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Wraps an already parsed YAML tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parses a document from YAML text.
    ///
    /// Only syntax is checked here; the `repos`/`hooks`/`id` shape is checked
    /// by the accessors.
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` if the text is not valid YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(content)
            .map_err(|e| Error::MalformedDocument(format!("invalid YAML: {}", e)))?;
        Ok(Self { root })
    }

    /// Serializes the document back to YAML text.
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` if the tree cannot be serialized.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(&self.root)
            .map_err(|e| Error::MalformedDocument(format!("failed to serialize: {}", e)))
    }

    /// Returns the underlying YAML tree.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Returns the hook identifiers of every repository entry, in order.
    ///
    /// This walks the whole document, so it doubles as the shape check.
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` if:
    /// - The root is not a mapping or has no `repos` sequence
    /// - An entry is not a mapping or has no `hooks` sequence
    /// - A hook is not a mapping or has no string `id`
    pub fn hook_ids(&self) -> Result<Vec<RepoHooks>> {
        let repos = self.repos()?;
        let mut result = Vec::with_capacity(repos.len());

        for (i, entry) in repos.iter().enumerate() {
            let location = format!("repos[{}]", i);
            let hooks = hooks_of(entry, &location)?;
            let mut ids = Vec::with_capacity(hooks.len());
            for (j, hook) in hooks.iter().enumerate() {
                ids.push(hook_id(hook, &format!("{}.hooks[{}]", location, j))?.to_string());
            }
            result.push(RepoHooks {
                repo: repo_label(entry, &location),
                ids,
            });
        }

        Ok(result)
    }

    /// Keeps only the hooks whose `id` satisfies `keep`, in every repository entry.
    ///
    /// The document is validated in full before anything is removed, so on error
    /// it is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` under the same conditions as [`hook_ids`](Self::hook_ids).
    pub fn retain_hooks<F>(&mut self, mut keep: F) -> Result<()>
    where
        F: FnMut(&str) -> bool,
    {
        self.hook_ids()?;

        let repos = self
            .root
            .get_mut("repos")
            .and_then(Value::as_sequence_mut)
            .ok_or_else(|| Error::malformed("repos", "expected a sequence"))?;

        for entry in repos.iter_mut() {
            if let Some(hooks) = entry.get_mut("hooks").and_then(Value::as_sequence_mut) {
                hooks.retain(|hook| hook.get("id").and_then(Value::as_str).is_some_and(&mut keep));
            }
        }

        Ok(())
    }

    fn repos(&self) -> Result<&[Value]> {
        let root = self
            .root
            .as_mapping()
            .ok_or_else(|| Error::malformed("", "document root is not a mapping"))?;
        let repos = root
            .get("repos")
            .ok_or_else(|| Error::malformed("", "missing `repos` key"))?;
        repos
            .as_sequence()
            .map(Vec::as_slice)
            .ok_or_else(|| Error::malformed("repos", "expected a sequence"))
    }
}

fn hooks_of<'a>(entry: &'a Value, location: &str) -> Result<&'a [Value]> {
    let entry = entry
        .as_mapping()
        .ok_or_else(|| Error::malformed(location, "expected a mapping"))?;
    entry
        .get("hooks")
        .ok_or_else(|| Error::malformed(location, "missing `hooks` key"))?
        .as_sequence()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::malformed(&format!("{}.hooks", location), "expected a sequence"))
}

fn hook_id<'a>(hook: &'a Value, location: &str) -> Result<&'a str> {
    let hook = hook
        .as_mapping()
        .ok_or_else(|| Error::malformed(location, "expected a mapping"))?;
    hook.get("id")
        .ok_or_else(|| Error::malformed(location, "missing `id` key"))?
        .as_str()
        .ok_or_else(|| Error::malformed(&format!("{}.id", location), "expected a string"))
}

fn repo_label(entry: &Value, location: &str) -> String {
    entry
        .get("repo")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| location.to_string())
}
