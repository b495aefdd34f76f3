// Rust guideline compliant 2026-02-06

//! Storage module for the configuration file.
//!
//! Reads the YAML document from disk and writes it back atomically: the new
//! content goes to a uniquely named temp file next to the target, which is then
//! renamed over it. A symlinked target is resolved first so the link survives
//! and the file it points to receives the new content.

use crate::{ConfigDocument, Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A pre-commit configuration file on disk.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Path to the YAML file.
    path: PathBuf,
}

impl ConfigFile {
    /// Creates a new ConfigFile handle.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns the path writes must land on: the symlink target when the
    /// configured path is a symlink, the configured path otherwise.
    fn write_target(&self) -> std::io::Result<PathBuf> {
        match fs::symlink_metadata(&self.path) {
            Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(&self.path),
            _ => Ok(self.path.clone()),
        }
    }
}

impl ConfigFile {
    /// Loads and parses the document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist (`NotFound`)
    /// - The content is not UTF-8 or not valid YAML (`MalformedDocument`)
    /// - The file cannot be read (`Io`)
    pub fn load(&self) -> Result<ConfigDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(self.path.clone()));
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(Error::MalformedDocument(format!("not valid UTF-8: {}", e)));
            }
            Err(e) => return Err(e.into()),
        };
        debug!(path = %self.path.display(), bytes = content.len(), "loaded configuration");
        ConfigDocument::from_yaml_str(&content)
    }

    /// Writes the document back to the file.
    ///
    /// Uses atomic write operations (temp file + rename). If any step fails the
    /// temp file is removed and the original file is left as it was. The original
    /// file's permissions are carried over to the new content.
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` if serialization fails, or `WriteFailure` if
    /// the temp file cannot be written or renamed.
    pub fn save(&self, document: &ConfigDocument) -> Result<()> {
        let content = document.to_yaml_string()?;

        let target = self.write_target().map_err(|source| Error::WriteFailure {
            path: self.path.clone(),
            source,
        })?;

        Self::write_atomic(&target, content.as_bytes()).map_err(|source| Error::WriteFailure {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            target = %target.display(),
            bytes = content.len(),
            "saved configuration"
        );
        Ok(())
    }

    fn write_atomic(target: &Path, content: &[u8]) -> std::io::Result<()> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let prefix = match target.file_name() {
            Some(name) => format!(".{}.", name.to_string_lossy()),
            None => ".hooksieve.".to_string(),
        };

        // Dropping the temp file on any early return deletes it.
        let mut temp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)?;
        temp.write_all(content)?;
        temp.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(target) {
            fs::set_permissions(temp.path(), metadata.permissions())?;
        }

        temp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}
