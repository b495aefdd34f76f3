// Rust guideline compliant 2026-02-06

//! Hooksieve Core Library
//!
//! This crate provides the building blocks for pruning a pre-commit configuration
//! down to an allow-listed set of hooks:
//! - Data model (configuration document, allow-set)
//! - Filter transformation (pure, no I/O)
//! - Storage (YAML read, atomic write-back)
//! - Tool settings (file and environment overrides)
//! - Error types and result handling

pub mod error;
pub mod filter;
pub mod models;
pub mod settings;
pub mod storage;

pub use error::{Error, Result};
pub use filter::{filter_file, filter_file_with, FilterOptions, FilterReport, RepoReport};
pub use models::{AllowSet, ConfigDocument, RepoHooks};
pub use settings::Settings;
pub use storage::ConfigFile;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".pre-commit-config.yaml";
