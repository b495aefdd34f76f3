// Rust guideline compliant 2026-02-06

//! Command implementations for the Hooksieve CLI.

pub mod filter;
