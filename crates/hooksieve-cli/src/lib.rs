// Rust guideline compliant 2026-02-06

//! Hooksieve CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;

pub use output::{create_formatter, OutputFormatter};

/// Exit code for a missing configuration file and any error without a
/// more specific code.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for a malformed configuration document (sysexits `EX_DATAERR`).
pub const EXIT_MALFORMED: u8 = 65;
/// Exit code for a failed write-back (sysexits `EX_IOERR`).
pub const EXIT_WRITE_FAILURE: u8 = 74;

/// Maps an error to the process exit code.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<hooksieve_core::Error>() {
        Some(hooksieve_core::Error::MalformedDocument(_)) => EXIT_MALFORMED,
        Some(hooksieve_core::Error::WriteFailure { .. }) => EXIT_WRITE_FAILURE,
        _ => EXIT_FAILURE,
    }
}
