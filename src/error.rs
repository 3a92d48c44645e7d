//! Error types for the BT-B36 emulator core.
//!
//! Decoding itself is total and infallible: every anomaly in the byte
//! stream becomes either pending state or a MALFORMED command record.
//! The only fallible surface is audit-sink setup.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using AuditError.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Failure while setting up the session audit sinks.
#[derive(Debug, Error, Diagnostic)]
pub enum AuditError {
    /// The log directory could not be created.
    #[error("failed to create log directory {path}")]
    #[diagnostic(
        code(btb36::audit::create_dir),
        help("check permissions on the working directory")
    )]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The session log file could not be opened.
    #[error("failed to open log file {path}")]
    #[diagnostic(code(btb36::audit::create_file))]
    CreateFile {
        /// The file that could not be opened.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}
