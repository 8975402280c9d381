//! Error types for the report module.

use std::path::PathBuf;

use thiserror::Error;

use crate::backup::BackupError;

/// Errors that can occur while producing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The configured date format cannot be rendered.
    #[error("Invalid date format: {0:?}")]
    DateFormat(String),

    /// Writing a line to the echo sink failed.
    #[error("Failed to echo report line")]
    Echo(#[source] std::io::Error),

    /// Writing the report file failed.
    #[error("Failed to write report {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: BackupError,
    },
}
