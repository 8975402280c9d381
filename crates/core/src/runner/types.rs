//! Batch run types.

use std::path::PathBuf;

use thiserror::Error;

use crate::classifier::ClassifyError;
use crate::ledger::LedgerError;
use crate::report::ReportError;

/// Errors that abort a batch run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The listing could not be read.
    #[error("Failed to read listing {path}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A listing entry is malformed.
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// The ledger could not be loaded or saved.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The report could not be produced.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries in the listing.
    pub listed_files: usize,
    /// Distinct titles after series collapsing.
    pub titles: usize,
    /// Titles with at least one film and a trailer.
    pub complete_titles: usize,
    /// Report lines for titles not reported before, in title order.
    pub report_lines: Vec<String>,
    /// Titles in the ledger after the run.
    pub ledger_titles: usize,
    /// Whether the ledger and report files were written.
    pub files_written: bool,
}

impl RunSummary {
    /// Number of titles reported by this run.
    pub fn newly_reported(&self) -> usize {
        self.report_lines.len()
    }
}
