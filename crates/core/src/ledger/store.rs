//! Ledger storage trait and error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::backup::BackupError;

use super::ReportedSet;

/// Errors that can occur while loading or saving the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger file could not be accessed.
    #[error("Ledger I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ledger file exists but its contents cannot be read back.
    #[error("Cannot decode ledger {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// Writing the ledger database failed.
    #[error("Ledger database error: {0}")]
    Database(String),

    /// Backing up or replacing the ledger file failed.
    #[error(transparent)]
    Backup(#[from] BackupError),
}

/// Durable storage for the set of reported titles.
pub trait LedgerStore: Send + Sync {
    /// Load the reported set. A ledger that does not exist yet is empty.
    fn load(&self) -> Result<ReportedSet, LedgerError>;

    /// Persist the full reported set, replacing what was stored before.
    fn save(&self, set: &ReportedSet) -> Result<(), LedgerError>;
}
