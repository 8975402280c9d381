//! Backup copies and atomic replacement of output files.
//!
//! Both the ledger and the report are written the same way: the new content
//! goes to a sibling temp file, any existing file is copied to
//! `<path><suffix>`, then the temp file is renamed over the target. A failure
//! before the rename leaves the previous file untouched.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Suffix of the sibling file new content is staged in.
pub const STAGING_SUFFIX: &str = ".tmp";

/// Configuration for backup copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Appended to the full file name of the backed-up file.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Abort the run when a backup copy cannot be made.
    #[serde(default)]
    pub strict: bool,
}

fn default_suffix() -> String {
    ".backup".to_string()
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            strict: false,
        }
    }
}

impl BackupConfig {
    /// Makes backup failures fatal.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Errors that can occur while backing up or replacing a file.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Failed to copy the existing file to its backup path.
    #[error("Failed to back up {source} to {destination}")]
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write staged content.
    #[error("Failed to write {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup path would overwrite the staged content.
    #[error("Backup of {target} would overwrite staged file {staged}")]
    PathClash { target: PathBuf, staged: PathBuf },

    /// Failed to move staged content over the target.
    #[error("Failed to replace {destination} with {source}")]
    RenameFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// Appends `suffix` to the file name of `path`.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Sibling path new content for `path` is written to before the rename.
pub fn staging_path(path: &Path) -> PathBuf {
    with_suffix(path, STAGING_SUFFIX)
}

/// Copies an existing file at `path` to its backup path.
///
/// Returns the backup path, or `None` when there was nothing to back up or
/// the copy failed in non-strict mode.
pub fn backup_existing(path: &Path, config: &BackupConfig) -> Result<Option<PathBuf>, BackupError> {
    if !path.exists() {
        return Ok(None);
    }

    let destination = with_suffix(path, &config.suffix);
    match fs::copy(path, &destination) {
        Ok(bytes) => {
            debug!(source = ?path, destination = ?destination, bytes, "Backup created");
            Ok(Some(destination))
        }
        Err(error) if !config.strict => {
            warn!(source = ?path, destination = ?destination, %error, "Backup failed, continuing");
            Ok(None)
        }
        Err(error) => Err(BackupError::CopyFailed {
            source: path.to_path_buf(),
            destination,
            error,
        }),
    }
}

/// Backs up `target` and moves the staged file over it.
///
/// The staged file is removed if the backup aborts the replacement.
pub fn replace_with_backup(
    staged: &Path,
    target: &Path,
    config: &BackupConfig,
) -> Result<Option<PathBuf>, BackupError> {
    if with_suffix(target, &config.suffix) == staged {
        let _ = fs::remove_file(staged);
        return Err(BackupError::PathClash {
            target: target.to_path_buf(),
            staged: staged.to_path_buf(),
        });
    }

    let backup = match backup_existing(target, config) {
        Ok(backup) => backup,
        Err(e) => {
            let _ = fs::remove_file(staged);
            return Err(e);
        }
    };

    fs::rename(staged, target).map_err(|error| {
        let _ = fs::remove_file(staged);
        BackupError::RenameFailed {
            source: staged.to_path_buf(),
            destination: target.to_path_buf(),
            error,
        }
    })?;

    Ok(backup)
}

/// Writes `contents` to `target` through a staged sibling file.
pub fn write_with_backup(
    target: &Path,
    contents: &[u8],
    config: &BackupConfig,
) -> Result<Option<PathBuf>, BackupError> {
    let staged = staging_path(target);
    fs::write(&staged, contents).map_err(|source| {
        let _ = fs::remove_file(&staged);
        BackupError::WriteFailed {
            path: staged.clone(),
            source,
        }
    })?;

    replace_with_backup(&staged, target, config)
}
