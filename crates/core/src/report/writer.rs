//! Report file writer.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::backup::{self, BackupConfig};

use super::ReportError;

/// Writes report lines to the output file, backing up the previous report.
pub struct ReportWriter {
    path: PathBuf,
    backup: BackupConfig,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>, backup: BackupConfig) -> Self {
        Self {
            path: path.into(),
            backup,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the report with `lines`, each terminated by a newline.
    ///
    /// An empty slice still replaces the file, leaving it empty.
    pub fn write(&self, lines: &[String]) -> Result<Option<PathBuf>, ReportError> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }

        let backup = backup::write_with_backup(&self.path, contents.as_bytes(), &self.backup)
            .map_err(|source| ReportError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = ?self.path, lines = lines.len(), "Report written");
        Ok(backup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_lines_newline_terminated() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(temp_dir.path().join("output.txt"), BackupConfig::default());

        writer
            .write(&["a\tb\t01.01.2025".to_string(), "c\td\t01.01.2025".to_string()])
            .unwrap();

        assert_eq!(
            fs::read_to_string(writer.path()).unwrap(),
            "a\tb\t01.01.2025\nc\td\t01.01.2025\n"
        );
    }

    #[test]
    fn test_write_backs_up_previous_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "previous\n").unwrap();
        let writer = ReportWriter::new(&path, BackupConfig::default());

        let backup = writer.write(&[]).unwrap().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert_eq!(fs::read_to_string(backup).unwrap(), "previous\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(
            temp_dir.path().join("missing").join("output.txt"),
            BackupConfig::default(),
        );

        assert!(matches!(
            writer.write(&["line".to_string()]),
            Err(ReportError::Write { .. })
        ));
    }
}
