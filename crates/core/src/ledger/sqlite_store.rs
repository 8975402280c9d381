//! SQLite-backed ledger store.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags};
use tracing::debug;

use crate::backup::{self, BackupConfig};
use crate::grouping::TitleGroup;

use super::{LedgerError, LedgerStore, ReportedSet};

/// Ledger stored as an SQLite database file.
///
/// Every save writes a complete new database next to the target and renames
/// it into place, so the previous ledger survives a failed save.
pub struct SqliteLedgerStore {
    path: PathBuf,
    backup: BackupConfig,
}

impl SqliteLedgerStore {
    /// Creates a store for the database at `path`. Nothing is opened until load or save.
    pub fn new(path: impl Into<PathBuf>, backup: BackupConfig) -> Self {
        Self {
            path: path.into(),
            backup,
        }
    }

    /// Location of the ledger database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn initialize_schema(conn: &Connection) -> Result<(), LedgerError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS reported (
                title TEXT PRIMARY KEY,
                film_files TEXT NOT NULL,
                trailer_file TEXT
            );
            "#,
        )
        .map_err(|e| LedgerError::Database(e.to_string()))
    }

    fn decode_error(&self, reason: impl ToString) -> LedgerError {
        LedgerError::Decode {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn read_rows(&self, conn: &Connection) -> Result<ReportedSet, LedgerError> {
        let mut stmt = conn
            .prepare("SELECT title, film_files, trailer_file FROM reported ORDER BY title")
            .map_err(|e| self.decode_error(e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            })
            .map_err(|e| self.decode_error(e))?;

        let mut set = ReportedSet::new();
        for row_result in rows {
            let (title, film_files_json, trailer_file) =
                row_result.map_err(|e| self.decode_error(e))?;

            let film_files: Vec<String> = serde_json::from_str(&film_files_json)
                .map_err(|e| self.decode_error(format!("film_files of {}: {}", title, e)))?;

            set.insert(TitleGroup {
                title,
                film_files,
                trailer_file,
            });
        }

        Ok(set)
    }

    fn write_database(path: &Path, set: &ReportedSet) -> Result<(), LedgerError> {
        let mut conn = Connection::open(path).map_err(|e| LedgerError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;

        let tx = conn
            .transaction()
            .map_err(|e| LedgerError::Database(e.to_string()))?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO reported (title, film_files, trailer_file) VALUES (?, ?, ?)")
                .map_err(|e| LedgerError::Database(e.to_string()))?;

            for group in set.iter() {
                let film_files_json = serde_json::to_string(&group.film_files)
                    .map_err(|e| LedgerError::Database(e.to_string()))?;
                stmt.execute(params![group.title, film_files_json, group.trailer_file])
                    .map_err(|e| LedgerError::Database(e.to_string()))?;
            }
        }
        tx.commit()
            .map_err(|e| LedgerError::Database(e.to_string()))?;

        conn.close()
            .map_err(|(_, e)| LedgerError::Database(e.to_string()))
    }
}

impl LedgerStore for SqliteLedgerStore {
    fn load(&self) -> Result<ReportedSet, LedgerError> {
        let exists = self.path.try_exists().map_err(|source| LedgerError::Io {
            path: self.path.clone(),
            source,
        })?;
        if !exists {
            debug!(path = ?self.path, "No ledger yet, starting empty");
            return Ok(ReportedSet::new());
        }

        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| self.decode_error(e))?;
        let set = self.read_rows(&conn)?;

        debug!(path = ?self.path, titles = set.len(), "Ledger loaded");
        Ok(set)
    }

    fn save(&self, set: &ReportedSet) -> Result<(), LedgerError> {
        let staged = backup::staging_path(&self.path);
        if staged.exists() {
            fs::remove_file(&staged).map_err(|source| LedgerError::Io {
                path: staged.clone(),
                source,
            })?;
        }

        if let Err(e) = Self::write_database(&staged, set) {
            let _ = fs::remove_file(&staged);
            return Err(e);
        }

        backup::replace_with_backup(&staged, &self.path, &self.backup)?;

        debug!(path = ?self.path, titles = set.len(), "Ledger saved");
        Ok(())
    }
}
