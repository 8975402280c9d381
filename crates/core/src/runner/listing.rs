//! Input listing reader.

use std::fs;
use std::path::Path;

use super::RunError;

/// Read a newline-delimited listing of filenames.
///
/// `\n` and `\r\n` terminators are both accepted, and a final line ending
/// in a bare `\r` loses it too; lines are otherwise kept
/// verbatim, so a blank line reaches the classifier as an empty filename.
pub fn read_listing(path: &Path) -> Result<Vec<String>, RunError> {
    let contents = fs::read_to_string(path).map_err(|source| RunError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}
