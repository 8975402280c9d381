//! Per-title grouping types.

use serde::{Deserialize, Serialize};

/// All files listed for one canonical title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleGroup {
    /// Canonical title key.
    pub title: String,
    /// Film files in listing order. Duplicates are kept.
    pub film_files: Vec<String>,
    /// The trailer, if one was listed. A later listing entry replaces an earlier one.
    pub trailer_file: Option<String>,
}

impl TitleGroup {
    /// Creates an empty group for a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            film_files: Vec::new(),
            trailer_file: None,
        }
    }

    /// Appends a film file.
    pub fn push_film(&mut self, filename: impl Into<String>) {
        self.film_files.push(filename.into());
    }

    /// Sets the trailer, returning the one it replaced.
    pub fn set_trailer(&mut self, filename: impl Into<String>) -> Option<String> {
        self.trailer_file.replace(filename.into())
    }

    /// A group is complete once it has at least one film and a trailer.
    pub fn is_complete(&self) -> bool {
        !self.film_files.is_empty() && self.trailer_file.is_some()
    }
}
