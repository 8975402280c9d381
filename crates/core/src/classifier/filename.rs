//! Filename pattern matching.

use regex_lite::Regex;
use tracing::trace;

use super::config::ClassifierConfig;
use super::error::ClassifyError;
use super::types::{ClassifiedFile, Role};

/// Episode-numbered series: `<prefix>_s<season>_<episode>`.
const SERIES_PATTERN: &str = r"^(.+_s\d+)_\d+$";

/// Splits listing filenames into a canonical title and a role.
///
/// Patterns are compiled once per classifier and the classifier is passed
/// around explicitly.
#[derive(Debug, Clone)]
pub struct FilenameClassifier {
    filename: Regex,
    series: Regex,
}

impl FilenameClassifier {
    /// Creates a classifier accepting the configured extensions.
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassifyError> {
        if config.extensions.is_empty() {
            return Err(ClassifyError::Pattern(
                "at least one extension is required".to_string(),
            ));
        }

        let extensions = config
            .extensions
            .iter()
            .map(|ext| regex_lite::escape(ext))
            .collect::<Vec<_>>()
            .join("|");

        let filename = Regex::new(&format!(
            r"^((?:sd|hd)_\d{{4}}(?:_3d)?_[a-zA-Z0-9_]+)__(?:\w+_)*(trailer|film)\.(?:{})$",
            extensions
        ))
        .map_err(|e| ClassifyError::Pattern(e.to_string()))?;

        let series = Regex::new(SERIES_PATTERN).map_err(|e| ClassifyError::Pattern(e.to_string()))?;

        Ok(Self { filename, series })
    }

    /// Creates a classifier accepting `mp4`, `mpg` and `mkv`.
    pub fn with_defaults() -> Result<Self, ClassifyError> {
        Self::new(&ClassifierConfig::default())
    }

    /// Classifies a single filename.
    pub fn classify(&self, filename: &str) -> Result<ClassifiedFile, ClassifyError> {
        let captures = self
            .filename
            .captures(filename)
            .ok_or_else(|| ClassifyError::format(filename))?;

        let (raw_title, marker) = match (captures.get(1), captures.get(2)) {
            (Some(title), Some(marker)) => (title.as_str(), marker.as_str()),
            _ => return Err(ClassifyError::format(filename)),
        };

        let role = marker
            .parse::<Role>()
            .map_err(|role| ClassifyError::UnknownRole {
                filename: filename.to_string(),
                role,
            })?;

        let title = self.collapse_series(raw_title);
        trace!(filename, %title, %role, "Classified listing entry");

        Ok(ClassifiedFile {
            filename: filename.to_string(),
            title,
            role,
        })
    }

    /// Classifies every entry of a listing, stopping at the first malformed one.
    pub fn classify_all<I, S>(&self, filenames: I) -> Result<Vec<ClassifiedFile>, ClassifyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        filenames
            .into_iter()
            .map(|name| self.classify(name.as_ref()))
            .collect()
    }

    /// Drops a trailing episode number from a series title.
    ///
    /// `hd_0001_show_s01_2` becomes `hd_0001_show_s01`; any other title is
    /// returned unchanged. Applying it twice gives the same result as once.
    pub fn collapse_series(&self, title: &str) -> String {
        match self.series.captures(title).and_then(|c| c.get(1)) {
            Some(season) => season.as_str().to_string(),
            None => title.to_string(),
        }
    }
}
