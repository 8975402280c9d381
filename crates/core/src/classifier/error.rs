//! Error types for the classifier module.

use thiserror::Error;

/// Errors that can occur while classifying a filename.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The filename does not follow the `<title>__<tags>_<role>.<ext>` convention.
    #[error("{filename}: wrong filename")]
    Format { filename: String },

    /// The role marker is neither `film` nor `trailer`.
    #[error("{filename}: not trailer or film ({role})")]
    UnknownRole { filename: String, role: String },

    /// A configured extension produced an invalid pattern.
    #[error("Invalid classifier pattern: {0}")]
    Pattern(String),
}

impl ClassifyError {
    /// Creates a format error for the given filename.
    pub fn format(filename: impl Into<String>) -> Self {
        Self::Format {
            filename: filename.into(),
        }
    }

    /// The offending filename, if the error concerns one.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Format { filename } | Self::UnknownRole { filename, .. } => Some(filename),
            Self::Pattern(_) => None,
        }
    }
}
