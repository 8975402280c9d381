//! Types produced by filename classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a file is the main feature or its promotional trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Film,
    Trailer,
}

impl Role {
    /// The role marker as it appears in a filename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Film => "film",
            Role::Trailer => "trailer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "film" => Ok(Role::Film),
            "trailer" => Ok(Role::Trailer),
            other => Err(other.to_string()),
        }
    }
}

/// A single listing entry after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    /// The filename exactly as listed.
    pub filename: String,
    /// Canonical title, with series episode numbers collapsed.
    pub title: String,
    pub role: Role,
}
