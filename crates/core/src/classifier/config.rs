//! Configuration for the classifier module.

use serde::{Deserialize, Serialize};

/// Configuration for filename classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Media container extensions accepted after the role marker (without the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["mp4".to_string(), "mpg".to_string(), "mkv".to_string()]
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl ClassifierConfig {
    /// Replaces the accepted extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
}
