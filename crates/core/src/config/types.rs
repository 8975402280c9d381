use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::backup::BackupConfig;
use crate::classifier::ClassifierConfig;
use crate::report::ReportConfig;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// File locations used by a run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Newline-delimited listing of media filenames
    #[serde(default = "default_input_path")]
    pub input: PathBuf,
    /// Tab-separated report of newly completed titles
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
    /// Ledger of titles reported by earlier runs
    #[serde(default = "default_ledger_path")]
    pub ledger: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input_path(),
            output: default_output_path(),
            ledger: default_ledger_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("database.db")
}

impl Config {
    /// Resolve relative paths against `base`.
    pub fn rebased(mut self, base: &std::path::Path) -> Self {
        for path in [
            &mut self.paths.input,
            &mut self.paths.output,
            &mut self.paths.ledger,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.paths.input, PathBuf::from("input.txt"));
        assert_eq!(config.paths.output, PathBuf::from("output.txt"));
        assert_eq!(config.paths.ledger, PathBuf::from("database.db"));
        assert_eq!(config.backup.suffix, ".backup");
        assert!(!config.backup.strict);
        assert_eq!(config.classifier.extensions, vec!["mp4", "mpg", "mkv"]);
        assert_eq!(config.report.date_format, "%d.%m.%Y");
        assert!(config.report.echo);
    }

    #[test]
    fn test_rebased_only_touches_relative_paths() {
        let mut config = Config::default();
        config.paths.ledger = PathBuf::from("/var/lib/ledger.db");

        let config = config.rebased(Path::new("/srv/media"));
        assert_eq!(config.paths.input, PathBuf::from("/srv/media/input.txt"));
        assert_eq!(config.paths.output, PathBuf::from("/srv/media/output.txt"));
        assert_eq!(config.paths.ledger, PathBuf::from("/var/lib/ledger.db"));
    }
}
