//! Configuration for the report module.

use serde::{Deserialize, Serialize};

/// Configuration for report lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// `chrono` format string for the run date column.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Print each report line to standard output as it is produced.
    #[serde(default = "default_true")]
    pub echo: bool,
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            echo: true,
        }
    }
}
