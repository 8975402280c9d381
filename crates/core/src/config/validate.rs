use chrono::format::{Item, StrftimeItems};

use super::{types::Config, ConfigError};
use crate::backup::STAGING_SUFFIX;

/// Validate configuration
/// Currently validates:
/// - Input, output and ledger paths are set and distinct
/// - At least one extension, each plain alphanumeric
/// - Backup suffix is not empty and differs from the staging suffix
/// - Date format is not empty and only uses known specifiers
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let paths = [
        ("paths.input", &config.paths.input),
        ("paths.output", &config.paths.output),
        ("paths.ledger", &config.paths.ledger),
    ];

    for (name, path) in &paths {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                name
            )));
        }
    }

    for (i, (name_a, path_a)) in paths.iter().enumerate() {
        for (name_b, path_b) in &paths[i + 1..] {
            if path_a == path_b {
                return Err(ConfigError::ValidationError(format!(
                    "{} and {} must be different files",
                    name_a, name_b
                )));
            }
        }
    }

    // Classifier validation
    if config.classifier.extensions.is_empty() {
        return Err(ConfigError::ValidationError(
            "classifier.extensions cannot be empty".to_string(),
        ));
    }
    if let Some(ext) = config
        .classifier
        .extensions
        .iter()
        .find(|ext| ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return Err(ConfigError::ValidationError(format!(
            "classifier.extensions contains invalid extension {:?}",
            ext
        )));
    }

    // Backup validation
    if config.backup.suffix.is_empty() {
        return Err(ConfigError::ValidationError(
            "backup.suffix cannot be empty".to_string(),
        ));
    }
    if config.backup.suffix == STAGING_SUFFIX {
        return Err(ConfigError::ValidationError(format!(
            "backup.suffix cannot be {:?}, it is used for staged writes",
            STAGING_SUFFIX
        )));
    }

    // Report validation
    let date_format = &config.report.date_format;
    if date_format.is_empty() {
        return Err(ConfigError::ValidationError(
            "report.date_format cannot be empty".to_string(),
        ));
    }
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::ValidationError(format!(
            "report.date_format {:?} is not a valid format",
            date_format
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_path_fails() {
        let mut config = Config::default();
        config.paths.input = PathBuf::new();
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_same_output_and_ledger_fails() {
        let mut config = Config::default();
        config.paths.output = PathBuf::from("database.db");
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("paths.output and paths.ledger"));
    }

    #[test]
    fn test_validate_no_extensions_fails() {
        let mut config = Config::default();
        config.classifier.extensions.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_extension_with_dot_fails() {
        let mut config = Config::default();
        config.classifier.extensions.push(".avi".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_suffix_fails() {
        let mut config = Config::default();
        config.backup.suffix.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_staging_suffix_fails() {
        let mut config = Config::default();
        config.backup.suffix = ".tmp".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("backup.suffix"));
    }

    #[test]
    fn test_validate_bad_date_format_fails() {
        let mut config = Config::default();
        config.report.date_format = "%d.%m.%!".to_string();
        assert!(validate_config(&config).is_err());

        config.report.date_format = "%Y-%m-%d".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
