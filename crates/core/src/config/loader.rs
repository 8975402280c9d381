use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix of environment variables overriding configuration values.
///
/// Sections are separated by a double underscore, e.g. `TRAILERPAIR_PATHS__INPUT`.
pub const ENV_PREFIX: &str = "TRAILERPAIR_";

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(base_figment().merge(Toml::file(path)))
}

/// Load configuration from file if it exists, otherwise from defaults,
/// with environment variable overrides in both cases
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        extract(base_figment())
    }
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[paths]
input = "listing.txt"

[backup]
strict = true
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("listing.txt"));
        assert_eq!(config.paths.output, PathBuf::from("output.txt"));
        assert!(config.backup.strict);
    }

    #[test]
    fn test_load_config_from_str_empty_is_default() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_from_str_wrong_type() {
        let toml = r#"
[backup]
strict = "sometimes"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/trailerpair.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[paths]
ledger = "reported.db"

[classifier]
extensions = ["mp4", "avi"]
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.paths.ledger, PathBuf::from("reported.db"));
        assert_eq!(config.classifier.extensions, vec!["mp4", "avi"]);
        assert_eq!(config.report.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "trailerpair.toml",
                r#"
[paths]
input = "from_file.txt"
output = "report.txt"
"#,
            )?;
            jail.set_env("TRAILERPAIR_PATHS__INPUT", "from_env.txt");
            jail.set_env("TRAILERPAIR_REPORT__ECHO", "false");

            let config = load_config(Path::new("trailerpair.toml")).unwrap();
            assert_eq!(config.paths.input, PathBuf::from("from_env.txt"));
            assert_eq!(config.paths.output, PathBuf::from("report.txt"));
            assert!(!config.report.echo);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("TRAILERPAIR_BACKUP__SUFFIX", ".bak");

            let config = load_config_or_default(Path::new("absent.toml")).unwrap();
            assert_eq!(config.paths.input, PathBuf::from("input.txt"));
            assert_eq!(config.backup.suffix, ".bak");
            Ok(())
        });
    }
}
