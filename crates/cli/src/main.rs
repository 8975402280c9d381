use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trailerpair_core::{
    load_config, load_config_or_default, validate_config, BatchRunner, Config,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming the config file
const CONFIG_ENV: &str = "TRAILERPAIR_CONFIG";

/// Environment variable selecting the log format (`json` or human-readable)
const LOG_FORMAT_ENV: &str = "TRAILERPAIR_LOG_FORMAT";

/// Config file looked up in the working directory when `TRAILERPAIR_CONFIG` is unset
const DEFAULT_CONFIG_FILE: &str = "trailerpair.toml";

fn main() {
    if let Err(e) = run() {
        if tracing::enabled!(Level::ERROR) {
            error!("Fatal error: {:#}", e);
        } else {
            // Logging is filtered out or not yet initialized
            eprintln!("trailerpair: fatal error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging; stdout is reserved for report lines
    let json_logs = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json().with_writer(io::stderr)))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr)))
        .init();

    info!("trailerpair {}", VERSION);

    let config = resolve_config()?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Input listing: {:?}", config.paths.input);
    info!("Report output: {:?}", config.paths.output);
    info!("Ledger: {:?}", config.paths.ledger);

    let runner = BatchRunner::new(config).context("Failed to set up run")?;

    let stdout = io::stdout();
    let summary = runner
        .run_today(&mut stdout.lock())
        .context("Run aborted")?;

    if summary.files_written {
        info!(
            "{} new of {} complete titles, {} titles in ledger",
            summary.newly_reported(),
            summary.complete_titles,
            summary.ledger_titles
        );
    }

    Ok(())
}

/// Load the config named by `TRAILERPAIR_CONFIG`, or `trailerpair.toml` if present.
///
/// Relative paths inside a config file resolve against the file's directory.
fn resolve_config() -> Result<Config> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!("Loading configuration from {:?}", path);
            let config = load_config(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?;
            Ok(rebase_on_parent(config, &path))
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                info!("Loading configuration from {:?}", path);
            } else {
                info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            }
            load_config_or_default(path)
                .with_context(|| format!("Failed to load config from {:?}", path))
        }
    }
}

fn rebase_on_parent(config: Config, config_path: &Path) -> Config {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => config.rebased(parent),
        _ => config,
    }
}
