//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DAYBOOK_TIMEZONE`: IANA zone records are read in (required)
//! - `DAYBOOK_LOG_LEVEL`: `EnvFilter` directive (default `info`)
//! - `DAYBOOK_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./daybook.json` or `./daybook.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../daybook.json` or `../daybook.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use daybook_domain::{Config, DaybookError, LoggingConfig, ReconcileConfig, Result};

const ENV_TIMEZONE: &str = "DAYBOOK_TIMEZONE";
const ENV_LOG_LEVEL: &str = "DAYBOOK_LOG_LEVEL";
const ENV_LOG_JSON: &str = "DAYBOOK_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] = ["daybook.json", "daybook.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DaybookError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration, or the defaults when none is provided anywhere
///
/// Uses the environment when `DAYBOOK_TIMEZONE` is set, otherwise the first
/// probed config file. Defaults apply only when neither exists; a file that
/// is found but does not parse is an error.
///
/// # Errors
/// Returns `DaybookError::Config` if a probed file cannot be read or parsed.
pub fn load_or_default() -> Result<Config> {
    if std::env::var_os(ENV_TIMEZONE).is_none() && probe_config_paths().is_none() {
        tracing::debug!("No configuration found, using defaults");
        return Ok(Config::default());
    }

    load()
}

/// Load configuration from environment variables
///
/// Only `DAYBOOK_TIMEZONE` is required; logging settings fall back to their
/// defaults.
///
/// # Errors
/// Returns `DaybookError::Config` if `DAYBOOK_TIMEZONE` is missing or empty.
pub fn load_from_env() -> Result<Config> {
    let timezone = env_var(ENV_TIMEZONE)?;
    if timezone.trim().is_empty() {
        return Err(DaybookError::Config(format!("{ENV_TIMEZONE} is set but empty")));
    }

    let defaults = LoggingConfig::default();
    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or(defaults.level);
    let json = env_bool(ENV_LOG_JSON, defaults.json);

    Ok(Config {
        reconcile: ReconcileConfig { timezone },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DaybookError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DaybookError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DaybookError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DaybookError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DaybookError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DaybookError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DaybookError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
        candidates.push(cwd.join("../daybook.json"));
        candidates.push(cwd.join("../daybook.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| DaybookError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
