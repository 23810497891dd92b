//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_TIMEZONE};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reconciliation configuration
///
/// The zone is fixed for a whole run: every record is resolved against it and
/// every summary is rendered in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// IANA zone name, e.g. `Europe/Berlin`
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `daybook_core=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

impl ReconcileConfig {
    /// Reconcile in the given IANA zone.
    pub fn new(timezone: impl Into<String>) -> Self {
        Self { timezone: timezone.into() }
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self { timezone: default_timezone() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
