//! Observability infrastructure for logging and tracing
//!
//! Installs the process-wide `tracing` subscriber. Log lines go to stderr so
//! that stdout stays free for the reconciled output.
//!
//! ## Filter Precedence
//! 1. `RUST_LOG`, when set and non-empty
//! 2. `LoggingConfig::level`

use daybook_domain::{DaybookError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Build the `EnvFilter` for the given logging configuration
///
/// # Errors
/// Returns `DaybookError::Config` if the directive cannot be parsed.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_new(&directives)
        .map_err(|e| DaybookError::Config(format!("Invalid log filter '{directives}': {e}")))
}

/// Install the global tracing subscriber
///
/// # Errors
/// Returns `DaybookError::Config` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed
        .map_err(|e| DaybookError::Config(format!("Failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_targeted_directives() {
        let config = LoggingConfig { level: "warn,daybook_core=debug".to_string(), json: false };

        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_build_filter_rejects_bad_level() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            // RUST_LOG overrides the configured level; nothing to assert.
            return;
        }

        let config = LoggingConfig { level: "daybook_core=loudest".to_string(), json: false };

        assert!(matches!(build_filter(&config), Err(DaybookError::Config(_))));
    }

    #[test]
    fn test_second_install_is_an_error_not_a_panic() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);

        assert!(matches!(init_tracing(&config), Err(DaybookError::Config(_))));
    }
}
