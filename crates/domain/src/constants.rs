//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Zone used when neither the environment nor a config file names one.
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `chrono` format string for `startTime` / `endTime` (`yyyy-MM-dd HH:mm`).
pub const SUMMARY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Joins treatment names when two summaries are merged.
pub const TREATMENT_SEPARATOR: &str = ", ";

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;

// Upstream `state` discriminator values
pub const STATE_BOOKED: &str = "booked";
pub const STATE_DELETED: &str = "deleted";
