//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Daybook
///
/// Every variant is terminal for the run that produced it: reconciliation is
/// a one-shot transformation and nothing in this workspace retries.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DaybookError {
    /// A record's time field is not a parseable civil date-time.
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// The configured zone identifier is not a known IANA zone.
    #[error("Timezone unavailable: {0}")]
    TimezoneUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for DaybookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for DaybookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Daybook operations
pub type Result<T> = std::result::Result<T, DaybookError>;
