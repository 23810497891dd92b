//! Feed backed by a recorded `appointments.json` response on disk

use std::path::{Path, PathBuf};

use daybook_core::AppointmentFeed;
use daybook_domain::{AppointmentsResponse, DaybookError, Result};

/// Reads a recorded scheduling API response from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    /// Feed reading the response recorded at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the recorded response.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AppointmentFeed for JsonFileFeed {
    fn fetch(&self) -> Result<AppointmentsResponse> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            DaybookError::Io(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        let response = parse_response(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            records = response.appointments().len(),
            "Loaded recorded appointments response"
        );

        Ok(response)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Decode an `appointments.json` response body
///
/// # Errors
/// Returns `DaybookError::Serialization` if the body does not match the
/// response envelope.
pub fn parse_response(body: &str) -> Result<AppointmentsResponse> {
    serde_json::from_str(body)
        .map_err(|e| DaybookError::Serialization(format!("Invalid appointments response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_minimal_envelope() {
        let response = parse_response(r#"{"data": {"appointments": []}}"#).unwrap();

        assert!(response.appointments().is_empty());
    }

    #[test]
    fn test_parse_response_rejects_bare_array() {
        let result = parse_response(r#"[{"state": "deleted"}]"#);

        assert!(matches!(result, Err(DaybookError::Serialization(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let feed = JsonFileFeed::new("/nonexistent/appointments.json");

        assert!(matches!(feed.fetch(), Err(DaybookError::Io(_))));
        assert_eq!(feed.describe(), "file:/nonexistent/appointments.json");
    }
}
