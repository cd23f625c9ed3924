use chrono::{DateTime, Utc};
use thiserror::Error;

/// Every way the sunrise/sunset lookup can fail. Callers treat all of them as
/// "upstream unavailable" and abort the capture.
#[derive(Debug, Error)]
pub enum DaylightError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Expected a JSON response from {url}, got content type '{content_type}'")]
    UnexpectedContentType { url: String, content_type: String },

    #[error("Failed to parse JSON response from {0}")]
    JsonParse(String, #[source] serde_json::Error),

    #[error("Sunrise API reported status '{0}'")]
    ApiStatus(String),

    #[error("Sunrise {sunrise} is after sunset {sunset}")]
    InvalidWindow {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
}
