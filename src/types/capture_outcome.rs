//! Result of a single capture run that did not fail.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::fmt;
use std::path::PathBuf;

/// Why a capture run ended without writing an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `now` was not strictly between sunrise and sunset, and the run was not forced.
    OutsideDaylight {
        now: DateTime<Utc>,
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// The camera answered with a non-success status.
    HttpStatus(StatusCode),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::OutsideDaylight {
                now,
                sunrise,
                sunset,
            } => write!(
                f,
                "{} is outside the daylight window {} - {}",
                now, sunrise, sunset
            ),
            SkipReason::HttpStatus(status) => write!(f, "camera responded with {}", status),
        }
    }
}

/// Both variants are successful outcomes; the process exits with status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(PathBuf),
    Skipped(SkipReason),
}

impl CaptureOutcome {
    pub fn is_captured(&self) -> bool {
        matches!(self, CaptureOutcome::Captured(_))
    }
}
