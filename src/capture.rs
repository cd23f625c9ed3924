//! The capture run: load or create today's daylight window, decide whether to
//! shoot, and save the camera image under a local-time file name.

use crate::cache::sunrise_cache::SunriseCache;
use crate::credentials::netrc::NetrcResolver;
use crate::daylight::DaylightOracle;
use crate::error::SnapshotError;
use crate::snapshot::writer::save_stream;
use crate::snapshot::{Snapshot, SnapshotSource};
use crate::timezone::TimezoneResolver;
use crate::types::capture_outcome::{CaptureOutcome, SkipReason};
use crate::types::daylight_window::DaylightWindow;
use crate::types::lat_lon::LatLon;
use crate::utils::ensure_dir_exists;
use bon::{bon, Builder};
use chrono::{DateTime, TimeZone, Utc};
use log::info;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "snapshots";

/// One capture attempt for one camera at one location.
///
/// # Examples
///
/// ```
/// use axis_snapshot::{CaptureRequest, LatLon};
///
/// let request = CaptureRequest::builder()
///     .url("https://camera.example.com/axis-cgi/jpg/image.cgi")
///     .name("raleigh")
///     .location(LatLon(35.800783, -78.645814))
///     .build();
/// assert!(!request.force);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct CaptureRequest {
    #[builder(into)]
    pub url: String,
    /// Location identifier; also the cache and output directory name.
    #[builder(into)]
    pub name: String,
    pub location: LatLon,
    /// Capture even outside the daylight window.
    #[builder(default)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Skip,
}

/// Proceed when forced, or when `now` is strictly between sunrise and sunset.
pub fn decide(window: &DaylightWindow, now: DateTime<Utc>, force: bool) -> Decision {
    if force || window.contains(now) {
        Decision::Proceed
    } else {
        Decision::Skip
    }
}

/// `YYYYMMDD-HHMMSS±ZZZZ_<name>.jpg`, in the zone `local_now` carries.
pub fn snapshot_file_name<Tz>(local_now: &DateTime<Tz>, name: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}_{}.jpg", local_now.format("%Y%m%d-%H%M%S%z"), name)
}

/// Runs capture attempts. Every collaborator is handed in explicitly.
pub struct CaptureController {
    output_dir: PathBuf,
    oracle: Box<dyn DaylightOracle>,
    timezones: Box<dyn TimezoneResolver>,
    credentials: NetrcResolver,
    fetcher: Box<dyn SnapshotSource>,
}

#[bon]
impl CaptureController {
    /// Builds a controller.
    ///
    /// * `.output_dir(PathBuf)`: Optional. Root for the per-location directories. Defaults to `snapshots`.
    /// * `.oracle(..)`: **Required.** Where sunrise/sunset come from on a cache miss.
    /// * `.timezones(..)`: **Required.** Maps the location to its IANA zone.
    /// * `.credentials(NetrcResolver)`: **Required.** Camera login lookup.
    /// * `.fetcher(..)`: **Required.** Downloads the image.
    #[builder]
    pub fn new(
        output_dir: Option<PathBuf>,
        oracle: Box<dyn DaylightOracle>,
        timezones: Box<dyn TimezoneResolver>,
        credentials: NetrcResolver,
        fetcher: Box<dyn SnapshotSource>,
    ) -> Self {
        Self {
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            oracle,
            timezones,
            credentials,
            fetcher,
        }
    }

    pub fn location_dir(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    pub fn run(&self, request: &CaptureRequest) -> Result<CaptureOutcome, SnapshotError> {
        self.run_at(request, Utc::now())
    }

    /// Same as [`CaptureController::run`] with the capture instant supplied by the caller.
    pub fn run_at(
        &self,
        request: &CaptureRequest,
        now: DateTime<Utc>,
    ) -> Result<CaptureOutcome, SnapshotError> {
        let dir = self.location_dir(&request.name);
        ensure_dir_exists(&dir).map_err(|e| SnapshotError::CaptureDirCreation(dir.clone(), e))?;

        // The cache is keyed by the calendar date at the camera, not the host.
        let zone = self.timezones.resolve(request.location)?;
        let local_now = now.with_timezone(&zone);
        let today = local_now.date_naive();

        let cache = SunriseCache::open(&dir, self.oracle.as_ref())?;
        let window = cache.get_or_create(&request.name, today, request.location)?;

        if decide(&window, now, request.force) == Decision::Skip {
            let reason = SkipReason::OutsideDaylight {
                now,
                sunrise: window.sunrise,
                sunset: window.sunset,
            };
            info!("Skipping capture for '{}': {}", request.name, reason);
            return Ok(CaptureOutcome::Skipped(reason));
        }
        if !window.contains(now) {
            info!("Forcing capture for '{}' outside daylight", request.name);
        }

        let path = dir.join(snapshot_file_name(&local_now, &request.name));
        self.capture(request, &path)
    }

    fn capture(
        &self,
        request: &CaptureRequest,
        path: &Path,
    ) -> Result<CaptureOutcome, SnapshotError> {
        let credential = self.credentials.resolve(&request.url)?;
        match self.fetcher.fetch(&request.url, &credential)? {
            Snapshot::Image(mut reader) => {
                save_stream(reader.as_mut(), path)?;
                Ok(CaptureOutcome::Captured(path.to_path_buf()))
            }
            Snapshot::Rejected(status) => {
                info!(
                    "Skipping capture for '{}': camera responded with {}",
                    request.name, status
                );
                Ok(CaptureOutcome::Skipped(SkipReason::HttpStatus(status)))
            }
        }
    }
}
