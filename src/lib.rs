//! Grab a snapshot from a network camera, but only while the sun is up.
//!
//! Sunrise and sunset for each location and day are looked up once from
//! sunrise-sunset.org and cached in `snapshots/<name>/sunrise.sqlite`. Camera
//! logins come from a netrc file and the image is fetched with HTTP digest
//! authentication.

mod cache;
mod capture;
pub mod cli;
mod credentials;
mod daylight;
mod error;
mod snapshot;
#[cfg(test)]
mod test_support;
mod timezone;
mod types;
mod utils;

pub use capture::*;
pub use error::SnapshotError;

pub use cache::error::CacheError;
pub use cache::sunrise_cache::{SunriseCache, CACHE_FILE_NAME};

pub use credentials::error::CredentialsError;
pub use credentials::netrc::{normalize_host, NetrcResolver};

pub use daylight::error::DaylightError;
pub use daylight::sunrise_sunset_client::{SunriseSunsetClient, DEFAULT_SUNRISE_API_URL};
pub use daylight::DaylightOracle;

pub use snapshot::digest_fetcher::DigestFetcher;
pub use snapshot::error::FetchError;
pub use snapshot::writer::save_stream;
pub use snapshot::{Snapshot, SnapshotSource};

pub use timezone::{TimezoneError, TimezoneResolver, TzfResolver};

pub use types::capture_outcome::{CaptureOutcome, SkipReason};
pub use types::credential::Credential;
pub use types::daylight_window::{DaylightWindow, SunTimes};
pub use types::lat_lon::LatLon;
