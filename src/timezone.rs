//! Maps coordinates to an IANA time zone, used for the local date and the
//! snapshot file name.

use crate::types::lat_lon::LatLon;
use chrono_tz::Tz;
use log::debug;
use thiserror::Error;
use tzf_rs::DefaultFinder;

#[derive(Debug, Error)]
pub enum TimezoneError {
    #[error("No time zone found at {0}")]
    NotFound(LatLon),

    #[error("Unknown time zone id '{0}'")]
    Unknown(String),
}

pub trait TimezoneResolver {
    fn resolve(&self, location: LatLon) -> Result<Tz, TimezoneError>;
}

/// A fixed zone ignores the coordinates.
impl TimezoneResolver for Tz {
    fn resolve(&self, _location: LatLon) -> Result<Tz, TimezoneError> {
        Ok(*self)
    }
}

/// Polygon lookup backed by the boundary data bundled with `tzf-rs`.
pub struct TzfResolver {
    finder: DefaultFinder,
}

impl TzfResolver {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver for TzfResolver {
    fn resolve(&self, location: LatLon) -> Result<Tz, TimezoneError> {
        let name = self
            .finder
            .get_tz_name(location.longitude(), location.latitude());
        if name.is_empty() {
            return Err(TimezoneError::NotFound(location));
        }
        debug!("Time zone at {} is {}", location, name);
        name.parse::<Tz>()
            .map_err(|_| TimezoneError::Unknown(name.to_string()))
    }
}
