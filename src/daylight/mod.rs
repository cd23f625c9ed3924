pub mod error;
pub mod sunrise_sunset_client;

use crate::daylight::error::DaylightError;
use crate::types::daylight_window::SunTimes;
use crate::types::lat_lon::LatLon;
use chrono::NaiveDate;

/// Source of sunrise/sunset instants for a location and day.
///
/// Implementations are pure queries and hold no state between calls.
pub trait DaylightOracle {
    fn fetch(&self, location: LatLon, date: NaiveDate) -> Result<SunTimes, DaylightError>;
}
