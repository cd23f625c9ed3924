//! Sunrise/sunset data as it comes back from the upstream API and as it is
//! stored in the per-location cache.

use chrono::{DateTime, NaiveDate, Utc};

/// Sunrise and sunset instants for one location and one day, as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// A cached daylight window: one row of the `sunrises` table.
///
/// There is at most one window per (`name`, `date`) pair. Windows are never
/// updated once written, and `sunrise <= sunset` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct DaylightWindow {
    /// Auto-incremented row id assigned by the store.
    pub id: i64,
    /// Location identifier, also used as the snapshot directory name.
    pub name: String,
    /// Local calendar date at the location this window belongs to.
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl DaylightWindow {
    /// True when `now` lies strictly between sunrise and sunset.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.sunrise < now && now < self.sunset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> DaylightWindow {
        DaylightWindow {
            id: 1,
            name: "raleigh".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            latitude: 35.800783,
            longitude: -78.645814,
            sunrise: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            sunset: Utc.with_ymd_and_hms(2024, 6, 1, 23, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_contains_is_strict_at_both_ends() {
        let w = window();
        assert!(!w.contains(w.sunrise));
        assert!(!w.contains(w.sunset));
        assert!(w.contains(Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap()));
        assert!(!w.contains(Utc.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap()));
    }
}
