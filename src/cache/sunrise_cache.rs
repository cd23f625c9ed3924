//! Per-location SQLite cache of daylight windows, one row per (name, date).

use crate::cache::error::CacheError;
use crate::cache::migrations::run_migrations;
use crate::daylight::DaylightOracle;
use crate::types::daylight_window::{DaylightWindow, SunTimes};
use crate::types::lat_lon::LatLon;
use chrono::{DateTime, NaiveDate, Utc};
use log::info;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};

pub const CACHE_FILE_NAME: &str = "sunrise.sqlite";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct SunriseCache<'a> {
    conn: Connection,
    path: PathBuf,
    oracle: &'a dyn DaylightOracle,
}

fn conversion_error(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn parse_instant(row: &Row, idx: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    let value: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn row_to_window(row: &Row) -> Result<DaylightWindow, rusqlite::Error> {
    let date: String = row.get(2)?;
    Ok(DaylightWindow {
        id: row.get(0)?,
        name: row.get(1)?,
        date: NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| conversion_error(2, e))?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
        sunrise: parse_instant(row, 5)?,
        sunset: parse_instant(row, 6)?,
    })
}

impl<'a> SunriseCache<'a> {
    /// Opens `dir/sunrise.sqlite`, creating the file and its schema on first use.
    pub fn open(dir: &Path, oracle: &'a dyn DaylightOracle) -> Result<Self, CacheError> {
        let path = dir.join(CACHE_FILE_NAME);
        let mut conn = Connection::open(&path).map_err(|e| CacheError::Open(path.clone(), e))?;
        run_migrations(&mut conn)?;
        Ok(Self { conn, path, oracle })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn find(&self, name: &str, date: NaiveDate) -> Result<Option<DaylightWindow>, CacheError> {
        self.conn
            .query_row(
                "SELECT id, name, date, lat, lng, sunrise_time, sunset_time
                 FROM sunrises WHERE name = ?1 AND date = ?2",
                params![name, date.format(DATE_FORMAT).to_string()],
                row_to_window,
            )
            .optional()
            .map_err(|source| CacheError::Query {
                name: name.to_string(),
                date,
                source,
            })
    }

    /// Returns the cached window for (`name`, `date`), asking the oracle and
    /// storing its answer only when no row exists yet.
    pub fn get_or_create(
        &self,
        name: &str,
        date: NaiveDate,
        location: LatLon,
    ) -> Result<DaylightWindow, CacheError> {
        if let Some(window) = self.find(name, date)? {
            info!("Cache hit for '{}' on {} in {:?}", name, date, self.path);
            return Ok(window);
        }

        info!("Cache miss for '{}' on {}, asking upstream", name, date);
        let times = self.oracle.fetch(location, date)?;
        self.insert(name, date, location, times)
    }

    fn insert(
        &self,
        name: &str,
        date: NaiveDate,
        location: LatLon,
        times: SunTimes,
    ) -> Result<DaylightWindow, CacheError> {
        self.conn
            .execute(
                "INSERT INTO sunrises (name, date, lat, lng, sunrise_time, sunset_time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    name,
                    date.format(DATE_FORMAT).to_string(),
                    location.latitude(),
                    location.longitude(),
                    times.sunrise.to_rfc3339(),
                    times.sunset.to_rfc3339(),
                ],
            )
            .map_err(|source| CacheError::Insert {
                name: name.to_string(),
                date,
                source,
            })?;

        Ok(DaylightWindow {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            date,
            latitude: location.latitude(),
            longitude: location.longitude(),
            sunrise: times.sunrise,
            sunset: times.sunset,
        })
    }
}
