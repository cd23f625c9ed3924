use crate::daylight::error::DaylightError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to open sunrise cache '{0}'")]
    Open(PathBuf, #[source] rusqlite::Error),

    #[error("Sunrise cache schema version ({found}) is newer than supported ({supported})")]
    SchemaTooNew { found: i32, supported: i32 },

    #[error("Failed to migrate sunrise cache to version {version}")]
    Migration {
        version: i32,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to query sunrise cache for '{name}' on {date}")]
    Query {
        name: String,
        date: chrono::NaiveDate,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to store daylight window for '{name}' on {date}")]
    Insert {
        name: String,
        date: chrono::NaiveDate,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Sunrise/sunset lookup failed: upstream unavailable")]
    UpstreamUnavailable(#[from] DaylightError),
}
