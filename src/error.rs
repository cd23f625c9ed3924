use crate::cache::error::CacheError;
use crate::credentials::error::CredentialsError;
use crate::snapshot::error::FetchError;
use crate::timezone::TimezoneError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Timezone(#[from] TimezoneError),

    #[error("Failed to create snapshot directory '{0}'")]
    CaptureDirCreation(PathBuf, #[source] std::io::Error),
}

impl SnapshotError {
    /// True when the sunrise/sunset lookup failed.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, SnapshotError::Cache(CacheError::UpstreamUnavailable(_)))
    }
}
