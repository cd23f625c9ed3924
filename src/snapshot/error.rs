use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build camera HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Could not answer digest challenge from {url}: {message}")]
    DigestChallenge { url: String, message: String },

    #[error("Failed to create temporary snapshot file in '{0}'")]
    TempFile(PathBuf, #[source] std::io::Error),

    #[error("Failed to stream snapshot into '{0}'")]
    Download(PathBuf, #[source] std::io::Error),

    #[error("Failed to move snapshot into place at '{0}'")]
    Persist(PathBuf, #[source] tempfile::PersistError),
}
