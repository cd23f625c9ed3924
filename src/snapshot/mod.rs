pub mod digest_fetcher;
pub mod error;
pub mod writer;

use crate::snapshot::error::FetchError;
use crate::types::credential::Credential;
use reqwest::StatusCode;
use std::fmt;
use std::io::Read;

/// What the camera handed back.
pub enum Snapshot {
    /// Success status; the body is streamed from the reader.
    Image(Box<dyn Read>),
    /// Any non-success final status. Not an error: the capture is skipped.
    Rejected(StatusCode),
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snapshot::Image(_) => f.write_str("Image(..)"),
            Snapshot::Rejected(status) => f.debug_tuple("Rejected").field(status).finish(),
        }
    }
}

/// Something that can fetch one image from a camera URL.
pub trait SnapshotSource {
    fn fetch(&self, url: &str, credential: &Credential) -> Result<Snapshot, FetchError>;
}
