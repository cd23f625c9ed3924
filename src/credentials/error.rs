use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("{file} does not exist. Create it with a line like: machine <host> login <Username> password <Password>", file = .path.display())]
    FileMissing { path: PathBuf },

    #[error("{key} not found in {file}. Example: machine {key} login <Username> password <Password>", file = .path.display())]
    NotFound { key: String, path: PathBuf },

    #[error("Malformed credentials file {file}: {reason}", file = .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to read credentials file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine home directory for the default credentials file")]
    HomeDirResolution,
}
