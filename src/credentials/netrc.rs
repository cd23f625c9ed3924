//! Camera credentials from a netrc file (`machine <host> login <user> password <pass>`).

use crate::credentials::error::CredentialsError;
use crate::types::credential::Credential;
use log::debug;
use std::path::{Path, PathBuf};

const NETRC_ENV_VAR: &str = "NETRC";
const NETRC_FILE_NAME: &str = ".netrc";

/// Strips the scheme, a leading `www.`, surrounding whitespace and trailing
/// slashes, producing the key looked up in the netrc file.
///
/// ```
/// use axis_snapshot::normalize_host;
///
/// assert_eq!(normalize_host("https://www.example.com/path/"), "example.com/path");
/// assert_eq!(normalize_host("example.com/path"), "example.com/path");
/// ```
pub fn normalize_host(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let without_scheme = if lower.starts_with("https://") {
        &trimmed["https://".len()..]
    } else if lower.starts_with("http://") {
        &trimmed["http://".len()..]
    } else {
        trimmed
    };
    let without_www = if without_scheme.to_ascii_lowercase().starts_with("www.") {
        &without_scheme["www.".len()..]
    } else {
        without_scheme
    };
    without_www.trim().trim_matches('/').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NetrcEntry {
    machine: Option<String>,
    login: String,
    password: String,
}

impl NetrcEntry {
    fn new(machine: Option<String>) -> Self {
        Self {
            machine,
            login: String::new(),
            password: String::new(),
        }
    }
}

const KEYWORDS: [&str; 6] = ["machine", "default", "login", "password", "account", "macdef"];

/// Splits the whole file into tokens. Comments end at the line break and a
/// `macdef` body runs until the next empty line; neither yields tokens.
fn tokenize(contents: &str) -> Result<Vec<&str>, String> {
    let mut tokens = Vec::new();
    let mut lines = contents.lines();

    while let Some(line) = lines.next() {
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if word.starts_with('#') {
                break;
            }
            if word == "macdef" {
                if words.next().is_none() {
                    return Err("'macdef' without a macro name".to_string());
                }
                for body_line in lines.by_ref() {
                    if body_line.trim().is_empty() {
                        break;
                    }
                }
                break;
            }
            tokens.push(word);
        }
    }
    Ok(tokens)
}

/// Parses netrc contents into entries, in file order. `machine None` marks the
/// `default` entry and `account` values are ignored.
fn parse_netrc(contents: &str) -> Result<Vec<NetrcEntry>, String> {
    let mut entries: Vec<NetrcEntry> = Vec::new();
    let mut tokens = tokenize(contents)?.into_iter();

    while let Some(token) = tokens.next() {
        match token {
            "machine" => {
                let host = tokens
                    .next()
                    .filter(|host| !KEYWORDS.contains(host))
                    .ok_or_else(|| "'machine' without a host name".to_string())?;
                entries.push(NetrcEntry::new(Some(host.to_string())));
            }
            "default" => entries.push(NetrcEntry::new(None)),
            "login" | "password" | "account" => {
                let value = tokens
                    .next()
                    .filter(|value| !KEYWORDS.contains(value))
                    .ok_or_else(|| format!("'{}' without a value", token))?;
                let entry = entries
                    .last_mut()
                    .ok_or_else(|| format!("'{}' before any machine or default", token))?;
                match token {
                    "login" => entry.login = value.to_string(),
                    "password" => entry.password = value.to_string(),
                    _ => {}
                }
            }
            other => return Err(format!("unexpected token '{}'", other)),
        }
    }
    Ok(entries)
}

/// Resolves camera credentials from a netrc file, fresh on every call.
#[derive(Debug, Clone)]
pub struct NetrcResolver {
    path: PathBuf,
}

impl NetrcResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `$NETRC` when set, otherwise `~/.netrc`.
    pub fn from_env() -> Result<Self, CredentialsError> {
        if let Some(path) = std::env::var_os(NETRC_ENV_VAR) {
            return Ok(Self::new(path));
        }
        dirs::home_dir()
            .map(|home| Self::new(home.join(NETRC_FILE_NAME)))
            .ok_or(CredentialsError::HomeDirResolution)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resolve(&self, url: &str) -> Result<Credential, CredentialsError> {
        let key = normalize_host(url);
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CredentialsError::FileMissing {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(CredentialsError::Read(self.path.clone(), e)),
        };

        let entries = parse_netrc(&contents).map_err(|reason| CredentialsError::Parse {
            path: self.path.clone(),
            reason,
        })?;
        // A later entry for the same machine overrides an earlier one.
        let entry = entries
            .iter()
            .rev()
            .find(|entry| entry.machine.as_deref() == Some(key.as_str()))
            .or_else(|| entries.iter().rev().find(|entry| entry.machine.is_none()))
            .ok_or_else(|| CredentialsError::NotFound {
                key: key.clone(),
                path: self.path.clone(),
            })?;

        debug!("Resolved credentials for {} from {:?}", key, self.path);
        Ok(Credential::new(entry.login.clone(), entry.password.clone()))
    }
}
