use crate::snapshot::error::FetchError;
use log::info;
use std::io::{self, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Streams `reader` into a temporary file next to `path`, then renames it onto
/// `path`. A failed download leaves no partial file behind.
pub fn save_stream(reader: &mut dyn Read, path: &Path) -> Result<u64, FetchError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp_file =
        NamedTempFile::new_in(dir).map_err(|e| FetchError::TempFile(dir.to_path_buf(), e))?;

    let written = io::copy(reader, &mut temp_file)
        .and_then(|written| temp_file.flush().map(|_| written))
        .map_err(|e| FetchError::Download(path.to_path_buf(), e))?;

    temp_file
        .persist(path)
        .map_err(|e| FetchError::Persist(path.to_path_buf(), e))?;
    info!("Wrote {} bytes to {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenReader {
        sent: bool,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "camera hung up"));
            }
            self.sent = true;
            buf[..4].copy_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);
            Ok(4)
        }
    }

    #[test]
    fn test_save_stream_writes_all_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpg");
        let mut body: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];

        let written = save_stream(&mut body, &path).unwrap();

        assert_eq!(written, 4);
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }

    #[test]
    fn test_interrupted_stream_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpg");

        let result = save_stream(&mut BrokenReader { sent: false }, &path);

        assert!(matches!(result, Err(FetchError::Download(..))));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
