//! Byte sources an extraction can read from
//!
//! A source is only a description; `open` acquires the underlying handle
//! (file descriptor, borrowed buffer or fetched body) right before decoding.
//! The returned reader is owned by the caller and released when dropped.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};

use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{DecodeError, DecodeResult};

/// Read buffer used for local files
const FILE_BUFFER_CAPACITY: usize = 1024 * 1024;

/// Where the bytes of a TIFF file come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteSource {
    /// A file on the local filesystem
    Path(PathBuf),
    /// A file already held in memory (e.g. a pre-upload buffer)
    Buffer(Vec<u8>),
    /// A remote file, typically a short-lived presigned URL
    Url(String),
}

impl ByteSource {
    /// Interprets a command-line argument as a source
    ///
    /// Arguments starting with `http://` or `https://` are URLs, anything
    /// else is a local path.
    pub fn from_argument(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            ByteSource::Url(arg.to_string())
        } else {
            ByteSource::Path(PathBuf::from(arg))
        }
    }

    /// Filename to use for satellite identification when the caller has none
    pub fn default_filename(&self) -> Option<String> {
        match self {
            ByteSource::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            ByteSource::Buffer(_) => None,
            ByteSource::Url(url) => {
                let without_query = url.split(['?', '#']).next().unwrap_or(url);
                without_query
                    .rsplit('/')
                    .next()
                    .filter(|segment| !segment.is_empty() && !segment.contains(':'))
                    .map(str::to_string)
            }
        }
    }

    /// Short description for log lines and CLI output
    pub fn describe(&self) -> String {
        match self {
            ByteSource::Path(path) => path.display().to_string(),
            ByteSource::Buffer(bytes) => format!("<in-memory buffer, {} bytes>", bytes.len()),
            ByteSource::Url(url) => {
                // Presigned query strings carry credentials
                url.split('?').next().unwrap_or(url).to_string()
            }
        }
    }

    /// Acquires a reader over the source
    ///
    /// # Arguments
    /// * `remote_timeout` - Total timeout for fetching a `Url` source
    pub fn open(&self, remote_timeout: Duration) -> DecodeResult<Box<dyn SeekableReader + '_>> {
        match self {
            ByteSource::Path(path) => open_file(path),
            ByteSource::Buffer(bytes) => {
                debug!("Reading TIFF from in-memory buffer ({} bytes)", bytes.len());
                Ok(Box::new(Cursor::new(bytes.as_slice())))
            }
            ByteSource::Url(url) => {
                let body = fetch_remote(url, remote_timeout)?;
                Ok(Box::new(Cursor::new(body)))
            }
        }
    }
}

fn open_file(path: &Path) -> DecodeResult<Box<dyn SeekableReader>> {
    if !path.exists() {
        return Err(DecodeError::SourceUnavailable(format!(
            "File not found: {}",
            path.display()
        )));
    }

    info!("Opening TIFF file: {}", path.display());
    let file = File::open(path)?;
    Ok(Box::new(BufReader::with_capacity(FILE_BUFFER_CAPACITY, file)))
}

fn fetch_remote(url: &str, timeout: Duration) -> DecodeResult<Vec<u8>> {
    info!("Fetching remote TIFF (timeout {:?})", timeout);

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send()?.error_for_status()?;
    let body = response.bytes()?;

    debug!("Fetched {} bytes", body.len());
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_from_argument_detects_urls() {
        assert_eq!(
            ByteSource::from_argument("https://bucket.example.com/a.tif?X-Amz-Signature=abc"),
            ByteSource::Url("https://bucket.example.com/a.tif?X-Amz-Signature=abc".to_string())
        );
        assert_eq!(
            ByteSource::from_argument("/data/scene.tif"),
            ByteSource::Path(PathBuf::from("/data/scene.tif"))
        );
    }

    #[test]
    fn test_default_filename() {
        let path = ByteSource::Path(PathBuf::from("/data/S2A_MSIL2A_20230101.tif"));
        assert_eq!(path.default_filename().as_deref(), Some("S2A_MSIL2A_20230101.tif"));

        let url = ByteSource::Url("https://host/uploads/LC08_L1TP.TIF?X-Amz-Expires=300".to_string());
        assert_eq!(url.default_filename().as_deref(), Some("LC08_L1TP.TIF"));

        assert_eq!(ByteSource::Buffer(vec![1, 2, 3]).default_filename(), None);
    }

    #[test]
    fn test_describe_hides_presigned_query() {
        let url = ByteSource::Url("https://host/a.tif?X-Amz-Signature=secret".to_string());
        assert_eq!(url.describe(), "https://host/a.tif");
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let source = ByteSource::Path(PathBuf::from("/definitely/not/here.tif"));
        match source.open(Duration::from_secs(1)) {
            Err(DecodeError::SourceUnavailable(msg)) => assert!(msg.contains("not/here.tif")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("opening a missing file should fail"),
        };
    }

    #[test]
    fn test_buffer_source_reads_bytes() {
        let source = ByteSource::Buffer(vec![0x49, 0x49, 42, 0]);
        let mut reader = source.open(Duration::from_secs(1)).unwrap();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, vec![0x49, 0x49, 42, 0]);
    }
}
