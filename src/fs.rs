//! File-content loading for the framing layer.
//!
//! License artifacts (certificates, quotes, TCB lists) are read from disk
//! as whole buffers and fed into the framing path. Open failures and read
//! failures are reported as distinct error kinds so callers can tell a
//! missing artifact apart from a truncated or unreadable one.

use std::path::Path;

use bytes::Bytes;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::error;

use crate::error::{LicwireError, Result};
use crate::protocol::SENTINEL;

/// Read a file's entire content, returning it with a trailing sentinel.
///
/// The appended sentinel lets the returned buffer feed
/// [`frame_terminated`](crate::protocol::frame_terminated) directly.
///
/// An empty file is reported as [`LicwireError::FileIoFail`]: every
/// artifact this service loads is non-empty by construction, so a
/// zero-length read means the artifact is damaged.
///
/// # Errors
///
/// - [`LicwireError::FileOpenFail`] if the file cannot be opened.
/// - [`LicwireError::FileIoFail`] if probing or reading fails, or the
///   file is empty.
pub async fn read_file_content(path: impl AsRef<Path>) -> Result<Bytes> {
    let path = path.as_ref();

    let mut file = File::open(path).await.map_err(|source| {
        error!(path = %path.display(), %source, "failed to open file");
        LicwireError::FileOpenFail {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let size = probe_size(path, &file).await?;

    let mut content = Vec::with_capacity(size as usize + 1);
    file.read_to_end(&mut content).await.map_err(|source| {
        error!(path = %path.display(), %source, "failed to read file");
        LicwireError::FileIoFail {
            path: path.to_path_buf(),
            reason: source.to_string(),
        }
    })?;

    content.push(SENTINEL);
    Ok(Bytes::from(content))
}

/// Probe a file's size in bytes without reading it.
///
/// # Errors
///
/// - [`LicwireError::FileOpenFail`] if the file cannot be opened.
/// - [`LicwireError::FileIoFail`] if the metadata probe fails or the
///   file is empty.
pub async fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();

    let file = File::open(path).await.map_err(|source| {
        error!(path = %path.display(), %source, "failed to open file");
        LicwireError::FileOpenFail {
            path: path.to_path_buf(),
            source,
        }
    })?;

    probe_size(path, &file).await
}

/// Size of an already-opened file; zero-length files are an error.
async fn probe_size(path: &Path, file: &File) -> Result<u64> {
    let metadata = file.metadata().await.map_err(|source| {
        error!(path = %path.display(), %source, "failed to probe file size");
        LicwireError::FileIoFail {
            path: path.to_path_buf(),
            reason: source.to_string(),
        }
    })?;

    if metadata.len() == 0 {
        error!(path = %path.display(), "file is empty");
        return Err(LicwireError::FileIoFail {
            path: path.to_path_buf(),
            reason: "file is empty".to_string(),
        });
    }

    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_file_content_appends_sentinel() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"a\":1}").unwrap();

        let content = read_file_content(file.path()).await.unwrap();
        assert_eq!(&content[..], b"{\"a\":1}\0");
    }

    #[tokio::test]
    async fn test_read_file_content_feeds_framing() {
        use crate::buffer::ByteBuf;
        use crate::protocol::frame_terminated;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello").unwrap();

        let content = read_file_content(file.path()).await.unwrap();
        let mut out = ByteBuf::zeroed(32).unwrap();
        frame_terminated(&content, &mut out).unwrap();
        assert_eq!(out.as_slice(), b"00000005hello");
    }

    #[tokio::test]
    async fn test_missing_file_is_open_fail() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file_content(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(LicwireError::FileOpenFail { .. })));
    }

    #[tokio::test]
    async fn test_empty_file_is_io_fail() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = read_file_content(file.path()).await;
        assert!(matches!(result, Err(LicwireError::FileIoFail { .. })));
    }

    #[tokio::test]
    async fn test_file_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();

        assert_eq!(file_size(file.path()).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_file_size_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = file_size(dir.path().join("absent.bin")).await;
        assert!(matches!(result, Err(LicwireError::FileOpenFail { .. })));
    }
}
