//! Single-shot file transfer between local disk and an object store.
//!
//! Files move whole: one read, one put (or one get, one write). No
//! chunking, no resumability, no integrity check.

use std::fs;

use tracing::debug;

use crate::error::{Error, Result};

/// Capability interface over an object store keyed by bucket + key.
pub trait ObjectStore {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> Result<()>;
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

/// Build the object key from the subdirectory prefix and file path.
///
/// Plain concatenation. Keys are not normalized so existing objects stay
/// addressable; an empty subdirectory yields a leading slash.
pub fn object_key(subdirectory: &str, file_path: &str) -> String {
    format!("{subdirectory}/{file_path}")
}

/// Read a local file and store it whole under the derived key.
///
/// Returns the object key the file was stored under.
///
/// # Errors
///
/// Fails if the local file cannot be read or the put fails.
pub fn upload(
    store: &dyn ObjectStore,
    bucket: &str,
    subdirectory: &str,
    file_path: &str,
) -> Result<String> {
    let data = fs::read(file_path).map_err(|source| Error::ReadFile {
        path: file_path.to_string(),
        source,
    })?;

    let key = object_key(subdirectory, file_path);
    debug!(bucket, key = %key, bytes = data.len(), "uploading object");
    store.put(bucket, &key, &data)?;
    Ok(key)
}

/// Fetch the object under the derived key and write it to `file_path`,
/// overwriting any existing file.
///
/// Returns the object key the file was fetched from.
///
/// # Errors
///
/// Fails if the get fails or the local file cannot be written.
pub fn download(
    store: &dyn ObjectStore,
    bucket: &str,
    subdirectory: &str,
    file_path: &str,
) -> Result<String> {
    let key = object_key(subdirectory, file_path);
    debug!(bucket, key = %key, "downloading object");
    let data = store.get(bucket, &key)?;

    fs::write(file_path, data).map_err(|source| Error::WriteFile {
        path: file_path.to_string(),
        source,
    })?;
    Ok(key)
}
