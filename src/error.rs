use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("upload to s3://{bucket}/{key} failed: {message}")]
    Upload {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("download from s3://{bucket}/{key} failed: {message}")]
    Download {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("failed to describe secret {name}: {message}")]
    DescribeSecret { name: String, message: String },

    #[error("failed to create secret {name}: {message}")]
    CreateSecret { name: String, message: String },

    #[error("failed to update secret {name}: {message}")]
    UpdateSecret { name: String, message: String },

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
