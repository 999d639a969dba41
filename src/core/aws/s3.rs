//! S3-backed object store.

use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::core::transfer::ObjectStore;
use crate::error::{Error, Result};

/// Object store backed by S3.
///
/// Region comes from the default provider chain; the bucket is chosen
/// per call.
pub struct S3ObjectStore {
    rt: Runtime,
    client: Client,
}

impl S3ObjectStore {
    /// Load the default AWS configuration and build a client.
    pub fn connect() -> Result<Self> {
        let rt = super::runtime()?;
        let client = rt.block_on(async {
            let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            Client::new(&config)
        });
        Ok(Self { rt, client })
    }
}

impl ObjectStore for S3ObjectStore {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> Result<()> {
        debug!(bucket, key, bytes = bytes.len(), "PutObject");
        self.rt
            .block_on(
                self.client
                    .put_object()
                    .bucket(bucket)
                    .key(key)
                    .body(ByteStream::from(bytes.to_vec()))
                    .send(),
            )
            .map_err(|e| Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }

    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        debug!(bucket, key, "GetObject");
        self.rt.block_on(async {
            let resp = self
                .client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| Error::Download {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            let body = resp.body.collect().await.map_err(|e| Error::Download {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?;
            Ok(body.into_bytes().to_vec())
        })
    }
}
