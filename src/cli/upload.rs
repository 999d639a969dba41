//! Upload command - send a local file to S3.

use tracing::info;

use crate::cli::output;
use crate::core::aws::S3ObjectStore;
use crate::core::transfer;
use crate::error::Result;

/// Upload `file` to `bucket` under the subdirectory prefix.
pub fn execute(bucket: &str, file: &str, subdirectory: &str) -> Result<()> {
    let store = S3ObjectStore::connect()?;
    let key = transfer::upload(&store, bucket, subdirectory, file)?;

    info!(bucket, key = %key, "upload complete");
    output::success(&format!(
        "uploaded {} to s3://{}/{}",
        output::path(file),
        bucket,
        key
    ));
    Ok(())
}
