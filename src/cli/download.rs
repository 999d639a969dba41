//! Download command - fetch an object from S3 onto local disk.

use tracing::info;

use crate::cli::output;
use crate::core::aws::S3ObjectStore;
use crate::core::transfer;
use crate::error::Result;

/// Download the object for `file` from `bucket`, overwriting the local file.
pub fn execute(bucket: &str, file: &str, subdirectory: &str) -> Result<()> {
    let store = S3ObjectStore::connect()?;
    let key = transfer::download(&store, bucket, subdirectory, file)?;

    info!(bucket, key = %key, "download complete");
    output::success(&format!(
        "downloaded s3://{}/{} to {}",
        bucket,
        key,
        output::path(file)
    ));
    Ok(())
}
