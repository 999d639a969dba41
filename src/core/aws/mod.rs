//! AWS SDK adapters.
//!
//! The CLI is synchronous; each adapter owns a current-thread tokio
//! runtime and blocks on the async AWS SDK internally. Credentials come
//! from the SDK's default provider chain (environment, shared config,
//! instance metadata).

pub mod s3;
pub mod secrets;

pub use s3::S3ObjectStore;
pub use secrets::SecretsManagerStore;

use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Build the single-threaded runtime an adapter drives the SDK with.
pub(crate) fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)
}
