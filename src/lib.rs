//! Stowaway - stash files in S3 and secrets in AWS Secrets Manager.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── upload        # Upload a file to S3
//! │   ├── download      # Download a file from S3
//! │   ├── secret        # Create/update Secrets Manager secrets
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── transfer      # Local file <-> object store plumbing
//!     ├── upsert        # Create-or-update decision procedure
//!     └── aws/          # SDK-backed capability implementations
//!         ├── s3        # ObjectStore over aws-sdk-s3
//!         └── secrets   # SecretStore over aws-sdk-secretsmanager
//! ```
//!
//! The core modules only see the `ObjectStore` and `SecretStore` traits;
//! the AWS SDK stays behind the adapters in `core::aws`.

pub mod cli;
pub mod core;
pub mod error;
