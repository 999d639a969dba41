//! Command-line interface.

pub mod completions;
pub mod download;
pub mod output;
pub mod secret;
pub mod upload;

use clap::{Parser, Subcommand};

/// Stowaway - stash files in S3 and secrets in AWS Secrets Manager.
#[derive(Parser)]
#[command(
    name = "stowaway",
    about = "Stash files in S3 and secrets in AWS Secrets Manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Upload a file to an S3 bucket
    Upload {
        /// S3 bucket name
        #[arg(short, long)]
        bucket: String,

        /// Path of the file to upload
        #[arg(short, long)]
        file: String,

        /// Subdirectory prefix for the object key
        #[arg(short, long, default_value = "")]
        subdirectory: String,
    },

    /// Download a file from an S3 bucket
    Download {
        /// S3 bucket name
        #[arg(short, long)]
        bucket: String,

        /// Path to write the downloaded file to
        #[arg(short, long)]
        file: String,

        /// Subdirectory prefix for the object key
        #[arg(short, long, default_value = "")]
        subdirectory: String,
    },

    /// Create a secret in Secrets Manager (no-op if it already exists)
    CreateSecret {
        /// Name of the secret
        #[arg(short, long)]
        name: String,

        /// AWS region
        #[arg(short, long)]
        region: String,

        /// Description of the secret
        #[arg(short, long)]
        description: String,

        /// Path to a JSON file holding the secret value
        #[arg(short, long)]
        json_file: String,

        /// Timeout in seconds for the whole operation
        #[arg(short, long, default_value_t = 30)]
        timeout: u64,
    },

    /// Update a secret in Secrets Manager, creating it if absent
    UpdateSecret {
        /// Name of the secret
        #[arg(short, long)]
        name: String,

        /// AWS region
        #[arg(short, long)]
        region: String,

        /// Description of the secret
        #[arg(short, long)]
        description: String,

        /// Path to a JSON file holding the secret value
        #[arg(short, long)]
        json_file: String,

        /// Timeout in seconds for the whole operation
        #[arg(short, long, default_value_t = 30)]
        timeout: u64,

        /// Overwrite the secret if it already exists
        #[arg(short, long)]
        update: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Upload {
            bucket,
            file,
            subdirectory,
        } => upload::execute(&bucket, &file, &subdirectory),
        Download {
            bucket,
            file,
            subdirectory,
        } => download::execute(&bucket, &file, &subdirectory),
        CreateSecret {
            name,
            region,
            description,
            json_file,
            timeout,
        } => secret::execute(secret::Args {
            name,
            region,
            description,
            json_file,
            timeout,
            update: false,
        }),
        UpdateSecret {
            name,
            region,
            description,
            json_file,
            timeout,
            update,
        } => secret::execute(secret::Args {
            name,
            region,
            description,
            json_file,
            timeout,
            update,
        }),
        Completions { shell } => completions::execute(shell),
    }
}
