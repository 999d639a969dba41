//! Create-secret and update-secret commands.
//!
//! Both run the same upsert procedure; create-secret simply never requests
//! an update, so an existing secret is left untouched.

use std::fs;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::aws::SecretsManagerStore;
use crate::core::upsert::{self, SecretSpec, UpsertOutcome};
use crate::error::{Error, Result};

/// Flags shared by the two secret commands.
pub struct Args {
    pub name: String,
    pub region: String,
    pub description: String,
    pub json_file: String,
    pub timeout: u64,
    pub update: bool,
}

/// Run the upsert procedure against Secrets Manager.
pub fn execute(args: Args) -> Result<()> {
    // The raw file contents become the secret value; the file is not
    // parsed or validated as JSON. Read it before dialing AWS so a bad
    // path fails without a network round trip.
    let value = fs::read_to_string(&args.json_file).map_err(|source| Error::ReadFile {
        path: args.json_file.clone(),
        source,
    })?;

    let spec = SecretSpec {
        name: args.name,
        description: args.description,
        value: Zeroizing::new(value),
        update_requested: args.update,
    };

    let store = SecretsManagerStore::connect(&args.region, Duration::from_secs(args.timeout))?;

    match upsert::upsert(&store, &spec)? {
        UpsertOutcome::Created { arn } => {
            output::success(&format!("created secret {}", output::key(&spec.name)));
            output::kv("arn:", arn);
        }
        UpsertOutcome::Updated => {
            output::success(&format!("updated secret {}", output::key(&spec.name)));
        }
        UpsertOutcome::AlreadyExists => {
            output::warn(&format!(
                "secret {} already exists; nothing to do",
                output::key(&spec.name)
            ));
            output::hint("pass --update to update-secret to overwrite it");
        }
    }
    Ok(())
}
