//! Secrets Manager-backed secret store.

use std::future::Future;
use std::time::{Duration, Instant};

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::core::upsert::{SecretExistence, SecretStore};
use crate::error::{Error, Result};

/// Secret store backed by AWS Secrets Manager in one region.
///
/// A deadline fixed at construction bounds every call made through this
/// store, so the describe + create/update sequence of an upsert shares a
/// single time budget.
pub struct SecretsManagerStore {
    rt: Runtime,
    client: Client,
    deadline: Instant,
    timeout: Duration,
}

impl SecretsManagerStore {
    /// Load AWS configuration for `region` and start the timeout clock.
    pub fn connect(region: &str, timeout: Duration) -> Result<Self> {
        let rt = super::runtime()?;
        let client = rt.block_on(async {
            let config = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load()
                .await;
            Client::new(&config)
        });

        Ok(Self {
            rt,
            client,
            deadline: Instant::now() + timeout,
            timeout,
        })
    }

    /// Run `fut` under whatever remains of the shared time budget.
    fn bounded<T>(&self, fut: impl Future<Output = T>) -> Result<T> {
        let remaining = self
            .deadline
            .checked_duration_since(Instant::now())
            .ok_or(Error::Timeout(self.timeout))?;
        self.rt
            .block_on(tokio::time::timeout(remaining, fut))
            .map_err(|_| Error::Timeout(self.timeout))
    }
}

impl SecretStore for SecretsManagerStore {
    fn describe(&self, name: &str) -> Result<SecretExistence> {
        debug!(name, "DescribeSecret");
        match self.bounded(self.client.describe_secret().secret_id(name).send())? {
            Ok(_) => Ok(SecretExistence::Exists),
            Err(e) => {
                // Discriminate not-found by the service's error kind, not
                // by matching message text.
                let service_err = e.into_service_error();
                if service_err.is_resource_not_found_exception() {
                    Ok(SecretExistence::NotFound)
                } else {
                    Err(Error::DescribeSecret {
                        name: name.to_string(),
                        message: DisplayErrorContext(&service_err).to_string(),
                    })
                }
            }
        }
    }

    fn create(&self, name: &str, description: &str, value: &str) -> Result<String> {
        debug!(name, "CreateSecret");
        let output = self
            .bounded(
                self.client
                    .create_secret()
                    .name(name)
                    .description(description)
                    .secret_string(value)
                    .send(),
            )?
            .map_err(|e| Error::CreateSecret {
                name: name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        output
            .arn()
            .map(ToString::to_string)
            .ok_or_else(|| Error::CreateSecret {
                name: name.to_string(),
                message: "response contained no ARN".to_string(),
            })
    }

    fn update(&self, name: &str, description: &str, value: &str) -> Result<()> {
        debug!(name, "UpdateSecret");
        self.bounded(
            self.client
                .update_secret()
                .secret_id(name)
                .description(description)
                .secret_string(value)
                .send(),
        )?
        .map_err(|e| Error::UpdateSecret {
            name: name.to_string(),
            message: DisplayErrorContext(&e).to_string(),
        })?;
        Ok(())
    }
}
