//! Create-or-update decision procedure for secrets.
//!
//! Given the existence state of a secret and the caller's intent, exactly
//! one terminal action is taken: create, update, or leave alone. A failed
//! existence check aborts before any mutation; nothing is retried.

use tracing::info;
use zeroize::Zeroizing;

use crate::error::Result;

/// What a describe call learned about a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretExistence {
    Exists,
    NotFound,
}

/// Terminal outcome of an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The secret did not exist and was created; `arn` identifies it.
    Created { arn: String },
    /// The secret existed and was overwritten.
    Updated,
    /// The secret existed and no update was requested; nothing changed.
    AlreadyExists,
}

/// A secret to create or update, as collected from the command line.
///
/// `value` holds the raw contents of the `--json-file` argument. It is
/// deliberately not parsed or validated as JSON, and is zeroed on drop.
pub struct SecretSpec {
    pub name: String,
    pub description: String,
    pub value: Zeroizing<String>,
    pub update_requested: bool,
}

/// Capability interface over a secrets service.
pub trait SecretStore {
    /// Report whether a secret with `name` exists. Any failure other than
    /// the service's own not-found signal is an `Err`.
    fn describe(&self, name: &str) -> Result<SecretExistence>;

    /// Create a new secret. Returns its ARN.
    fn create(&self, name: &str, description: &str, value: &str) -> Result<String>;

    /// Overwrite the description and value of an existing secret.
    fn update(&self, name: &str, description: &str, value: &str) -> Result<()>;
}

/// Decide and perform exactly one terminal action for `spec`.
///
/// - secret absent: create it, whether or not an update was requested
/// - secret present, update requested: update it
/// - secret present, no update requested: leave it alone
///
/// # Errors
///
/// A describe failure aborts before any mutation; a create/update failure
/// is surfaced as-is. Either way at most one mutation call was made.
pub fn upsert(store: &dyn SecretStore, spec: &SecretSpec) -> Result<UpsertOutcome> {
    match store.describe(&spec.name)? {
        SecretExistence::Exists if !spec.update_requested => {
            info!(name = %spec.name, "secret exists and no update requested, leaving it alone");
            Ok(UpsertOutcome::AlreadyExists)
        }
        SecretExistence::Exists => {
            store.update(&spec.name, &spec.description, &spec.value)?;
            info!(name = %spec.name, "secret updated");
            Ok(UpsertOutcome::Updated)
        }
        SecretExistence::NotFound => {
            let arn = store.create(&spec.name, &spec.description, &spec.value)?;
            info!(name = %spec.name, %arn, "secret created");
            Ok(UpsertOutcome::Created { arn })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;
    use std::cell::RefCell;

    /// Records every mutation call; `existence: None` makes describe fail.
    struct MockStore {
        existence: Option<SecretExistence>,
        creates: RefCell<Vec<(String, String, String)>>,
        updates: RefCell<Vec<(String, String, String)>>,
    }

    impl MockStore {
        fn new(existence: Option<SecretExistence>) -> Self {
            Self {
                existence,
                creates: RefCell::new(Vec::new()),
                updates: RefCell::new(Vec::new()),
            }
        }
    }

    impl SecretStore for MockStore {
        fn describe(&self, name: &str) -> Result<SecretExistence> {
            self.existence.ok_or_else(|| Error::DescribeSecret {
                name: name.to_string(),
                message: "access denied".to_string(),
            })
        }

        fn create(&self, name: &str, description: &str, value: &str) -> Result<String> {
            self.creates.borrow_mut().push((
                name.to_string(),
                description.to_string(),
                value.to_string(),
            ));
            Ok(format!(
                "arn:aws:secretsmanager:us-east-1:123456789012:secret:{name}-AbCdEf"
            ))
        }

        fn update(&self, name: &str, description: &str, value: &str) -> Result<()> {
            self.updates.borrow_mut().push((
                name.to_string(),
                description.to_string(),
                value.to_string(),
            ));
            Ok(())
        }
    }

    fn db_pass_spec(update_requested: bool) -> SecretSpec {
        SecretSpec {
            name: "db-pass".to_string(),
            description: "prod db password".to_string(),
            value: Zeroizing::new(r#"{"password":"x"}"#.to_string()),
            update_requested,
        }
    }

    #[test]
    fn absent_secret_is_created_with_file_contents() {
        let store = MockStore::new(Some(SecretExistence::NotFound));

        let outcome = upsert(&store, &db_pass_spec(false)).unwrap();

        match outcome {
            UpsertOutcome::Created { arn } => assert!(arn.contains("db-pass")),
            other => panic!("expected Created, got {other:?}"),
        }

        let creates = store.creates.borrow();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].0, "db-pass");
        assert_eq!(creates[0].1, "prod db password");
        assert_eq!(creates[0].2, r#"{"password":"x"}"#);
        assert!(store.updates.borrow().is_empty());
    }

    #[test]
    fn existing_secret_without_update_flag_is_left_alone() {
        let store = MockStore::new(Some(SecretExistence::Exists));

        let outcome = upsert(&store, &db_pass_spec(false)).unwrap();

        assert_eq!(outcome, UpsertOutcome::AlreadyExists);
        assert!(store.creates.borrow().is_empty());
        assert!(store.updates.borrow().is_empty());
    }

    #[test]
    fn existing_secret_with_update_flag_is_updated() {
        let store = MockStore::new(Some(SecretExistence::Exists));

        let outcome = upsert(&store, &db_pass_spec(true)).unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated);
        let updates = store.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].1, "prod db password");
        assert_eq!(updates[0].2, r#"{"password":"x"}"#);
        assert!(store.creates.borrow().is_empty());
    }

    #[test]
    fn describe_failure_aborts_before_any_mutation() {
        let store = MockStore::new(None);

        let err = upsert(&store, &db_pass_spec(true)).unwrap_err();

        assert!(matches!(err, Error::DescribeSecret { .. }));
        assert!(store.creates.borrow().is_empty());
        assert!(store.updates.borrow().is_empty());
    }

    proptest! {
        /// An absent secret is created exactly once no matter what the
        /// caller asked for.
        #[test]
        fn absent_secret_always_creates(
            update_requested in any::<bool>(),
            name in "[a-zA-Z0-9_+=.@-]{1,64}",
        ) {
            let store = MockStore::new(Some(SecretExistence::NotFound));
            let spec = SecretSpec {
                name,
                description: "d".to_string(),
                value: Zeroizing::new("v".to_string()),
                update_requested,
            };

            upsert(&store, &spec).unwrap();

            prop_assert_eq!(store.creates.borrow().len(), 1);
            prop_assert!(store.updates.borrow().is_empty());
        }

        /// An existing secret is never created again; it is updated only
        /// when the caller asked for that.
        #[test]
        fn existing_secret_never_creates(update_requested in any::<bool>()) {
            let store = MockStore::new(Some(SecretExistence::Exists));
            let spec = db_pass_spec(update_requested);

            upsert(&store, &spec).unwrap();

            prop_assert!(store.creates.borrow().is_empty());
            prop_assert_eq!(
                store.updates.borrow().len(),
                usize::from(update_requested)
            );
        }
    }
}
