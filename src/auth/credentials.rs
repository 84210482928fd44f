//! Credential persistence and the signup pipeline.
//!
//! Accounts for a namespace live in one storage key as a single serialized
//! collection. Reads and writes always cover the whole collection - there
//! are no incremental updates, matching the original blob layout.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::hashing::PasswordHasher;
use crate::models::Account;
use crate::namespace::Namespace;
use crate::storage::KeyValueStore;
use crate::utils::generate_id;
use crate::validate;

use super::AuthOutcome;

const MSG_FIELDS_REQUIRED: &str = "All fields are required";
const MSG_INVALID_EMAIL: &str = "Invalid email format";
const MSG_EMAIL_TAKEN: &str = "Email already registered";
const MSG_SIGNUP_OK: &str = "Account created successfully!";
const MSG_SIGNUP_FAILED: &str = "An error occurred during signup";

/// Load the full account collection for a namespace. An absent key reads
/// as an empty collection.
pub(crate) fn load_accounts<S: KeyValueStore>(
    store: &S,
    namespace: Namespace,
) -> Result<Vec<Account>> {
    match store.get(namespace.credentials_key())? {
        Some(blob) => serde_json::from_str(&blob).context("Failed to parse credentials blob"),
        None => Ok(Vec::new()),
    }
}

/// Overwrite the full account collection for a namespace.
pub(crate) fn store_accounts<S: KeyValueStore>(
    store: &S,
    namespace: Namespace,
    accounts: &[Account],
) -> Result<()> {
    let blob = serde_json::to_string(accounts).context("Failed to serialize credentials blob")?;
    store.set(namespace.credentials_key(), &blob)
}

/// Canonical form used for storage and lookups.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Per-namespace account collection backed by an injected store.
pub struct CredentialStore<S> {
    store: S,
    namespace: Namespace,
    hasher: PasswordHasher,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S, namespace: Namespace) -> Self {
        Self::with_hasher(store, namespace, PasswordHasher::new())
    }

    /// Store with a pinned hash strategy, for tests and degraded contexts.
    pub fn with_hasher(store: S, namespace: Namespace, hasher: PasswordHasher) -> Self {
        Self {
            store,
            namespace,
            hasher,
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// All registered accounts in this namespace.
    pub fn list(&self) -> Result<Vec<Account>> {
        load_accounts(&self.store, self.namespace)
    }

    /// Replace the stored collection wholesale.
    pub fn save(&self, accounts: &[Account]) -> Result<()> {
        store_accounts(&self.store, self.namespace, accounts)
    }

    /// Register a new account. Never fails outward: validation, conflict,
    /// and storage faults all surface as a `{success: false, message}`
    /// outcome.
    pub fn signup(&self, full_name: &str, email: &str, password: &str) -> AuthOutcome {
        match self.try_signup(full_name, email, password) {
            Ok(()) => {
                debug!(namespace = %self.namespace, "account created");
                AuthOutcome::ok(MSG_SIGNUP_OK)
            }
            Err(err) => {
                if let AuthError::Storage(ref cause) = err {
                    warn!(namespace = %self.namespace, error = %cause, "signup failed");
                }
                AuthOutcome::rejected(err.surface_message(MSG_SIGNUP_FAILED))
            }
        }
    }

    fn try_signup(&self, full_name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if full_name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(MSG_FIELDS_REQUIRED));
        }
        if !validate::validate_email(email.trim()) {
            return Err(AuthError::Validation(MSG_INVALID_EMAIL));
        }
        self.namespace
            .check_password(password)
            .map_err(AuthError::Validation)?;

        let mut accounts = load_accounts(&self.store, self.namespace)?;
        let email = normalize_email(email);
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::Conflict(MSG_EMAIL_TAKEN));
        }

        let account = Account {
            id: generate_id(),
            full_name: full_name.trim().to_string(),
            email,
            password_hash: self.hasher.hash(password),
            created_at: Utc::now(),
        };
        accounts.push(account);
        store_accounts(&self.store, self.namespace, &accounts)?;
        Ok(())
    }
}
