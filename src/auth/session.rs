//! Login, logout, and the single active session slot.
//!
//! A namespace has at most one session at a time: login overwrites the
//! slot, logout clears it, and an expired session is deleted lazily the
//! next time it is observed.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::hashing::PasswordHasher;
use crate::models::{AccountSummary, SessionData};
use crate::namespace::Namespace;
use crate::storage::KeyValueStore;

use super::credentials::{load_accounts, normalize_email};
use super::AuthOutcome;

const MSG_CREDENTIALS_REQUIRED: &str = "Email and password are required";
const MSG_LOGIN_OK: &str = "Login successful!";
const MSG_LOGIN_FAILED: &str = "An error occurred during login";

/// Per-namespace session slot backed by an injected store.
pub struct SessionStore<S> {
    store: S,
    namespace: Namespace,
    hasher: PasswordHasher,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, namespace: Namespace) -> Self {
        Self::with_hasher(store, namespace, PasswordHasher::new())
    }

    /// Store with a pinned hash strategy. Must match the strategy the
    /// credential store used, or no login will ever succeed.
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

    /// The raw session slot, if one is persisted. No validity check.
    pub fn session(&self) -> Result<Option<SessionData>> {
        match self.store.get(self.namespace.session_key())? {
            Some(blob) => serde_json::from_str(&blob)
                .context("Failed to parse session blob")
                .map(Some),
            None => Ok(None),
        }
    }

    /// Authenticate and open a session, replacing any prior one. Never
    /// fails outward; an unknown email and a wrong password produce the
    /// same message.
    pub fn login(&self, email: &str, password: &str) -> AuthOutcome {
        match self.try_login(email, password) {
            Ok(account) => {
                debug!(namespace = %self.namespace, "session created");
                AuthOutcome::ok_with_account(MSG_LOGIN_OK, account)
            }
            Err(err) => {
                if let AuthError::Storage(ref cause) = err {
                    warn!(namespace = %self.namespace, error = %cause, "login failed");
                }
                AuthOutcome::rejected(err.surface_message(MSG_LOGIN_FAILED))
            }
        }
    }

    fn try_login(&self, email: &str, password: &str) -> Result<AccountSummary, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(MSG_CREDENTIALS_REQUIRED));
        }

        let accounts = load_accounts(&self.store, self.namespace)?;
        let email = normalize_email(email);
        let account = accounts
            .iter()
            .find(|a| a.email == email)
            .ok_or(AuthError::InvalidCredentials)?;

        if self.hasher.hash(password) != account.password_hash {
            return Err(AuthError::InvalidCredentials);
        }

        let session = SessionData::new(&account.id, self.namespace.session_ttl());
        let blob = serde_json::to_string(&session).context("Failed to serialize session blob")?;
        self.store.set(self.namespace.session_key(), &blob)?;
        Ok(account.summary())
    }

    /// Clear the session slot. Idempotent: logging out with no active
    /// session is not an error.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(self.namespace.session_key())
    }

    /// True iff a valid session exists. Observing an expired session
    /// deletes it before returning false.
    pub fn is_logged_in(&self) -> bool {
        let session = match self.session() {
            Ok(Some(session)) => session,
            Ok(None) => return false,
            Err(err) => {
                warn!(namespace = %self.namespace, error = %err, "failed to read session");
                return false;
            }
        };

        if session.session_token.is_empty() || session.account_id.is_empty() {
            return false;
        }
        if session.is_expired() {
            debug!(namespace = %self.namespace, "session expired, clearing");
            if let Err(err) = self.logout() {
                warn!(namespace = %self.namespace, error = %err, "failed to clear expired session");
            }
            return false;
        }
        true
    }

    /// Sanitized account for the current session's subject, or `None` when
    /// there is no valid session or the account no longer exists.
    pub fn current_account(&self) -> Option<AccountSummary> {
        if !self.is_logged_in() {
            return None;
        }
        let session = match self.session() {
            Ok(Some(session)) => session,
            _ => return None,
        };
        let accounts = match load_accounts(&self.store, self.namespace) {
            Ok(accounts) => accounts,
            Err(err) => {
                debug!(namespace = %self.namespace, error = %err, "failed to load accounts");
                return None;
            }
        };
        accounts
            .iter()
            .find(|a| a.id == session.account_id)
            .map(|a| a.summary())
    }
}
