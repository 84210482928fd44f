//! Authentication module: credential persistence and session management.
//!
//! This module provides:
//! - `CredentialStore`: the per-namespace account collection with signup
//! - `SessionStore`: login/logout and the single active session slot
//!
//! Both operate on an injected `KeyValueStore`. Every public entry point
//! that a form calls returns an `AuthOutcome` rather than an error: faults
//! are recovered and reduced to a user-facing message.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::SessionStore;

use crate::models::AccountSummary;

/// Result shape handed back to signup/login forms.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
    /// Sanitized account, present on a successful login.
    pub account: Option<AccountSummary>,
}

impl AuthOutcome {
    pub(crate) fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            account: None,
        }
    }

    pub(crate) fn ok_with_account(message: &str, account: AccountSummary) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            account: Some(account),
        }
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            account: None,
        }
    }
}
