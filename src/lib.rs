//! localauth - client-side credential and session storage helpers.
//!
//! Persistence helpers for two unrelated demo front-ends (an admin
//! dashboard and the StreamZone site). Each namespace keeps its registered
//! accounts and a single active session in an injected key-value blob
//! store, hashes passwords with a best-effort digest, and validates
//! signup/login form fields.
//!
//! A typical flow:
//!
//! ```
//! use localauth::{CredentialStore, MemoryStore, Namespace, SessionStore};
//!
//! let store = MemoryStore::new();
//! let creds = CredentialStore::new(store.clone(), Namespace::User);
//! let sessions = SessionStore::new(store, Namespace::User);
//!
//! assert!(creds.signup("Ada Lovelace", "ada@example.com", "Abcdefg1").success);
//! let outcome = sessions.login("ada@example.com", "Abcdefg1");
//! assert!(outcome.success);
//! assert!(sessions.is_logged_in());
//! ```

pub mod auth;
pub mod error;
pub mod hashing;
pub mod models;
pub mod namespace;
pub mod storage;
pub mod utils;
pub mod validate;
pub mod view;

pub use auth::{AuthOutcome, CredentialStore, SessionStore};
pub use error::AuthError;
pub use hashing::{HashStrategy, PasswordHasher};
pub use models::{Account, AccountSummary, SessionData};
pub use namespace::Namespace;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use validate::{passwords_match, validate_email, validate_password, PasswordCheck};
pub use view::ViewHooks;
