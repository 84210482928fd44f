//! Data models for persisted auth state.
//!
//! - `Account`: a registered admin or end-user record
//! - `AccountSummary`: the sanitized projection handed to callers
//! - `SessionData`: the single active session slot for a namespace
//!
//! Fields serialize in camelCase so the blobs stay byte-compatible with
//! what the original front-ends wrote.

pub mod account;
pub mod session;

pub use account::{Account, AccountSummary};
pub use session::SessionData;
