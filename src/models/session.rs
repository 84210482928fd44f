use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::generate_token;

/// The single active session slot for a namespace.
///
/// `account_id` references the authenticated account; the session does not
/// own the account record. `expires_at` is present only in namespaces with
/// a session TTL - admin sessions never expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub session_token: String,
    pub account_id: String,
    pub login_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionData {
    /// Fresh session for an account, expiring after `ttl` if given.
    pub fn new(account_id: &str, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            session_token: generate_token(),
            account_id: account_id.to_string(),
            login_time: now,
            expires_at: ttl.map(|ttl| now + ttl),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() > expires_at,
            None => false,
        }
    }

    /// A session is valid when it carries a token and a subject and has
    /// not expired.
    pub fn is_valid(&self) -> bool {
        !self.session_token.is_empty() && !self.account_id.is_empty() && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_valid() {
        let session = SessionData::new("acct1", Some(Duration::hours(24)));
        assert!(!session.session_token.is_empty());
        assert!(session.is_valid());
        assert!(!session.is_expired());
    }

    #[test]
    fn test_session_without_ttl_never_expires() {
        let mut session = SessionData::new("acct1", None);
        session.login_time = Utc::now() - Duration::days(365);
        assert!(!session.is_expired());
        assert!(session.is_valid());
    }

    #[test]
    fn test_expired_session_is_invalid() {
        let mut session = SessionData::new("acct1", Some(Duration::hours(24)));
        session.expires_at = Some(Utc::now() - Duration::minutes(1));
        assert!(session.is_expired());
        assert!(!session.is_valid());
    }

    #[test]
    fn test_empty_token_is_invalid() {
        let mut session = SessionData::new("acct1", None);
        session.session_token.clear();
        assert!(!session.is_valid());
    }

    #[test]
    fn test_expires_at_omitted_when_absent() {
        let session = SessionData::new("acct1", None);
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("expiresAt"));

        let with_ttl = SessionData::new("acct1", Some(Duration::hours(24)));
        let json = serde_json::to_string(&with_ttl).unwrap();
        assert!(json.contains("expiresAt"));
    }
}
