use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account. Created once at signup, never updated or deleted.
///
/// `email` is stored lower-cased and trimmed; uniqueness within a namespace
/// is checked at signup time only. `password_hash` is the fixed-width hex
/// digest from the hasher, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// The sanitized projection: everything except the password hash.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Account view safe to hand to callers and the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_password_hash() {
        let account = Account {
            id: "id1".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password_hash: "deadbeef".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&account.summary()).unwrap();
        assert!(!json.contains("deadbeef"));
        assert!(!json.contains("passwordHash"));
        assert!(json.contains("\"fullName\":\"Ada Lovelace\""));
    }

    #[test]
    fn test_account_serializes_camel_case() {
        let account = Account {
            id: "id1".into(),
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "00".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"passwordHash\""));
        assert!(json.contains("\"createdAt\""));
    }
}
