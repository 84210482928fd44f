//! Site namespaces and their storage/policy constants.
//!
//! The library serves two unrelated demo front-ends: an admin dashboard and
//! the StreamZone end-user site. Each gets its own pair of storage keys, its
//! own password policy, and its own session lifetime. Nothing is shared
//! between namespaces.

use chrono::Duration;

use crate::validate;

/// Minimum password length for the admin dashboard.
/// The admin form has no character-class requirement.
const ADMIN_MIN_PASSWORD_LEN: usize = 6;

/// Session lifetime for the end-user site, in hours.
/// Admin sessions do not expire.
const USER_SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Admin dashboard accounts and session.
    Admin,
    /// StreamZone end-user accounts and session.
    User,
}

impl Namespace {
    /// Storage key holding the serialized account collection.
    pub fn credentials_key(self) -> &'static str {
        match self {
            Namespace::Admin => "adminCredentials",
            Namespace::User => "streamzone_user",
        }
    }

    /// Storage key holding the single serialized session slot.
    pub fn session_key(self) -> &'static str {
        match self {
            Namespace::Admin => "adminSession",
            Namespace::User => "streamzone_session",
        }
    }

    /// How long a session in this namespace stays valid, if it expires at all.
    pub fn session_ttl(self) -> Option<Duration> {
        match self {
            Namespace::Admin => None,
            Namespace::User => Some(Duration::hours(USER_SESSION_TTL_HOURS)),
        }
    }

    /// Apply this namespace's password policy, returning the first failing
    /// rule's message.
    pub fn check_password(self, password: &str) -> Result<(), &'static str> {
        match self {
            Namespace::Admin => {
                if password.chars().count() < ADMIN_MIN_PASSWORD_LEN {
                    Err("Password must be at least 6 characters")
                } else {
                    Ok(())
                }
            }
            Namespace::User => {
                let check = validate::validate_password(password);
                if check.valid {
                    Ok(())
                } else {
                    Err(check.message)
                }
            }
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Namespace::Admin => write!(f, "admin"),
            Namespace::User => write!(f, "user"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_disjoint() {
        assert_ne!(
            Namespace::Admin.credentials_key(),
            Namespace::User.credentials_key()
        );
        assert_ne!(
            Namespace::Admin.session_key(),
            Namespace::User.session_key()
        );
    }

    #[test]
    fn test_admin_password_policy() {
        assert!(Namespace::Admin.check_password("abcdef").is_ok());
        assert_eq!(
            Namespace::Admin.check_password("abc"),
            Err("Password must be at least 6 characters")
        );
        // No character-class requirement for admins
        assert!(Namespace::Admin.check_password("lowercase").is_ok());
    }

    #[test]
    fn test_user_password_policy() {
        assert!(Namespace::User.check_password("Abcdefg1").is_ok());
        assert_eq!(
            Namespace::User.check_password("abcdefgh"),
            Err("Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_session_ttl() {
        assert!(Namespace::Admin.session_ttl().is_none());
        assert_eq!(
            Namespace::User.session_ttl(),
            Some(Duration::hours(24))
        );
    }
}
