//! Form-field validation predicates shared by the signup and login flows.
//!
//! These functions are pure and do no I/O. Rendering of error and success
//! messages belongs to the embedding front-end (see the `view` module).

/// Result of a password-strength check: `valid` plus the first failing
/// rule's message, or a success message when all rules pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
    pub valid: bool,
    pub message: &'static str,
}

/// Check for `local@domain.tld` shape: a non-empty local part, exactly one
/// `@` separating it from a domain that contains a `.` with non-empty text
/// on both sides, and no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // The last '.' must have at least one character on each side.
    match domain.rfind('.') {
        Some(idx) => idx > 0 && idx + 1 < domain.len(),
        None => false,
    }
}

/// End-user password rules: at least 8 characters, one uppercase letter,
/// one digit. Rules are checked in order and the first failure wins.
pub fn validate_password(password: &str) -> PasswordCheck {
    if password.chars().count() < 8 {
        return PasswordCheck {
            valid: false,
            message: "Password must be at least 8 characters long",
        };
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordCheck {
            valid: false,
            message: "Password must contain at least one uppercase letter",
        };
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PasswordCheck {
            valid: false,
            message: "Password must contain at least one number",
        };
    }
    PasswordCheck {
        valid: true,
        message: "Password is strong",
    }
}

/// Exact equality check for the password / confirm-password pair.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}
