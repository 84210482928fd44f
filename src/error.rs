use thiserror::Error;

/// Failures raised by the signup and login pipelines.
///
/// Every variant is recovered before reaching a caller: the public
/// `signup`/`login` entry points convert these into an `AuthOutcome`
/// with a user-facing message and never propagate a raw fault.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A form field is missing or malformed.
    #[error("{0}")]
    Validation(&'static str),

    /// The email is already registered in this namespace.
    #[error("{0}")]
    Conflict(&'static str),

    /// Unknown email or wrong password. Deliberately a single variant so
    /// the two cases stay indistinguishable to the caller.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Underlying store or serialization failure.
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AuthError {
    /// The message surfaced to the form. Storage faults collapse to the
    /// operation's generic failure message so internals never leak.
    pub fn surface_message(&self, storage_fallback: &'static str) -> String {
        match self {
            AuthError::Storage(_) => storage_fallback.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_storage_error_collapses_to_fallback() {
        let err = AuthError::Storage(anyhow::anyhow!("disk on fire"));
        assert_eq!(
            err.surface_message("An error occurred during signup"),
            "An error occurred during signup"
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AuthError::Validation("All fields are required");
        assert_eq!(
            err.surface_message("An error occurred during signup"),
            "All fields are required"
        );
    }
}
