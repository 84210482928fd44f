//! View-layer collaborators.
//!
//! The core never touches a page directly. The embedding front-end supplies
//! a `ViewHooks` implementation and the helpers here drive it: redirect when
//! a protected page has no session, push the signed-in display name into the
//! header, and render form messages. All hooks are fire-and-forget sinks.

use crate::auth::SessionStore;
use crate::storage::KeyValueStore;

pub trait ViewHooks {
    /// Navigate to the login page. Called when a protected page is opened
    /// without a valid session.
    fn redirect_to_login(&self);

    /// Show the signed-in account's display name in the page header.
    fn set_display_name(&self, name: &str);

    /// Render an error message next to a form field.
    fn show_error(&self, field: &str, message: &str);

    /// Render a success message next to a form field.
    fn show_success(&self, field: &str, message: &str);
}

/// Gate for protected pages: true when a valid session exists, otherwise
/// fires the redirect hook and returns false.
pub fn require_auth<S: KeyValueStore, V: ViewHooks>(sessions: &SessionStore<S>, view: &V) -> bool {
    if sessions.is_logged_in() {
        true
    } else {
        view.redirect_to_login();
        false
    }
}

/// Push the current account's display name to the header, if signed in.
pub fn refresh_profile<S: KeyValueStore, V: ViewHooks>(sessions: &SessionStore<S>, view: &V) {
    if let Some(account) = sessions.current_account() {
        view.set_display_name(&account.full_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CredentialStore;
    use crate::namespace::Namespace;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;

    /// Records every hook call for assertions.
    #[derive(Default)]
    struct RecordingView {
        redirects: RefCell<usize>,
        display_names: RefCell<Vec<String>>,
    }

    impl ViewHooks for RecordingView {
        fn redirect_to_login(&self) {
            *self.redirects.borrow_mut() += 1;
        }
        fn set_display_name(&self, name: &str) {
            self.display_names.borrow_mut().push(name.to_string());
        }
        fn show_error(&self, _field: &str, _message: &str) {}
        fn show_success(&self, _field: &str, _message: &str) {}
    }

    fn logged_in_sessions() -> SessionStore<MemoryStore> {
        let store = MemoryStore::new();
        let creds = CredentialStore::new(store.clone(), Namespace::Admin);
        assert!(creds.signup("Ada Lovelace", "ada@example.com", "secret1").success);
        let sessions = SessionStore::new(store, Namespace::Admin);
        assert!(sessions.login("ada@example.com", "secret1").success);
        sessions
    }

    #[test]
    fn test_require_auth_passes_with_session() {
        let sessions = logged_in_sessions();
        let view = RecordingView::default();
        assert!(require_auth(&sessions, &view));
        assert_eq!(*view.redirects.borrow(), 0);
    }

    #[test]
    fn test_require_auth_redirects_without_session() {
        let sessions = SessionStore::new(MemoryStore::new(), Namespace::Admin);
        let view = RecordingView::default();
        assert!(!require_auth(&sessions, &view));
        assert_eq!(*view.redirects.borrow(), 1);
    }

    #[test]
    fn test_refresh_profile_sets_display_name() {
        let sessions = logged_in_sessions();
        let view = RecordingView::default();
        refresh_profile(&sessions, &view);
        assert_eq!(view.display_names.borrow().as_slice(), ["Ada Lovelace"]);
    }

    #[test]
    fn test_refresh_profile_is_silent_when_signed_out() {
        let sessions = SessionStore::new(MemoryStore::new(), Namespace::Admin);
        let view = RecordingView::default();
        refresh_profile(&sessions, &view);
        assert!(view.display_names.borrow().is_empty());
    }
}
